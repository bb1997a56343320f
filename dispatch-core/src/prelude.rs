//! This module reimports commonly used types.

pub use crate::fleet::{Fleet, ManifestIssue};
pub use crate::models::{
    AVERAGE_SPEED, AddressIndex, DEPOT, DeliveryStatus, Distance, END_OF_DAY, Location, Shipment, ShipmentId,
    Timestamp, VehicleId, WeightedGraph, format_time, miles_to_minutes,
};
pub use crate::solver::{RouteOptimization, RouteProblem, optimize_vehicle};
pub use crate::vehicle::{AddressCorrection, StatusReport, Vehicle, VehicleState};

// Reimport evokit types
pub use evokit::prelude::{
    DefaultRandom, Environment, EvolutionConfig, EvolutionConfigBuilder, Float, GenericError, GenericResult,
    InfoLogger, Random, TelemetryMode,
};
