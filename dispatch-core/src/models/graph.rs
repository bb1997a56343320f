#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::models::{Distance, Location, Shipment, Timestamp};
use evokit::prelude::{Float, GenericError, GenericResult};

/// The average speed of every vehicle in miles per hour. It is a system wide constant: all time
/// estimations assume vehicles never speed up or slow down.
pub const AVERAGE_SPEED: Float = 18.;

/// Converts distance in miles into travel time in minutes at `AVERAGE_SPEED`.
pub fn miles_to_minutes(miles: Distance) -> Timestamp {
    miles / AVERAGE_SPEED * 60.
}

/// An immutable symmetric matrix of distances between locations.
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    size: usize,
    distances: Vec<Distance>,
}

impl WeightedGraph {
    /// Creates a graph from rows of a lower triangular (or full) matrix. Values of the lower
    /// triangle, including diagonal, are mirrored into the upper one. Missing values of the
    /// upper triangle are allowed and ignored.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> GenericResult<Self> {
        let size = rows.len();

        if let Some((idx, row)) = rows.iter().enumerate().find(|(idx, row)| row.len() <= *idx || row.len() > size) {
            return Err(GenericError::validation(format!(
                "matrix is not square: row {idx} has {} values, expected between {} and {size}",
                row.len(),
                idx + 1
            )));
        }

        let mut distances = vec![0.; size * size];
        for (from, row) in rows.iter().enumerate() {
            for (to, &value) in row.iter().enumerate().take(from + 1) {
                if !value.is_finite() || value < 0. {
                    return Err(GenericError::validation(format!(
                        "distance between {from} and {to} should be finite and non-negative, got: {value}"
                    )));
                }

                if from == to && value != 0. {
                    return Err(GenericError::validation(format!(
                        "distance from {from} to itself should be zero, got: {value}"
                    )));
                }

                distances[from * size + to] = value;
                distances[to * size + from] = value;
            }
        }

        Ok(Self { size, distances })
    }

    /// Creates a graph from a flattened full matrix in row major order.
    pub fn from_matrix(values: Vec<Distance>) -> GenericResult<Self> {
        let size = (values.len() as Float).sqrt().round() as usize;

        if size * size != values.len() {
            return Err(GenericError::validation(format!("matrix is not square: it has {} values", values.len())));
        }

        Self::from_rows(values.chunks(size.max(1)).map(|row| row.to_vec()).collect())
    }

    /// Returns the amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if location belongs to the graph.
    pub fn contains(&self, location: Location) -> bool {
        location < self.size
    }

    /// Returns distance between two locations.
    pub fn distance(&self, from: Location, to: Location) -> GenericResult<Distance> {
        self.ensure_location(from)?;
        self.ensure_location(to)?;

        Ok(self.weight(from, to))
    }

    /// Returns the sum of distances between consecutive locations of the route.
    pub fn route_length(&self, route: &[Location]) -> GenericResult<Distance> {
        Ok(self.cumulative_distances(route)?.last().copied().unwrap_or(0.))
    }

    /// Returns prefix sums of distances between consecutive locations: the element at `i` is
    /// the distance travelled from the start of the route to the location at `i + 1`.
    pub fn cumulative_distances(&self, route: &[Location]) -> GenericResult<Vec<Distance>> {
        route.iter().try_for_each(|&location| self.ensure_location(location))?;

        Ok(route
            .windows(2)
            .scan(0., |total, leg| {
                *total += self.weight(leg[0], leg[1]);
                Some(*total)
            })
            .collect())
    }

    /// Returns arrival time at each stop of the route when travelling at given speed (miles per hour).
    /// The first element is the start time at the route's first location.
    pub fn cumulative_times(
        &self,
        route: &[Location],
        start_time: Timestamp,
        speed: Float,
    ) -> GenericResult<Vec<Timestamp>> {
        if route.is_empty() {
            return Ok(vec![]);
        }

        let times = self.cumulative_distances(route)?.into_iter().map(|distance| start_time + distance / speed * 60.);

        Ok(std::iter::once(start_time).chain(times).collect())
    }

    /// Checks that every shipment is delivered before its deadline when vehicle follows the route
    /// starting at `start_offset`. The final return to depot is not checked. A route with unknown
    /// locations is never on time.
    pub fn route_is_on_time(&self, route: &[Location], shipments: &[Shipment], start_offset: Timestamp) -> bool {
        let Ok(times) = self.cumulative_times(route, start_offset, AVERAGE_SPEED) else {
            return false;
        };

        route.iter().zip(times).take(route.len().saturating_sub(1)).all(|(&stop, arrival)| {
            shipments
                .iter()
                .filter(|shipment| shipment.destination == stop)
                .all(|shipment| shipment.deadline >= arrival)
        })
    }

    /// Returns distance between locations which are known to be in the graph.
    pub(crate) fn weight(&self, from: Location, to: Location) -> Distance {
        self.distances[from * self.size + to]
    }

    fn ensure_location(&self, location: Location) -> GenericResult<()> {
        if self.contains(location) {
            Ok(())
        } else {
            Err(GenericError::not_found(format!("cannot find location {location} in graph of size {}", self.size)))
        }
    }
}
