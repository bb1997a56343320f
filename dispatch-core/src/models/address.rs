#[cfg(test)]
#[path = "../../tests/unit/models/address_test.rs"]
mod address_test;

use crate::models::Location;
use evokit::prelude::{GenericError, GenericResult};
use rustc_hash::FxHashMap;

/// A bidirectional lookup between address text and graph location. Location of an address is its
/// position in the list used to build the index.
#[derive(Clone, Debug, Default)]
pub struct AddressIndex {
    addresses: Vec<String>,
    locations: FxHashMap<String, Location>,
}

impl AddressIndex {
    /// Creates a new instance of `AddressIndex`. Surrounding whitespaces are ignored, duplicate
    /// addresses are rejected.
    pub fn new(addresses: Vec<String>) -> GenericResult<Self> {
        let addresses = addresses.into_iter().map(|address| address.trim().to_string()).collect::<Vec<_>>();

        let mut locations = FxHashMap::default();
        for (location, address) in addresses.iter().enumerate() {
            if let Some(existing) = locations.insert(address.clone(), location) {
                return Err(GenericError::validation(format!(
                    "address '{address}' is used by both {existing} and {location} locations"
                )));
            }
        }

        Ok(Self { addresses, locations })
    }

    /// Returns location of the address.
    pub fn location(&self, address: &str) -> GenericResult<Location> {
        self.locations
            .get(address.trim())
            .copied()
            .ok_or_else(|| GenericError::not_found(format!("cannot find location for address '{address}'")))
    }

    /// Returns address of the location.
    pub fn address(&self, location: Location) -> GenericResult<&str> {
        self.addresses
            .get(location)
            .map(|address| address.as_str())
            .ok_or_else(|| GenericError::not_found(format!("cannot find address for location {location}")))
    }

    /// Returns amount of addresses.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns true if index has no addresses.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
