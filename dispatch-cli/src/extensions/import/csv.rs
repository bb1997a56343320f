//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use chrono::{NaiveTime, Timelike};
use csv::{ReaderBuilder, StringRecord, Trim};
use dispatch_core::prelude::*;
use regex::Regex;
use serde::Deserialize;
use std::io::{BufReader, Read};

const AVAILABLE_PATTERN: &str = r"(?i)available\s+(\d{1,2}:\d{2}\s*[ap]m)";
const VEHICLE_PATTERN: &str = r"(?i)truck\s+(\d+)";
const NUMBER_PATTERN: &str = r"\d+";
const DEPENDENCIES_MARKER: &str = "Must be delivered with ";

#[derive(Debug, Deserialize)]
struct CsvShipment {
    id: ShipmentId,
    address: String,
    city: String,
    state: String,
    zip: String,
    deadline: String,
    weight: Float,
    #[serde(default)]
    notes: String,
}

/// Constraints extracted from a free text notes field of a shipment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipmentNotes {
    /// Time when shipment arrives to the hub, if it is delayed.
    pub available_at: Option<Timestamp>,
    /// A vehicle which has to deliver shipment.
    pub required_vehicle: Option<VehicleId>,
    /// Shipments which have to be delivered together with this one.
    pub dependencies: Vec<ShipmentId>,
}

/// Parses notes of shipments.
pub struct NotesParser {
    available: Regex,
    vehicle: Regex,
    number: Regex,
}

impl NotesParser {
    /// Creates a new instance of `NotesParser`.
    pub fn new() -> GenericResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|err| GenericError::parse(format!("cannot compile '{pattern}': {err}")))
        };

        Ok(Self {
            available: compile(AVAILABLE_PATTERN)?,
            vehicle: compile(VEHICLE_PATTERN)?,
            number: compile(NUMBER_PATTERN)?,
        })
    }

    /// Extracts availability time, required vehicle and co-delivery dependencies from notes.
    pub fn parse(&self, notes: &str) -> GenericResult<ShipmentNotes> {
        let available_at = self.available.captures(notes).map(|captures| parse_time(&captures[1])).transpose()?;

        let required_vehicle = self
            .vehicle
            .captures(notes)
            .map(|captures| {
                captures[1].parse::<VehicleId>().map_err(|err| GenericError::parse(format!("invalid vehicle: {err}")))
            })
            .transpose()?;

        let dependencies = notes
            .find(DEPENDENCIES_MARKER)
            .map(|idx| &notes[idx + DEPENDENCIES_MARKER.len()..])
            .map(|tail| {
                self.number
                    .find_iter(tail)
                    .map(|id| {
                        id.as_str()
                            .parse::<ShipmentId>()
                            .map_err(|err| GenericError::parse(format!("invalid shipment id: {err}")))
                    })
                    .collect::<GenericResult<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(ShipmentNotes { available_at, required_vehicle, dependencies })
    }
}

/// Parses time in `H:MM AM/PM` format into minutes since the start of the day.
pub fn parse_time(text: &str) -> GenericResult<Timestamp> {
    let text = text.trim();

    NaiveTime::parse_from_str(text, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(text, "%I:%M%p"))
        .map(|time| (time.hour() * 60 + time.minute()) as Timestamp)
        .map_err(|err| GenericError::parse(format!("cannot parse time '{text}': {err}")))
}

/// Parses shipment deadline: `EOD` stands for the end of the day, anything else is a time.
pub fn parse_deadline(text: &str) -> GenericResult<Timestamp> {
    if text.contains("EOD") { Ok(END_OF_DAY) } else { parse_time(text) }
}

/// Reads a distance matrix: one row per location without header, blank cells are zeros. The lower
/// triangle is mirrored, so the upper one may be left blank.
pub fn read_distances<R: Read>(reader: BufReader<R>) -> GenericResult<WeightedGraph> {
    let rows = read_records(reader)?
        .iter()
        .enumerate()
        .map(|(row_idx, record)| {
            record
                .iter()
                .enumerate()
                .map(|(col_idx, cell)| match cell {
                    "" => Ok(0.),
                    cell => cell.parse::<Distance>().map_err(|err| {
                        GenericError::parse(format!("invalid distance at row {row_idx}, column {col_idx}: {err}"))
                    }),
                })
                .collect::<GenericResult<Vec<_>>>()
        })
        .collect::<GenericResult<Vec<_>>>()?;

    WeightedGraph::from_rows(rows)
}

/// Reads an address table: row index is a location. A row contains either an address or a label
/// followed by an address.
pub fn read_addresses<R: Read>(reader: BufReader<R>) -> GenericResult<AddressIndex> {
    let addresses = read_records(reader)?
        .iter()
        .enumerate()
        .map(|(row_idx, record)| match (record.get(0), record.get(1)) {
            (_, Some(address)) if !address.is_empty() => Ok(address.to_string()),
            (Some(address), _) if !address.is_empty() => Ok(address.to_string()),
            _ => Err(GenericError::parse(format!("missing address at row {row_idx}"))),
        })
        .collect::<GenericResult<Vec<_>>>()?;

    AddressIndex::new(addresses)
}

/// Reads shipments: `id,address,city,state,zip,deadline,weight,notes` without header. Destination
/// is resolved through the address table.
pub fn read_shipments<R: Read>(reader: BufReader<R>, addresses: &AddressIndex) -> GenericResult<Vec<Shipment>> {
    let parser = NotesParser::new()?;
    let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).trim(Trim::All).from_reader(reader);

    reader
        .deserialize::<CsvShipment>()
        .map(|entry| {
            let entry = entry.map_err(|err| GenericError::parse(format!("cannot read shipment: {err}")))?;
            let destination = addresses.location(entry.address.as_str())?;
            let notes = parser.parse(entry.notes.as_str())?;
            let address = format!("{}, {} {} {}", entry.address, entry.city, entry.state, entry.zip);

            let shipment = Shipment::new(entry.id, destination, address.as_str())
                .with_deadline(parse_deadline(entry.deadline.as_str())?)
                .with_weight(entry.weight)
                .with_notes(entry.notes.as_str())
                .with_dependencies(notes.dependencies);

            let shipment = match notes.available_at {
                Some(available_at) => shipment.with_availability(available_at),
                None => shipment,
            };

            Ok(match notes.required_vehicle {
                Some(vehicle) => shipment.with_required_vehicle(vehicle),
                None => shipment,
            })
        })
        .collect()
}

fn read_records<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<StringRecord>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .records()
        .map(|record| record.map_err(|err| GenericError::parse(format!("cannot read csv record: {err}"))))
        .collect()
}
