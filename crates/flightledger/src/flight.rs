//! Core flight record types for flightledger.
//!
//! This module defines the [`Flight`] record and the in-memory [`Ledger`]
//! that the command loop operates on.

use serde::{Deserialize, Serialize};

/// A single flight entry.
///
/// Duplicates are permitted: two flights may share a destination, a flight
/// number, or both. Identity exists only as the storage-assigned row id,
/// which is not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Where the flight is headed.
    pub destination: String,

    /// The flight number.
    pub flight_number: i64,

    /// The aircraft type operating the flight.
    pub type_plane: String,
}

impl Flight {
    /// Create a new flight record.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        flight_number: i64,
        type_plane: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            flight_number,
            type_plane: type_plane.into(),
        }
    }
}

/// The in-memory ordered list of flight records.
///
/// Kept sorted non-decreasing by flight number after every insertion. The
/// sort is stable, so flights with equal numbers stay in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    flights: Vec<Flight>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing records, sorting them by flight number.
    #[must_use]
    pub fn from_flights(mut flights: Vec<Flight>) -> Self {
        flights.sort_by_key(|f| f.flight_number);
        Self { flights }
    }

    /// Add a flight and restore the sort order.
    pub fn add(&mut self, flight: Flight) {
        self.flights.push(flight);
        self.flights.sort_by_key(|f| f.flight_number);
    }

    /// Iterate over flights whose destination equals `destination` exactly.
    ///
    /// The comparison is case-sensitive and does not trim whitespace.
    pub fn matching_destination<'a>(
        &'a self,
        destination: &'a str,
    ) -> impl Iterator<Item = &'a Flight> {
        self.flights
            .iter()
            .filter(move |f| f.destination == destination)
    }

    /// Iterate over all flights in ledger order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }

    /// All flights in ledger order.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Number of flights in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check whether the ledger holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(dest: &str, number: i64, plane: &str) -> Flight {
        Flight::new(dest, number, plane)
    }

    #[test]
    fn test_flight_new() {
        let f = flight("Oslo", 117, "A320");
        assert_eq!(f.destination, "Oslo");
        assert_eq!(f.flight_number, 117);
        assert_eq!(f.type_plane, "A320");
    }

    #[test]
    fn test_ledger_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_add_keeps_sorted() {
        let mut ledger = Ledger::new();
        ledger.add(flight("Oslo", 300, "A320"));
        ledger.add(flight("Riga", 100, "B737"));
        ledger.add(flight("Kyiv", 200, "E190"));

        let numbers: Vec<i64> = ledger.iter().map(|f| f.flight_number).collect();
        assert_eq!(numbers, vec![100, 200, 300]);
    }

    #[test]
    fn test_add_stable_on_ties() {
        let mut ledger = Ledger::new();
        ledger.add(flight("Oslo", 100, "first"));
        ledger.add(flight("Riga", 100, "second"));
        ledger.add(flight("Kyiv", 50, "third"));

        let planes: Vec<&str> = ledger.iter().map(|f| f.type_plane.as_str()).collect();
        assert_eq!(planes, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_from_flights_sorts() {
        let ledger = Ledger::from_flights(vec![
            flight("Oslo", 9, "A320"),
            flight("Riga", 3, "B737"),
            flight("Kyiv", 6, "E190"),
        ]);
        let numbers: Vec<i64> = ledger.iter().map(|f| f.flight_number).collect();
        assert_eq!(numbers, vec![3, 6, 9]);
    }

    #[test]
    fn test_matching_destination_exact() {
        let mut ledger = Ledger::new();
        ledger.add(flight("Oslo", 1, "A320"));
        ledger.add(flight("oslo", 2, "B737"));
        ledger.add(flight("Oslo ", 3, "E190"));
        ledger.add(flight("Oslo", 4, "A350"));

        let matches: Vec<i64> = ledger
            .matching_destination("Oslo")
            .map(|f| f.flight_number)
            .collect();
        assert_eq!(matches, vec![1, 4]);
    }

    #[test]
    fn test_matching_destination_no_match() {
        let mut ledger = Ledger::new();
        ledger.add(flight("Oslo", 1, "A320"));
        assert_eq!(ledger.matching_destination("Bergen").count(), 0);
    }

    #[test]
    fn test_duplicates_permitted() {
        let mut ledger = Ledger::new();
        ledger.add(flight("Oslo", 1, "A320"));
        ledger.add(flight("Oslo", 1, "A320"));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_into_iterator() {
        let mut ledger = Ledger::new();
        ledger.add(flight("Oslo", 1, "A320"));
        let mut count = 0;
        for f in &ledger {
            assert_eq!(f.destination, "Oslo");
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
