//! Struct definitions and implementations for objects that can be
//! filtered by geographic radius.
//!
//! The most generic form is [`Record`]: an opaque identifier paired
//! with an optional [`Location`]. In the real world, a record could be
//! a hotel row, a user profile, or any other entity the surrounding
//! service persists.
//!
//! Since Rust doesn't have a built-in way to represent an interface
//! type, we use an [`AsRecord`] trait to achieve the similar effect:
//! a function may take an [`AsRecord`] parameter and call its
//! [`as_record`](`AsRecord::as_record`) method to get a [`Record`]
//! reference. This keeps the filter agnostic of the concrete entity
//! type.

use serde::{Deserialize, Serialize};

use super::location::Location;

/// Since Rust doesn't allow for inheritance, we need to use `trait` as
/// a hack to allow passing "Record-like" objects to functions.
pub trait AsRecord {
    /// Returns the generic `Record` struct that an object "extends".
    fn as_record(&self) -> &Record;
    fn get_uid(&self) -> String;
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// An identified entity with an optional geographic position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Typed as a [`String`] to allow for synthetic ids. One purpose of
    /// using a synthetic id is to allow for partitioned indexing on the
    /// database layer to efficiently filter data.
    ///
    /// For example, an uid could be `usa:ny:12345`.
    pub uid: String,

    /// Denotes the geographical position of the record.
    ///
    /// [`None`] means the record was never geocoded. Such records are
    /// excluded from radius results, never treated as distance 0.
    pub location: Option<Location>,
}

impl Record {
    /// Creates a record with a known position.
    pub fn new(uid: impl Into<String>, location: Location) -> Record {
        Record {
            uid: uid.into(),
            location: Some(location),
        }
    }

    /// Creates a record that has not been geocoded.
    pub fn without_location(uid: impl Into<String>) -> Record {
        Record {
            uid: uid.into(),
            location: None,
        }
    }
}

impl AsRecord for Record {
    fn as_record(&self) -> &Record {
        self
    }

    fn get_uid(&self) -> String {
        self.uid.clone()
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

/// Tests that an extended record type can be passed in as an
/// [`AsRecord`] trait implementation.
#[cfg(test)]
mod record_type_tests {
    use super::*;

    /// A domain entity "extending" [`Record`], as the surrounding
    /// service would model a hotel row.
    struct Hotel {
        record: Record,
        name: String,
    }

    impl AsRecord for Hotel {
        fn as_record(&self) -> &Record {
            &self.record
        }

        fn get_uid(&self) -> String {
            self.as_record().uid.clone()
        }
    }

    #[test]
    fn test_get_record_props_from_hotel() {
        let hotel = Hotel {
            record: Record::new("hotel_1", Location::new(40.730610, -73.935242)),
            name: "Midtown Plaza".to_string(),
        };
        assert_eq!(hotel.get_uid(), "hotel_1");
        assert_eq!(hotel.name, "Midtown Plaza");
        assert!(hotel.as_record().location.is_some());
    }

    #[test]
    fn test_record_without_location() {
        let record = Record::without_location("hotel_2");
        assert_eq!(record.get_uid(), "hotel_2");
        assert!(record.location.is_none());
    }
}
