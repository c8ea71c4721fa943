// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric identifier tagged with the kind of record it names.
///
/// Backend records carry plain integer ids; the tag keeps a place id from being passed where a
/// toast id is expected without costing anything at runtime.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn get(self) -> u64 {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        f.write_str(buf.format(self.value))
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty);
        }
        trimmed
            .parse::<u64>()
            .map(Self::new)
            .map_err(|_| IdError::NotNumeric(trimmed.to_owned()))
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    NotNumeric(String),
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::NotNumeric(raw) => write!(f, "id must be a non-negative integer, got {raw:?}"),
        }
    }
}

impl std::error::Error for IdError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaceIdTag {}
pub type PlaceId = Id<PlaceIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToastIdTag {}
pub type ToastId = Id<ToastIdTag>;

#[cfg(test)]
mod tests {
    use super::{IdError, PlaceId};

    #[test]
    fn id_parses_trimmed_integers() {
        let id: PlaceId = " 42 ".parse().expect("place id");
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn id_rejects_empty() {
        let result: Result<PlaceId, _> = "".parse();
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_non_numeric() {
        let result: Result<PlaceId, _> = "p:1".parse();
        assert_eq!(result, Err(IdError::NotNumeric("p:1".to_owned())));
    }

    #[test]
    fn id_round_trips_as_plain_json_number() {
        let id = PlaceId::new(7);
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "7");
        let back: PlaceId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(back, id);
    }
}
