//! Flight record types for vuelos.
//!
//! This module defines the persisted flight record and the request bodies
//! used to create, update, and sell seats on flights.

use serde::{Deserialize, Serialize};

/// Seat capacity assigned when a new flight doesn't specify one.
pub const DEFAULT_CAPACITY: u32 = 100;

/// Seats sold assigned when a new flight doesn't specify them.
pub const DEFAULT_SOLD: u32 = 0;

/// A single flight record as stored in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique identifier, assigned by the store.
    pub id: u64,

    /// Destination name, stored lower-cased.
    pub destino: String,

    /// Seat capacity.
    #[serde(default = "default_capacity")]
    pub capacidad: u32,

    /// Seats sold so far.
    #[serde(default)]
    pub vendidos: u32,
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

impl Flight {
    /// Returns a copy of this flight with `destino` in title case.
    ///
    /// Used on the read paths only; the stored record keeps its lower-cased
    /// destination.
    #[must_use]
    pub fn display(&self) -> Self {
        Self {
            destino: title_case(&self.destino),
            ..self.clone()
        }
    }

    /// Whether every seat on this flight has been sold.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.vendidos >= self.capacidad
    }

    /// Merge the fields present in `update` into this record.
    ///
    /// A supplied `destino` is lower-cased before it is stored. Fields absent
    /// from the update keep their current values. No capacity check is made.
    pub fn apply(&mut self, update: FlightUpdate) {
        if let Some(destino) = update.destino {
            self.destino = destino.to_lowercase();
        }
        if let Some(capacidad) = update.capacidad {
            self.capacidad = capacidad;
        }
        if let Some(vendidos) = update.vendidos {
            self.vendidos = vendidos;
        }
    }
}

/// Request body for creating a flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFlight {
    /// Destination name. Required and non-blank.
    pub destino: Option<String>,
    /// Seat capacity, defaults to [`DEFAULT_CAPACITY`].
    pub capacidad: Option<u32>,
    /// Seats already sold, defaults to [`DEFAULT_SOLD`].
    pub vendidos: Option<u32>,
}

impl NewFlight {
    /// Create a request for the given destination with default counters.
    #[must_use]
    pub fn new(destino: impl Into<String>) -> Self {
        Self {
            destino: Some(destino.into()),
            ..Self::default()
        }
    }
}

/// Request body for updating a flight. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightUpdate {
    /// New destination name.
    pub destino: Option<String>,
    /// New seat capacity.
    pub capacidad: Option<u32>,
    /// New count of seats sold.
    pub vendidos: Option<u32>,
}

/// Request body for selling a seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellRequest {
    /// The flight to sell a seat on.
    pub id: Option<u64>,
}

/// Capitalize the first letter of every word and lower-case the rest.
///
/// A word is a run of cased letters (letters with an upper or lower case
/// form). Anything else, including uncased letters such as CJK ideographs,
/// ends the word, so `"o'higgins"` becomes `"O'Higgins"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
