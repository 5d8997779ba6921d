//! Storage layer for vuelos.
//!
//! The whole flight collection is loaded and saved as one unit. Backends
//! implement [`FlightRepository`]; the JSON file backend is what the server
//! uses, the in-memory backend exists for tests and embedding.

mod json;
mod memory;

use std::fmt::Debug;

use crate::error::Result;
use crate::flight::Flight;

pub use json::JsonFileRepository;
pub use memory::MemoryRepository;

/// Whole-collection persistence for flight records.
///
/// There is no locking between a `load` and the following `save`; two
/// writers racing on the same backend lose one of the updates.
pub trait FlightRepository: Send + Sync + Debug {
    /// Load every flight, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store can't be read or decoded.
    fn load(&self) -> Result<Vec<Flight>>;

    /// Replace the stored collection with `flights`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store can't be written.
    fn save(&self, flights: &[Flight]) -> Result<()>;
}
