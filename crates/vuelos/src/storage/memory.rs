//! In-memory backend.

use parking_lot::RwLock;

use super::FlightRepository;
use crate::error::Result;
use crate::flight::Flight;

/// Keeps the collection in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    flights: RwLock<Vec<Flight>>,
}

impl MemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `flights`.
    #[must_use]
    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self {
            flights: RwLock::new(flights),
        }
    }
}

impl FlightRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Flight>> {
        Ok(self.flights.read().clone())
    }

    fn save(&self, flights: &[Flight]) -> Result<()> {
        *self.flights.write() = flights.to_vec();
        Ok(())
    }
}
