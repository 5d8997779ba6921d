//! The flight store.
//!
//! Every operation is a full load → mutate → save cycle against the
//! repository. Nothing is cached between calls.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::flight::{Flight, FlightUpdate, NewFlight, DEFAULT_CAPACITY, DEFAULT_SOLD};
use crate::storage::FlightRepository;

/// Validation message for a missing or blank destination.
pub const DESTINO_REQUIRED: &str = "El campo 'destino' es obligatorio";

/// CRUD and seat-selling operations over the flight collection.
#[derive(Debug, Clone)]
pub struct FlightStore {
    repo: Arc<dyn FlightRepository>,
}

impl FlightStore {
    /// Create a store over the given repository.
    #[must_use]
    pub fn new(repo: impl FlightRepository + 'static) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Create a store sharing an existing repository handle.
    #[must_use]
    pub fn from_shared(repo: Arc<dyn FlightRepository>) -> Self {
        Self { repo }
    }

    /// Load the stored collection, unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository can't be read.
    pub fn load(&self) -> Result<Vec<Flight>> {
        self.repo.load()
    }

    /// Replace the stored collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository can't be written.
    pub fn save(&self, flights: &[Flight]) -> Result<()> {
        self.repo.save(flights)
    }

    /// List every flight with its destination title-cased.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository can't be read.
    pub fn list(&self) -> Result<Vec<Flight>> {
        Ok(self.load()?.iter().map(Flight::display).collect())
    }

    /// Get one flight with its destination title-cased.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has this id.
    pub fn get(&self, id: u64) -> Result<Flight> {
        self.load()?
            .iter()
            .find(|f| f.id == id)
            .map(Flight::display)
            .ok_or(Error::FlightNotFound { id })
    }

    /// Create a flight and return it as stored.
    ///
    /// The id is one more than the largest existing id, or 1 for an empty
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `destino` is missing or blank, or
    /// [`Error::Internal`] if the largest stored id is already `u64::MAX`.
    pub fn create(&self, input: NewFlight) -> Result<Flight> {
        let destino = match input.destino {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Err(Error::validation(DESTINO_REQUIRED)),
        };

        let mut flights = self.load()?;
        let id = flights
            .iter()
            .map(|f| f.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| Error::internal("flight id space exhausted"))?;
        let flight = Flight {
            id,
            destino: destino.to_lowercase(),
            capacidad: input.capacidad.unwrap_or(DEFAULT_CAPACITY),
            vendidos: input.vendidos.unwrap_or(DEFAULT_SOLD),
        };

        flights.push(flight.clone());
        self.save(&flights)?;
        info!("Created flight {} to {}", flight.id, flight.destino);
        Ok(flight)
    }

    /// Merge the supplied fields into a flight and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has this id.
    pub fn update(&self, id: u64, input: FlightUpdate) -> Result<Flight> {
        let mut flights = self.load()?;
        let flight = flights
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(Error::FlightNotFound { id })?;

        flight.apply(input);
        let updated = flight.clone();

        self.save(&flights)?;
        debug!("Updated flight {}", id);
        Ok(updated)
    }

    /// Remove a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has this id, in which
    /// case nothing is written.
    pub fn delete(&self, id: u64) -> Result<()> {
        let flights = self.load()?;
        let before = flights.len();
        let remaining: Vec<Flight> = flights.into_iter().filter(|f| f.id != id).collect();

        if remaining.len() == before {
            return Err(Error::FlightNotFound { id });
        }

        self.save(&remaining)?;
        info!("Deleted flight {}", id);
        Ok(())
    }

    /// Sell one seat on a flight and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has this id, or
    /// [`Error::FlightFull`] if every seat is already sold.
    pub fn sell(&self, id: u64) -> Result<Flight> {
        let mut flights = self.load()?;
        let flight = flights
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(Error::FlightNotFound { id })?;

        if flight.is_full() {
            debug!("Flight {} is full ({}/{})", id, flight.vendidos, flight.capacidad);
            return Err(Error::FlightFull { id });
        }

        flight.vendidos += 1;
        let updated = flight.clone();

        self.save(&flights)?;
        debug!(
            "Sold seat on flight {} ({}/{})",
            id, updated.vendidos, updated.capacidad
        );
        Ok(updated)
    }
}
