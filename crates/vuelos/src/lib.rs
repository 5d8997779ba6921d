//! `vuelos` - A flight records service backed by a single JSON document
//!
//! This library provides the flight store, its storage backends, and the
//! HTTP API that exposes them. Every mutation loads the whole collection,
//! changes it in memory, and writes the whole collection back.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod storage;
pub mod store;

pub use api::{build_router, Server};
pub use config::Config;
pub use error::{Error, Result};
pub use flight::{Flight, FlightUpdate, NewFlight, SellRequest};
pub use logging::init_logging;
pub use storage::{FlightRepository, JsonFileRepository, MemoryRepository};
pub use store::FlightStore;
