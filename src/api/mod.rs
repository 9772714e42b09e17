// src/api/mod.rs
//! JSON endpoints under `/api/`.

pub mod dto;
pub mod locations;
pub mod reports;

pub use locations::{city, list_locations, machine, retailer, stats};
pub use reports::{create_report, create_suggestion};
