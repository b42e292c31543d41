//! Product detail record and fetch service contracts.

pub mod service;
pub mod types;
