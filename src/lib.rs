//! Book Scan Server Library
//!
//! Exposes the crate's modules for integration tests; the server binary is
//! in main.rs.

pub mod book;
pub mod config;
pub mod error;
pub mod ocr;
pub mod routes;
pub mod state;
