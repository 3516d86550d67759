//! Loanboard backend library.
//!
//! Exposes the loan offer catalog and customer review modules for the HTTP
//! server binary and for integration tests.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod loans;
pub mod middleware;
pub mod models;
pub mod reviews;
pub mod routes;
pub mod state;
