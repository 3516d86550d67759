//! Loan catalog domain

pub mod service;

pub use service::{LoanService, CATALOG_ORDER_SQL};
