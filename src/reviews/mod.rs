//! Customer review domain

pub mod service;

pub use service::ReviewService;
