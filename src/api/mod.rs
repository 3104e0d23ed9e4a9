//! Fetch layer for the external cost backend.

mod client;
mod error;
pub mod models;

pub use client::{AnalysisSource, AnalysisTarget, HttpSource, fetch_analysis};
pub use error::FetchError;
