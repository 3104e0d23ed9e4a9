//! Reusable view components.

pub mod analysis;
pub mod cost_table;
pub mod details;
pub mod diagram;
pub mod force_graph;
pub mod formula;
