//! Turning backend payloads into what the analysis view draws.

pub mod cost;
pub mod transform;

use crate::api::models::{CostRecord, PathCostRecord};
use crate::components::force_graph::GraphData;

/// Everything one analysis view needs, fetched and shaped.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
	/// Renderer-ready graph.
	pub graph: GraphData,
	/// Cost options, cheapest first.
	pub costs: CostView,
}

/// Ranked cost options in whichever shape the endpoint returned.
#[derive(Clone, Debug, PartialEq)]
pub enum CostView {
	/// Shortest-path rows from the shared compute graph.
	Paths(Vec<PathCostRecord>),
	/// Region options for one pipeline.
	Regions(Vec<CostRecord>),
}

impl CostView {
	/// Number of options.
	pub fn len(&self) -> usize {
		match self {
			Self::Paths(paths) => paths.len(),
			Self::Regions(regions) => regions.len(),
		}
	}

	/// `true` when there is nothing to rank.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
