use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, error};
use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::models::{ComputeGraph, CostRecord, GraphEdgeRecord, PathCostRecord};
use crate::analysis::{Analysis, CostView, cost, transform};
use crate::config::AppConfig;

/// Anything that can GET a JSON document.
#[async_trait(?Send)]
pub trait AnalysisSource {
	/// Fetch `url` and decode the body as `T`.
	async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

#[async_trait(?Send)]
impl AnalysisSource for HttpSource {
	async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
		let response = Request::get(url)
			.send()
			.await
			.map_err(|e| FetchError::Network {
				url: url.to_string(),
				message: e.to_string(),
			})?;

		if !response.ok() {
			return Err(FetchError::Status {
				url: url.to_string(),
				status: response.status(),
			});
		}

		response.json::<T>().await.map_err(|e| FetchError::Decode {
			url: url.to_string(),
			message: e.to_string(),
		})
	}
}

/// Which pair of endpoints an analysis view reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisTarget {
	/// Shared compute graph plus ranked shortest paths.
	Compute,
	/// Per-pipeline graph plus per-region cost options.
	Pipeline(String),
}

impl AnalysisTarget {
	/// `(graph_url, cost_url)` for this target.
	pub fn endpoints(&self, config: &AppConfig) -> (String, String) {
		match self {
			Self::Compute => (
				config.endpoint(["api", "v1", "graph", "compute"]),
				config.endpoint(["api", "v1", "graph", "shortest-path"]),
			),
			Self::Pipeline(name) => (
				config.endpoint(["api", "v1", "pipelines", name.as_str(), "graph"]),
				config.endpoint(["api", "v1", "pipelines", name.as_str(), "cost"]),
			),
		}
	}
}

/// Fetch the graph and the cost ranking together.
///
/// Both requests are in flight at once. If either fails the whole analysis
/// fails, so a view never shows a graph without its costs or the reverse.
/// A `null` cost body is no ranking at all, not a failure.
pub async fn fetch_analysis<S: AnalysisSource>(
	source: &S,
	config: &AppConfig,
	target: &AnalysisTarget,
) -> Result<Analysis, FetchError> {
	let (graph_url, cost_url) = target.endpoints(config);
	debug!("fetching {graph_url} and {cost_url}");

	let result = match target {
		AnalysisTarget::Compute => futures::try_join!(
			source.get_json::<ComputeGraph>(&graph_url),
			source.get_json::<Option<Vec<PathCostRecord>>>(&cost_url),
		)
		.map(|(graph, paths)| Analysis {
			graph: transform::from_compute_graph(&graph),
			costs: CostView::Paths(cost::rank(paths.unwrap_or_default())),
		}),
		AnalysisTarget::Pipeline(_) => futures::try_join!(
			source.get_json::<Vec<GraphEdgeRecord>>(&graph_url),
			source.get_json::<Option<Vec<CostRecord>>>(&cost_url),
		)
		.map(|(edges, costs)| Analysis {
			graph: transform::from_pipeline_edges(&edges),
			costs: CostView::Regions(cost::rank(costs.unwrap_or_default())),
		}),
	};

	match &result {
		Ok(analysis) => debug!(
			"loaded {} nodes, {} edges, {} cost options",
			analysis.graph.nodes.len(),
			analysis.graph.links.len(),
			analysis.costs.len()
		),
		Err(err) => error!("Error fetching data: {err}"),
	}
	result
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use futures::executor::block_on;
	use serde_json::{Value, json};

	use super::*;

	#[derive(Default)]
	struct StubSource {
		responses: HashMap<String, Result<Value, FetchError>>,
		requested: RefCell<Vec<String>>,
	}

	impl StubSource {
		fn with(mut self, url: &str, response: Result<Value, FetchError>) -> Self {
			self.responses.insert(url.to_string(), response);
			self
		}
	}

	#[async_trait(?Send)]
	impl AnalysisSource for StubSource {
		async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
			self.requested.borrow_mut().push(url.to_string());
			let body = self.responses.get(url).cloned().unwrap_or(Err(FetchError::Status {
				url: url.to_string(),
				status: 404,
			}))?;
			serde_json::from_value(body).map_err(|e| FetchError::Decode {
				url: url.to_string(),
				message: e.to_string(),
			})
		}
	}

	const BASE: &str = "http://api.test";
	const GRAPH: &str = "http://api.test/api/v1/pipelines/Smart%20Grid%20Analytics%20Platform/graph";
	const COST: &str = "http://api.test/api/v1/pipelines/Smart%20Grid%20Analytics%20Platform/cost";

	fn pipeline() -> AnalysisTarget {
		AnalysisTarget::Pipeline("Smart Grid Analytics Platform".into())
	}

	fn edges() -> Value {
		json!([{
			"startNode": { "name": "VM1", "region": "us-east" },
			"endNode": { "name": "S3", "region": "us-east" },
			"relationshipProperties": { "cost": 12.5 }
		}])
	}

	fn costs() -> Value {
		json!([
			{ "region": "us-east", "totalCost": 90.0, "costBreakdown": {} },
			{ "region": "eu-west", "totalCost": 40.0, "costBreakdown": {} }
		])
	}

	#[test]
	fn legacy_target_uses_shared_graph_endpoints() {
		let config = AppConfig::new(BASE).unwrap();
		assert_eq!(
			AnalysisTarget::Compute.endpoints(&config),
			(
				"http://api.test/api/v1/graph/compute".to_string(),
				"http://api.test/api/v1/graph/shortest-path".to_string()
			)
		);
	}

	#[test]
	fn both_payloads_land_together() {
		let config = AppConfig::new(BASE).unwrap();
		let source = StubSource::default()
			.with(GRAPH, Ok(edges()))
			.with(COST, Ok(costs()));

		let analysis = block_on(fetch_analysis(&source, &config, &pipeline())).unwrap();

		assert_eq!(source.requested.borrow().as_slice(), [GRAPH, COST]);
		assert_eq!(analysis.graph.nodes.len(), 2);
		assert_eq!(analysis.graph.links[0].label, "$12.50");
		match analysis.costs {
			CostView::Regions(ranked) => {
				let regions: Vec<_> = ranked.iter().map(|r| r.region.as_str()).collect();
				assert_eq!(regions, ["eu-west", "us-east"]);
			}
			other => panic!("unexpected cost view {other:?}"),
		}
	}

	#[test]
	fn either_failure_fails_the_whole_analysis() {
		let config = AppConfig::new(BASE).unwrap();
		let graph_down = StubSource::default()
			.with(GRAPH, Err(FetchError::Network {
				url: GRAPH.into(),
				message: "connection refused".into(),
			}))
			.with(COST, Ok(costs()));
		let cost_down = StubSource::default()
			.with(GRAPH, Ok(edges()))
			.with(COST, Err(FetchError::Status {
				url: COST.into(),
				status: 500,
			}));

		let err = block_on(fetch_analysis(&graph_down, &config, &pipeline())).unwrap_err();
		assert_eq!(err.url(), GRAPH);
		let err = block_on(fetch_analysis(&cost_down, &config, &pipeline())).unwrap_err();
		assert!(matches!(err, FetchError::Status { status: 500, .. }));
	}

	#[test]
	fn null_cost_body_keeps_the_graph() {
		let config = AppConfig::new(BASE).unwrap();
		let source = StubSource::default()
			.with(GRAPH, Ok(edges()))
			.with(COST, Ok(Value::Null));

		let analysis = block_on(fetch_analysis(&source, &config, &pipeline())).unwrap();
		assert_eq!(analysis.graph.nodes.len(), 2);
		assert_eq!(analysis.costs, CostView::Regions(Vec::new()));

		let legacy = StubSource::default()
			.with("http://api.test/api/v1/graph/compute", Ok(json!({ "nodes": [], "relationships": [] })))
			.with("http://api.test/api/v1/graph/shortest-path", Ok(Value::Null));
		let analysis = block_on(fetch_analysis(&legacy, &config, &AnalysisTarget::Compute)).unwrap();
		assert!(analysis.costs.is_empty());
	}

	#[test]
	fn undecodable_payload_is_a_failure() {
		let config = AppConfig::new(BASE).unwrap();
		let source = StubSource::default()
			.with(GRAPH, Ok(json!({ "error": "No data found in database" })))
			.with(COST, Ok(costs()));

		let err = block_on(fetch_analysis(&source, &config, &pipeline())).unwrap_err();
		assert!(matches!(err, FetchError::Decode { .. }));
	}
}
