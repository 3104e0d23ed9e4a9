//! Backend graph payloads to renderer nodes and links.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use super::cost::cost_label;
use crate::api::models::{ComputeGraph, ComputeNode, GraphEdgeRecord, NodeRecord};
use crate::components::force_graph::{GraphData, GraphLink, GraphNode, NodeColor, NodeShape};

/// Group assigned to pipeline nodes without a region.
pub const UNKNOWN_REGION: &str = "Unknown";

const PIPELINE_NODE_SIZE: f64 = 30.0;

const REGION_PALETTE: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Primary type tag of a resource in the generic graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// Virtual machines, containers, functions.
	Compute,
	/// Object, block and database storage.
	Storage,
	/// Load balancers, gateways, links.
	Network,
	/// A priced line item.
	CostComponent,
	/// Cloud region.
	Region,
	/// Availability zone, tagged `AZ`.
	AvailabilityZone,
	/// Any unrecognised tag.
	Other,
}

/// How a [`NodeKind`] is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	/// Outline.
	pub shape: NodeShape,
	/// Fill and border.
	pub color: NodeColor,
	/// Nominal size; the canvas derives the radius from it.
	pub size: f64,
}

const fn palette(
	background: &'static str,
	border: &'static str,
	highlight_background: &'static str,
	highlight_border: &'static str,
) -> NodeColor {
	NodeColor {
		background,
		border,
		highlight_background,
		highlight_border,
	}
}

const STYLES: &[(NodeKind, NodeStyle)] = &[
	(NodeKind::Compute, NodeStyle {
		shape: NodeShape::Hexagon,
		color: palette("#fca5a5", "#ef4444", "#f87171", "#dc2626"),
		size: 30.0,
	}),
	(NodeKind::Storage, NodeStyle {
		shape: NodeShape::Database,
		color: palette("#93c5fd", "#3b82f6", "#60a5fa", "#2563eb"),
		size: 25.0,
	}),
	(NodeKind::Network, NodeStyle {
		shape: NodeShape::Diamond,
		color: palette("#86efac", "#22c55e", "#4ade80", "#16a34a"),
		size: 25.0,
	}),
	(NodeKind::CostComponent, NodeStyle {
		shape: NodeShape::Dot,
		color: palette("#fcd34d", "#f59e0b", "#fbbf24", "#d97706"),
		size: 25.0,
	}),
	(NodeKind::Region, NodeStyle {
		shape: NodeShape::Circle,
		color: palette("#cbd5e1", "#64748b", "#94a3b8", "#475569"),
		size: 25.0,
	}),
	(NodeKind::AvailabilityZone, NodeStyle {
		shape: NodeShape::Circle,
		color: palette("#e2e8f0", "#94a3b8", "#cbd5e1", "#64748b"),
		size: 25.0,
	}),
];

const DEFAULT_STYLE: NodeStyle = NodeStyle {
	shape: NodeShape::Circle,
	color: palette("#f1f5f9", "#94a3b8", "#e2e8f0", "#64748b"),
	size: 25.0,
};

impl NodeKind {
	/// Parse a backend type tag. Unrecognised tags map to [`NodeKind::Other`].
	pub fn from_label(label: Option<&str>) -> Self {
		match label {
			Some("Compute") => Self::Compute,
			Some("Storage") => Self::Storage,
			Some("Network") => Self::Network,
			Some("CostComponent") => Self::CostComponent,
			Some("Region") => Self::Region,
			Some("AZ") => Self::AvailabilityZone,
			_ => Self::Other,
		}
	}

	/// Lookup in the style table, with a neutral fallback.
	pub fn style(self) -> NodeStyle {
		STYLES
			.iter()
			.find(|(kind, _)| *kind == self)
			.map(|(_, style)| *style)
			.unwrap_or(DEFAULT_STYLE)
	}
}

/// Shape the shared compute graph.
///
/// Relationships pointing at ids that are not among the nodes are dropped.
pub fn from_compute_graph(graph: &ComputeGraph) -> GraphData {
	let nodes: Vec<GraphNode> = graph
		.nodes
		.iter()
		.map(|node| {
			let style = NodeKind::from_label(node.primary_label()).style();
			GraphNode {
				id: node.id.clone(),
				label: node.name().unwrap_or_else(|| format!("Node {}", node.id)),
				tooltip: compute_tooltip(node),
				group: None,
				shape: style.shape,
				color: style.color,
				size: style.size,
			}
		})
		.collect();

	let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	let links = graph
		.relationships
		.iter()
		.enumerate()
		.filter(|(_, rel)| known.contains(rel.start.as_str()) && known.contains(rel.end.as_str()))
		.map(|(index, rel)| GraphLink {
			id: format!("rel-{}-{}-{index}", rel.start, rel.end),
			source: rel.start.clone(),
			target: rel.end.clone(),
			label: format!("{}\n{}", rel.kind, cost_label(rel.cost())),
			tooltip: to_json(&rel.props),
		})
		.collect();

	GraphData {
		nodes,
		links,
		regions: Vec::new(),
	}
}

/// Shape a pipeline's edge list.
///
/// Nodes are de-duplicated by [`NodeRecord::dedup_key`]. Nodes are grouped
/// and colored by region.
pub fn from_pipeline_edges(records: &[GraphEdgeRecord]) -> GraphData {
	let mut data = GraphData::default();
	let mut seen = HashSet::new();

	for (index, record) in records.iter().enumerate() {
		let start_id = intern(&mut data, &mut seen, &record.start_node);
		let end_id = intern(&mut data, &mut seen, &record.end_node);

		data.links.push(GraphLink {
			id: format!("edge-{start_id}-{end_id}-{index}"),
			source: start_id,
			target: end_id,
			label: cost_label(record.relationship_properties.cost),
			tooltip: to_json(&record.relationship_properties),
		});
	}
	data
}

fn intern(data: &mut GraphData, seen: &mut HashSet<String>, record: &NodeRecord) -> String {
	let group = record
		.region
		.clone()
		.filter(|r| !r.is_empty())
		.unwrap_or_else(|| UNKNOWN_REGION.to_string());
	let region_idx = match data.regions.iter().position(|r| *r == group) {
		Some(idx) => idx,
		None => {
			data.regions.push(group.clone());
			data.regions.len() - 1
		}
	};

	let id = record.dedup_key();
	if !seen.insert(id.clone()) {
		return id;
	}
	let ordinal = data.nodes.len();

	let color = if group == UNKNOWN_REGION {
		DEFAULT_STYLE.color
	} else {
		let fill = region_color(region_idx);
		palette(fill, "#334155", fill, "#0f172a")
	};

	data.nodes.push(GraphNode {
		id: id.clone(),
		label: record
			.name
			.clone()
			.filter(|n| !n.is_empty())
			.unwrap_or_else(|| format!("Node {ordinal}")),
		tooltip: to_json(record),
		group: Some(group),
		shape: NodeShape::Dot,
		color,
		size: PIPELINE_NODE_SIZE,
	});
	id
}

/// Fill color of the `index`-th region in first-seen order.
pub fn region_color(index: usize) -> &'static str {
	REGION_PALETTE[index % REGION_PALETTE.len()]
}

fn compute_tooltip(node: &ComputeNode) -> String {
	let mut lines = vec![format!("Type: {}", node.labels.join(", "))];
	lines.extend(
		node.props
			.iter()
			.map(|(key, value)| format!("{}: {}", key.replace('_', " "), display_value(value))),
	);
	lines.join("\n")
}

/// Strings as-is, anything else as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn to_json<T: Serialize>(value: &T) -> String {
	serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn edges(value: Value) -> Vec<GraphEdgeRecord> {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn single_hop_in_one_region() {
		let data = from_pipeline_edges(&edges(json!([{
			"startNode": { "name": "VM1", "region": "us-east" },
			"endNode": { "name": "S3", "region": "us-east" },
			"relationshipProperties": { "cost": 12.5 }
		}])));

		assert_eq!(data.nodes.len(), 2);
		assert_ne!(data.nodes[0].id, data.nodes[1].id);
		assert!(data.nodes.iter().all(|n| n.group.as_deref() == Some("us-east")));
		assert_eq!(data.links.len(), 1);
		let link = &data.links[0];
		assert_eq!(link.label, "$12.50");
		assert_eq!(link.source, "node-VM1--us-east");
		assert_eq!(link.target, "node-S3--us-east");
		assert_eq!(link.id, "edge-node-VM1--us-east-node-S3--us-east-0");
		assert_eq!(data.regions, ["us-east"]);
	}

	#[test]
	fn missing_cost_reads_zero() {
		let data = from_pipeline_edges(&edges(json!([{
			"startNode": { "name": "A" },
			"endNode": { "name": "B" },
			"relationshipProperties": {}
		}])));
		assert_eq!(data.links[0].label, "$0.00");
		assert_eq!(data.links[0].tooltip, "{}");
	}

	#[test]
	fn same_name_state_region_collapses_to_one_node() {
		let data = from_pipeline_edges(&edges(json!([
			{
				"startNode": { "name": "LB", "state": "active", "region": "eu", "zone": "a" },
				"endNode": { "name": "VM", "region": "eu" },
				"relationshipProperties": { "cost": 1 }
			},
			{
				"startNode": { "name": "LB", "state": "active", "region": "eu", "zone": "b" },
				"endNode": { "name": "DB", "region": "eu" },
				"relationshipProperties": { "cost": 2 }
			}
		])));

		let lbs: Vec<_> = data.nodes.iter().filter(|n| n.label == "LB").collect();
		assert_eq!(lbs.len(), 1);
		// first occurrence wins
		assert!(lbs[0].tooltip.contains("\"zone\":\"a\""));
		assert_eq!(data.nodes.len(), 3);
		assert_eq!(data.links.len(), 2);
		assert_ne!(data.links[0].id, data.links[1].id);
	}

	#[test]
	fn regionless_nodes_group_as_unknown() {
		let data = from_pipeline_edges(&edges(json!([{
			"startNode": { "region": "ap-south" },
			"endNode": { "name": "Orphan" },
			"relationshipProperties": { "cost": 3 }
		}])));
		assert_eq!(data.nodes[0].label, "Node 0");
		assert_eq!(data.nodes[1].group.as_deref(), Some(UNKNOWN_REGION));
		assert_eq!(data.nodes[1].color, DEFAULT_STYLE.color);
		assert_eq!(data.regions, ["ap-south", UNKNOWN_REGION]);
	}

	#[test]
	fn regions_get_distinct_palette_colors() {
		let data = from_pipeline_edges(&edges(json!([{
			"startNode": { "name": "A", "region": "us-east" },
			"endNode": { "name": "B", "region": "eu-west" },
			"relationshipProperties": {}
		}])));
		assert_ne!(data.nodes[0].color, data.nodes[1].color);
	}

	#[test]
	fn compute_graph_styles_by_primary_tag() {
		let graph: ComputeGraph = serde_json::from_value(json!({
			"nodes": [
				{ "id": 1, "labels": ["Compute"], "props": { "name": "EC2 P4d", "vcpu_count": 96 } },
				{ "id": 2, "labels": ["Region", "Geo"], "props": {} },
				{ "id": 3, "labels": ["Queue"], "props": { "name": "SQS" } }
			],
			"relationships": [
				{ "type": "DEPLOYED_IN", "start": 1, "end": 2, "props": { "cost": 4.2 } },
				{ "type": "CONTAINS", "start": 2, "end": 99, "props": {} }
			]
		}))
		.unwrap();

		let data = from_compute_graph(&graph);

		assert_eq!(data.nodes[0].shape, NodeShape::Hexagon);
		assert_eq!(data.nodes[0].size, 30.0);
		assert_eq!(data.nodes[0].tooltip, "Type: Compute\nname: EC2 P4d\nvcpu count: 96");
		assert_eq!(data.nodes[1].label, "Node 2");
		assert_eq!(data.nodes[1].color, NodeKind::Region.style().color);
		assert_eq!(data.nodes[2].color, DEFAULT_STYLE.color);
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].label, "DEPLOYED_IN\n$4.20");
		assert!(data.regions.is_empty());
	}

	#[test]
	fn unknown_tags_fall_back_to_default_style() {
		assert_eq!(NodeKind::from_label(Some("Lambda")), NodeKind::Other);
		assert_eq!(NodeKind::from_label(None).style(), DEFAULT_STYLE);
		assert_eq!(NodeKind::from_label(Some("AZ")), NodeKind::AvailabilityZone);
		assert_eq!(NodeKind::Storage.style().shape, NodeShape::Database);
	}
}
