//! Wire shapes returned by the cost backend.
//!
//! Every field is optional on the wire. Missing or malformed values fall back
//! to defaults instead of failing the whole payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic graph returned by `/api/v1/graph/compute`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ComputeGraph {
	/// Vertices with their type tags.
	pub nodes: Vec<ComputeNode>,
	/// Directed, typed relationships between vertices.
	pub relationships: Vec<ComputeRelationship>,
}

/// A vertex in the generic graph.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ComputeNode {
	/// Server-assigned id, stringified.
	#[serde(deserialize_with = "lenient::id")]
	pub id: String,
	/// Type tags; the first one is the primary tag.
	pub labels: Vec<String>,
	/// Arbitrary properties, `name` among them.
	pub props: Map<String, Value>,
}

impl ComputeNode {
	/// Primary type tag.
	pub fn primary_label(&self) -> Option<&str> {
		self.labels.first().map(String::as_str)
	}

	/// `props.name`, when present and non-empty.
	pub fn name(&self) -> Option<String> {
		self.props
			.get("name")
			.and_then(lenient::as_text)
			.filter(|name| !name.is_empty())
	}
}

/// An edge in the generic graph.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ComputeRelationship {
	/// Relationship type, e.g. `DEPLOYED_IN`.
	#[serde(rename = "type")]
	pub kind: String,
	/// Id of the start vertex.
	#[serde(deserialize_with = "lenient::id")]
	pub start: String,
	/// Id of the end vertex.
	#[serde(deserialize_with = "lenient::id")]
	pub end: String,
	/// Arbitrary properties, `cost` among them.
	pub props: Map<String, Value>,
}

impl ComputeRelationship {
	/// Cost carried by the relationship, if any.
	pub fn cost(&self) -> Option<f64> {
		self.props.get("cost").and_then(lenient::as_number)
	}
}

/// One hop of a pipeline graph (`/api/v1/pipelines/{name}/graph`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphEdgeRecord {
	/// Source resource.
	pub start_node: NodeRecord,
	/// Target resource.
	pub end_node: NodeRecord,
	/// Edge attributes, `cost` among them.
	pub relationship_properties: RelationshipProperties,
}

/// A resource in a pipeline graph.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NodeRecord {
	/// Display name.
	#[serde(deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Cloud region.
	#[serde(deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
	pub region: Option<String>,
	/// Lifecycle or deployment state.
	#[serde(deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	/// Any other attributes, kept for tooltips.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl NodeRecord {
	/// Identity used for de-duplication: name, state and region.
	pub fn dedup_key(&self) -> String {
		format!(
			"node-{}-{}-{}",
			self.name.as_deref().unwrap_or_default(),
			self.state.as_deref().unwrap_or_default(),
			self.region.as_deref().unwrap_or_default(),
		)
	}
}

/// Attributes of a pipeline graph edge.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RelationshipProperties {
	/// Monthly cost of the hop in USD.
	#[serde(deserialize_with = "lenient::opt_number", skip_serializing_if = "Option::is_none")]
	pub cost: Option<f64>,
	/// Any other attributes, kept for tooltips.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A region-level cost option (`/api/v1/pipelines/{name}/cost`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostRecord {
	/// Region the option is priced for.
	#[serde(deserialize_with = "lenient::text")]
	pub region: String,
	/// Sum of the breakdown.
	#[serde(deserialize_with = "lenient::number")]
	pub total_cost: f64,
	/// Per-service cost, in server order.
	pub cost_breakdown: Map<String, Value>,
}

impl CostRecord {
	/// Breakdown entries with numeric values; unparsable entries read as zero.
	pub fn breakdown(&self) -> impl Iterator<Item = (&str, f64)> {
		self.cost_breakdown
			.iter()
			.map(|(service, cost)| (service.as_str(), lenient::as_number(cost).unwrap_or(0.0)))
	}
}

/// A ranked infrastructure path (`/api/v1/graph/shortest-path`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PathCostRecord {
	/// Compute offering at the head of the path.
	#[serde(rename = "Compute_Service", deserialize_with = "lenient::opt_text")]
	pub compute_service: Option<String>,
	/// Region name.
	#[serde(rename = "Region", deserialize_with = "lenient::opt_text")]
	pub region: Option<String>,
	/// Availability zone name.
	#[serde(rename = "Availability_Zone", deserialize_with = "lenient::opt_text")]
	pub availability_zone: Option<String>,
	/// Storage offering.
	#[serde(rename = "Storage_Type", deserialize_with = "lenient::opt_text")]
	pub storage_type: Option<String>,
	/// Network offering.
	#[serde(rename = "Network_Type", deserialize_with = "lenient::opt_text")]
	pub network_type: Option<String>,
	/// Security offering.
	#[serde(rename = "Security", deserialize_with = "lenient::opt_text")]
	pub security: Option<String>,

	/// Compute cost.
	#[serde(rename = "Compute_Cost", deserialize_with = "lenient::number")]
	pub compute_cost: f64,
	/// Regional surcharge.
	#[serde(rename = "Region_Cost", deserialize_with = "lenient::number")]
	pub region_cost: f64,
	/// Storage cost.
	#[serde(rename = "Storage_Cost", deserialize_with = "lenient::number")]
	pub storage_cost: f64,
	/// Network cost.
	#[serde(rename = "Network_Cost", deserialize_with = "lenient::number")]
	pub network_cost: f64,
	/// Security cost.
	#[serde(rename = "Security_Cost", deserialize_with = "lenient::number")]
	pub security_cost: f64,
	/// Data transfer cost.
	#[serde(rename = "Data_Transfer_Cost", deserialize_with = "lenient::number")]
	pub data_transfer_cost: f64,
	/// Licensing cost.
	#[serde(rename = "Licensing_Cost", deserialize_with = "lenient::number")]
	pub licensing_cost: f64,
	/// Monitoring cost.
	#[serde(rename = "Monitoring_Cost", deserialize_with = "lenient::number")]
	pub monitoring_cost: f64,
	/// Backup cost.
	#[serde(rename = "Backup_Cost", deserialize_with = "lenient::number")]
	pub backup_cost: f64,
	/// Support plan cost.
	#[serde(rename = "Support_Cost", deserialize_with = "lenient::number")]
	pub support_cost: f64,
	/// Sum of every component.
	#[serde(rename = "Total_Cost", deserialize_with = "lenient::number")]
	pub total_cost: f64,
}

impl PathCostRecord {
	/// Everything that is not compute, storage or network.
	pub fn other_costs(&self) -> f64 {
		self.security_cost
			+ self.data_transfer_cost
			+ self.licensing_cost
			+ self.monitoring_cost
			+ self.backup_cost
			+ self.support_cost
	}
}

/// Deserializers that map bad values to defaults instead of errors.
pub(crate) mod lenient {
	use serde::{Deserialize, Deserializer};
	use serde_json::Value;

	pub fn as_number(value: &Value) -> Option<f64> {
		let number = match value {
			Value::Number(n) => n.as_f64(),
			Value::String(s) => s.trim().parse::<f64>().ok(),
			_ => None,
		};
		number.filter(|n| n.is_finite())
	}

	pub fn as_text(value: &Value) -> Option<String> {
		match value {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			Value::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}

	pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
		Ok(as_number(&Value::deserialize(d)?).unwrap_or(0.0))
	}

	pub fn opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
		Ok(as_number(&Value::deserialize(d)?))
	}

	pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
		Ok(as_text(&Value::deserialize(d)?).unwrap_or_default())
	}

	pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
		Ok(as_text(&Value::deserialize(d)?))
	}

	pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
		Ok(match Value::deserialize(d)? {
			Value::Null => String::new(),
			other => as_text(&other).unwrap_or_else(|| other.to_string()),
		})
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn edge_record_tolerates_missing_and_malformed_fields() {
		let record: GraphEdgeRecord = serde_json::from_value(json!({
			"startNode": { "name": "VM1", "region": null, "tier": "gold" },
			"endNode": { "name": 42 },
			"relationshipProperties": { "cost": "n/a", "latencyMs": 3 }
		}))
		.unwrap();

		assert_eq!(record.start_node.name.as_deref(), Some("VM1"));
		assert_eq!(record.start_node.region, None);
		assert_eq!(record.start_node.extra["tier"], json!("gold"));
		assert_eq!(record.end_node.name.as_deref(), Some("42"));
		assert_eq!(record.relationship_properties.cost, None);
		assert_eq!(record.relationship_properties.extra["latencyMs"], json!(3));
	}

	#[test]
	fn dedup_key_uses_name_state_and_region() {
		let node = NodeRecord {
			name: Some("S3".into()),
			region: Some("us-east".into()),
			..Default::default()
		};
		assert_eq!(node.dedup_key(), "node-S3--us-east");
	}

	#[test]
	fn cost_record_keeps_breakdown_order() {
		let record: CostRecord = serde_json::from_value(json!({
			"region": "eu-west-1",
			"totalCost": 310.5,
			"costBreakdown": { "Storage": 10, "Compute": "300.5", "Support": null }
		}))
		.unwrap();

		let breakdown: Vec<_> = record.breakdown().collect();
		assert_eq!(
			breakdown,
			vec![("Storage", 10.0), ("Compute", 300.5), ("Support", 0.0)]
		);
	}

	#[test]
	fn compute_graph_accepts_numeric_ids_and_error_bodies() {
		let graph: ComputeGraph = serde_json::from_value(json!({
			"nodes": [{ "id": 7, "labels": ["Compute"], "props": { "name": "EC2 P4d" } }],
			"relationships": [{ "type": "DEPLOYED_IN", "start": 7, "end": "8", "props": {} }]
		}))
		.unwrap();
		assert_eq!(graph.nodes[0].id, "7");
		assert_eq!(graph.nodes[0].name().as_deref(), Some("EC2 P4d"));
		assert_eq!(graph.relationships[0].end, "8");
		assert_eq!(graph.relationships[0].cost(), None);

		let empty: ComputeGraph =
			serde_json::from_value(json!({ "error": "No data found in database" })).unwrap();
		assert!(empty.nodes.is_empty());
	}

	#[test]
	fn path_record_sums_other_costs() {
		let path: PathCostRecord = serde_json::from_value(json!({
			"Compute_Service": "AWS Lambda",
			"Compute_Cost": 12.0,
			"Security_Cost": 1.0,
			"Data_Transfer_Cost": 0.5,
			"Licensing_Cost": 2,
			"Monitoring_Cost": null,
			"Support_Cost": 4,
			"Total_Cost": 19.5
		}))
		.unwrap();
		assert_eq!(path.compute_service.as_deref(), Some("AWS Lambda"));
		assert_eq!(path.other_costs(), 7.5);
		assert_eq!(path.backup_cost, 0.0);
	}
}
