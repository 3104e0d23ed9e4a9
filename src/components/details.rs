//! Click-to-inspect dialog and the region legend.

use leptos::prelude::*;
use serde_json::Value;

use crate::analysis::transform::{UNKNOWN_REGION, display_value, region_color};
use crate::components::force_graph::Selection;

/// Dialog body built from a tooltip.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailBody {
	/// `(Key, value)` rows from a JSON object, in document order.
	Fields(Vec<(String, String)>),
	/// Anything that is not a JSON object, shown verbatim.
	Text(String),
}

/// Dialog heading for a node or a relationship.
pub fn dialog_title(selection: &Selection) -> &'static str {
	match selection {
		Selection::Node(_) => "Node Details",
		Selection::Edge(_) => "Relationship Details",
	}
}

/// Rows for a JSON-object tooltip, otherwise the tooltip text as-is.
pub fn detail_body(tooltip: &str) -> DetailBody {
	match serde_json::from_str::<Value>(tooltip) {
		Ok(Value::Object(fields)) => DetailBody::Fields(
			fields
				.iter()
				.map(|(key, value)| (capitalize(key), display_value(value)))
				.collect(),
		),
		_ => DetailBody::Text(tooltip.to_string()),
	}
}

fn capitalize(key: &str) -> String {
	let mut chars = key.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Regions to show in the legend with their colors. `Unknown` is hidden but
/// still consumes its palette slot, so colors match the nodes.
pub fn legend_entries(regions: &[String]) -> Vec<(String, &'static str)> {
	regions
		.iter()
		.enumerate()
		.filter(|(_, region)| region.as_str() != UNKNOWN_REGION)
		.map(|(index, region)| (region.clone(), region_color(index)))
		.collect()
}

/// Modal showing the attributes of the selected node or relationship.
#[component]
pub fn DetailsDialog(selection: RwSignal<Option<Selection>>) -> impl IntoView {
	let close = move |_| selection.set(None);

	move || {
		selection.get().map(|selected| {
			let body = match detail_body(selected.tooltip()) {
				DetailBody::Fields(rows) => view! {
					<dl class="details-fields">
						{rows
							.into_iter()
							.map(|(key, value)| view! { <dt>{key}</dt><dd>{value}</dd> })
							.collect_view()}
					</dl>
				}
				.into_any(),
				DetailBody::Text(text) => view! { <pre class="details-text">{text}</pre> }.into_any(),
			};

			view! {
				<div class="dialog-backdrop" on:click=close>
					<div
						class="dialog"
						role="dialog"
						aria-modal="true"
						on:click=|ev| ev.stop_propagation()
					>
						<header class="dialog-header">
							<h3>{dialog_title(&selected)}</h3>
							<button type="button" aria-label="Close" on:click=close>"×"</button>
						</header>
						{body}
					</div>
				</div>
			}
		})
	}
}

/// "Network Regions" chips. Renders nothing when only `Unknown` is present.
#[component]
pub fn RegionLegend(regions: Vec<String>) -> impl IntoView {
	let entries = legend_entries(&regions);
	(!entries.is_empty()).then(move || {
		view! {
			<div class="region-legend">
				<h4>"Network Regions"</h4>
				<ul>
					{entries
						.into_iter()
						.map(|(region, color)| {
							view! {
								<li class="region-chip">
									<span class="swatch" style=format!("background: {color};")></span>
									{region}
								</li>
							}
						})
						.collect_view()}
				</ul>
			</div>
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::GraphLink;

	#[test]
	fn json_tooltip_becomes_capitalised_rows() {
		let body = detail_body(r#"{"name":"VM1","region":"us-east","tags":{"env":"prod"},"cost":12.5}"#);
		assert_eq!(
			body,
			DetailBody::Fields(vec![
				("Name".into(), "VM1".into()),
				("Region".into(), "us-east".into()),
				("Tags".into(), r#"{"env":"prod"}"#.into()),
				("Cost".into(), "12.5".into()),
			])
		);
	}

	#[test]
	fn non_object_tooltip_is_verbatim() {
		let text = "Type: Compute\ninstance type: m5.large";
		assert_eq!(detail_body(text), DetailBody::Text(text.into()));
		assert_eq!(detail_body("[1,2]"), DetailBody::Text("[1,2]".into()));
	}

	#[test]
	fn title_follows_selection_kind() {
		let edge = Selection::Edge(GraphLink {
			id: "e".into(),
			source: "a".into(),
			target: "b".into(),
			label: String::new(),
			tooltip: "{}".into(),
		});
		assert_eq!(dialog_title(&edge), "Relationship Details");
	}

	#[test]
	fn legend_hides_unknown_but_keeps_colors_aligned() {
		let regions = vec!["Unknown".to_string(), "us-east".to_string()];
		assert_eq!(legend_entries(&regions), vec![("us-east".to_string(), region_color(1))]);
		assert!(legend_entries(&["Unknown".to_string()]).is_empty());
		assert!(legend_entries(&[]).is_empty());
	}
}
