//! Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use cloud_cost_atlas::analysis::transform::NodeKind;
use cloud_cost_atlas::api::models::{CostRecord, PathCostRecord};
use cloud_cost_atlas::api::{AnalysisTarget, FetchError};
use cloud_cost_atlas::components::analysis::CostAnalysis;
use cloud_cost_atlas::components::cost_table::{CostCards, CostComparisonTable};
use cloud_cost_atlas::components::details::DetailsDialog;
use cloud_cost_atlas::components::force_graph::{ForceGraphCanvas, GraphData, GraphNode, Selection};
use cloud_cost_atlas::config::AppConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
	let document = document();
	let div = document.create_element("div").unwrap();
	document.body().unwrap().append_child(&div).unwrap();
	div.unchecked_into()
}

async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		let _ = web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
	});
	wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn text(root: &web_sys::HtmlElement, selector: &str) -> Option<String> {
	root.query_selector(selector).unwrap().and_then(|el| el.text_content())
}

#[wasm_bindgen_test]
fn empty_cost_lists_render_nothing() {
	let root = container();
	let _cards = mount_to(root.clone(), || view! { <CostCards records=Vec::<CostRecord>::new() /> });
	let _absent = mount_to(root.clone(), || view! { <CostCards /> });
	let _table = mount_to(root.clone(), || {
		view! { <CostComparisonTable paths=Vec::<PathCostRecord>::new() /> }
	});
	assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn cost_cards_are_ranked_and_first_is_recommended() {
	let records: Vec<CostRecord> = serde_json::from_value(json!([
		{"region": "us-east-1", "totalCost": 1250.0, "costBreakdown": {"EC2": 1000.0, "S3": 250.0}},
		{"region": "eu-west-1", "totalCost": 980.5, "costBreakdown": {"EC2": 900.5, "S3": 80.0}},
		{"region": "ap-south-1", "totalCost": 1250.0, "costBreakdown": {}}
	]))
	.unwrap();

	let root = container();
	let _handle = mount_to(root.clone(), move || view! { <CostCards records=records /> });

	let regions = root.query_selector_all(".cost-card h4").unwrap();
	let order: Vec<String> = (0..regions.length())
		.filter_map(|i| regions.item(i).and_then(|n| n.text_content()))
		.collect();
	assert_eq!(order, ["eu-west-1", "us-east-1", "ap-south-1"]);

	assert_eq!(root.query_selector_all(".badge").unwrap().length(), 1);
	assert_eq!(text(&root, ".cost-card.recommended h4").as_deref(), Some("eu-west-1"));
	assert_eq!(text(&root, ".cost-card.recommended .cost-total").as_deref(), Some("$980.50"));
}

#[wasm_bindgen_test]
fn cheapest_path_is_marked_lowest() {
	let paths: Vec<PathCostRecord> = serde_json::from_value(json!([
		{"Compute_Service": "m5.large", "Region": "us-east-1", "Total_Cost": 310.0},
		{"Compute_Service": "t3.medium", "Region": "eu-west-1", "Total_Cost": 120.25, "Security_Cost": 5.0}
	]))
	.unwrap();

	let root = container();
	let _handle = mount_to(root.clone(), move || view! { <CostComparisonTable paths=paths /> });

	assert_eq!(root.query_selector_all("tbody tr").unwrap().length(), 2);
	assert_eq!(text(&root, "tr.lowest strong").as_deref(), Some("t3.medium"));
	assert_eq!(root.query_selector_all(".lowest-note").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn empty_graph_says_so() {
	let root = container();
	let _handle = mount_to(root.clone(), || {
		view! { <ForceGraphCanvas data=Signal::stored(GraphData::default()) height=200.0 /> }
	});
	assert_eq!(text(&root, ".graph-empty").as_deref(), Some("No data available"));
}

#[wasm_bindgen_test]
fn dialog_lists_node_fields() {
	let style = NodeKind::Compute.style();
	let node = GraphNode {
		id: "node-VM1--us-east".into(),
		label: "VM1".into(),
		tooltip: r#"{"name":"VM1","region":"us-east"}"#.into(),
		group: Some("us-east".into()),
		shape: style.shape,
		color: style.color,
		size: style.size,
	};
	let selection = RwSignal::new(Some(Selection::Node(node)));

	let root = container();
	let _handle = mount_to(root.clone(), move || view! { <DetailsDialog selection=selection /> });

	assert_eq!(text(&root, ".dialog h3").as_deref(), Some("Node Details"));
	assert_eq!(text(&root, ".details-fields dt").as_deref(), Some("Name"));
	assert_eq!(text(&root, ".details-fields dd").as_deref(), Some("VM1"));
}

#[wasm_bindgen_test]
async fn analysis_shows_loading_then_only_the_generic_error() {
	let root = container();
	let _handle = mount_to(root.clone(), || {
		// browsers refuse port 9, so both requests fail fast
		provide_context(AppConfig::new("http://127.0.0.1:9").unwrap());
		view! { <CostAnalysis target=AnalysisTarget::Pipeline("Smart Grid Analytics Platform".into()) /> }
	});
	assert_eq!(text(&root, ".loading").as_deref(), Some("Loading data..."));

	let mut error = None;
	for _ in 0..100 {
		sleep(50).await;
		error = text(&root, ".error");
		if error.is_some() {
			break;
		}
	}
	assert_eq!(error.as_deref(), Some(FetchError::USER_MESSAGE));
	assert!(root.query_selector(".loading").unwrap().is_none());
	assert!(root.query_selector(".force-graph").unwrap().is_none());
	assert!(root.query_selector(".cost-cards").unwrap().is_none());
}
