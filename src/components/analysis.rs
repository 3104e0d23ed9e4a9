//! Graph-plus-costs view for one analysis target.

use leptos::prelude::*;

use crate::analysis::{Analysis, CostView};
use crate::api::{AnalysisTarget, FetchError, HttpSource, fetch_analysis};
use crate::components::cost_table::{CostCards, CostComparisonTable};
use crate::components::details::{DetailsDialog, RegionLegend};
use crate::components::force_graph::{ForceGraphCanvas, Selection};
use crate::config::AppConfig;

/// Fetches `target` once on mount, then shows loading, the generic error, or
/// the report. The request is dropped with the view if it unmounts first.
#[component]
pub fn CostAnalysis(target: AnalysisTarget) -> impl IntoView {
	let config = expect_context::<AppConfig>();
	let analysis = LocalResource::new(move || {
		let (config, target) = (config.clone(), target.clone());
		async move { fetch_analysis(&HttpSource, &config, &target).await }
	});

	view! {
		<Suspense fallback=|| view! { <div class="loading">"Loading data..."</div> }>
			{move || Suspend::new(async move {
				match analysis.await {
					Ok(analysis) => view! { <AnalysisReport analysis=analysis /> }.into_any(),
					Err(_) => view! { <div class="error">{FetchError::USER_MESSAGE}</div> }.into_any(),
				}
			})}
		</Suspense>
	}
}

/// Legend, interactive graph, details dialog and ranked costs.
#[component]
pub fn AnalysisReport(analysis: Analysis) -> impl IntoView {
	let selection = RwSignal::new(None::<Selection>);
	let on_select = Callback::new(move |selected: Selection| selection.set(Some(selected)));
	let Analysis { graph, costs } = analysis;
	let regions = graph.regions.clone();

	view! {
		<div class="analysis">
			<h3>"Infrastructure Graph"</h3>
			<RegionLegend regions=regions />
			<ForceGraphCanvas data=Signal::stored(graph) on_select=on_select />
			<p class="muted">"Click a node or relationship to inspect it."</p>
			<DetailsDialog selection=selection />
			{match costs {
				CostView::Regions(records) => view! { <CostCards records=records /> }.into_any(),
				CostView::Paths(paths) => view! { <CostComparisonTable paths=paths /> }.into_any(),
			}}
		</div>
	}
}
