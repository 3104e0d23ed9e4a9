use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::analysis::CostAnalysis;
use crate::components::diagram::MermaidDiagram;
use crate::pages::not_found::NotFound;
use crate::pipelines::{self, Layer, Pipeline};

/// Accordion sections of a pipeline page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
	/// Architecture layers and their services.
	Approach,
	/// Mermaid flowchart.
	Architecture,
	/// Fetched graph and cost ranking.
	Analysis,
}

impl Panel {
	fn title(self) -> &'static str {
		match self {
			Self::Approach => "Approach",
			Self::Architecture => "Architecture",
			Self::Analysis => "Graph Analysis",
		}
	}
}

/// Open panel after `clicked` is clicked. At most one panel is open; clicking
/// the open one closes it.
pub fn toggle(open: Option<Panel>, clicked: Panel) -> Option<Panel> {
	if open == Some(clicked) { None } else { Some(clicked) }
}

/// `/pipelines/:slug`. Unknown slugs get the 404 page.
#[component]
pub fn PipelinePage() -> impl IntoView {
	let params = use_params_map();
	move || {
		let slug = params.with(|p| p.get("slug")).unwrap_or_default();
		match pipelines::find(&slug) {
			Some(pipeline) => view! { <PipelineView pipeline=*pipeline /> }.into_any(),
			None => {
				log::debug!("no pipeline with slug {slug:?}");
				view! { <NotFound /> }.into_any()
			}
		}
	}
}

#[component]
fn PipelineView(pipeline: Pipeline) -> impl IntoView {
	let open = RwSignal::new(Some(Panel::Approach));
	let is_open = move |panel: Panel| open.get() == Some(panel);

	view! {
		<article class="page pipeline">
			<header class="pipeline-header">
				<h1>
					<span class="badge-icon">{pipeline.badge}</span>
					" "
					{pipeline.title}
				</h1>
				<p class="summary">{pipeline.summary}</p>
			</header>

			<section class="accordion" class:open=move || is_open(Panel::Approach)>
				<PanelToggle panel=Panel::Approach open=open />
				<Show when=move || is_open(Panel::Approach)>
					<div class="accordion-details layer-grid">
						<LayerCards layers=pipeline.layers />
					</div>
				</Show>
			</section>

			<section class="accordion" class:open=move || is_open(Panel::Architecture)>
				<PanelToggle panel=Panel::Architecture open=open />
				<Show when=move || is_open(Panel::Architecture)>
					<div class="accordion-details">
						<MermaidDiagram source=pipeline.diagram />
					</div>
				</Show>
			</section>

			// mounting the analysis is what starts its fetch
			<section class="accordion" class:open=move || is_open(Panel::Analysis)>
				<PanelToggle panel=Panel::Analysis open=open />
				<Show when=move || is_open(Panel::Analysis)>
					<div class="accordion-details">
						<CostAnalysis target=pipeline.analysis_target() />
					</div>
				</Show>
			</section>
		</article>
	}
}

#[component]
fn PanelToggle(panel: Panel, open: RwSignal<Option<Panel>>) -> impl IntoView {
	view! {
		<button
			type="button"
			class="accordion-summary"
			aria-expanded=move || (open.get() == Some(panel)).to_string()
			on:click=move |_| open.update(|current| *current = toggle(*current, panel))
		>
			<span>{panel.title()}</span>
			<span class="chevron">"▾"</span>
		</button>
	}
}

#[component]
fn LayerCards(layers: &'static [Layer]) -> impl IntoView {
	layers
		.iter()
		.map(|layer| {
			view! {
				<div class="layer" style=format!("background: {};", layer.color)>
					<h3>{layer.icon} " " {layer.title}</h3>
					<div class="services">
						{layer
							.services
							.iter()
							.map(|service| {
								view! {
									<div class="service">
										<h4>{service.name}</h4>
										<ul>
											{service.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
										</ul>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			}
		})
		.collect_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opening_a_panel_closes_the_others() {
		let open = Some(Panel::Approach);
		let open = toggle(open, Panel::Analysis);
		assert_eq!(open, Some(Panel::Analysis));
		assert_eq!(toggle(open, Panel::Architecture), Some(Panel::Architecture));
	}

	#[test]
	fn clicking_the_open_panel_closes_it() {
		assert_eq!(toggle(Some(Panel::Architecture), Panel::Architecture), None);
		assert_eq!(toggle(None, Panel::Approach), Some(Panel::Approach));
	}
}
