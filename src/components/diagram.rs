use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::bindings::{self, DiagramConfig};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Debug, PartialEq)]
enum DiagramState {
	Pending,
	Ready(String),
	Failed,
}

/// Architecture diagram rendered by mermaid. Shows the diagram source if
/// mermaid is unavailable or rejects it.
#[component]
pub fn MermaidDiagram(source: &'static str) -> impl IntoView {
	let id = format!("diagram-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed));
	let state = RwSignal::new(DiagramState::Pending);

	spawn_local(async move {
		let next = match bindings::render_diagram(&id, source, &DiagramConfig::default()).await {
			Ok(svg) => DiagramState::Ready(svg),
			Err(err) => {
				warn!("diagram {id} not rendered: {err}");
				DiagramState::Failed
			}
		};
		// the view may be gone by the time mermaid answers
		let _ = state.try_set(next);
	});

	view! {
		<div class="diagram">
			{move || match state.get() {
				DiagramState::Pending => view! { <p class="muted">"Rendering diagram..."</p> }.into_any(),
				DiagramState::Ready(svg) => view! { <div class="diagram-svg" inner_html=svg></div> }.into_any(),
				DiagramState::Failed => view! { <pre class="diagram-source">{source}</pre> }.into_any(),
			}}
		</div>
	}
}
