use leptos::prelude::*;
use log::warn;

use crate::bindings;

/// TeX formula rendered by KaTeX, or the raw TeX when KaTeX is unavailable.
#[component]
pub fn Formula(tex: &'static str, #[prop(optional)] block: bool) -> impl IntoView {
	let class = if block { "formula formula-block" } else { "formula" };
	match bindings::render_formula(tex, block) {
		Ok(html) => view! { <span class=class inner_html=html></span> }.into_any(),
		Err(err) => {
			warn!("formula not rendered: {err}");
			view! { <code class=class>{tex}</code> }.into_any()
		}
	}
}
