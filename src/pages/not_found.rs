use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page, also used for unknown pipeline slugs.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<article class="page not-found">
			<h1>"Page not found"</h1>
			<p>"There is nothing at this address."</p>
			<A href="/">"Back to the overview"</A>
		</article>
	}
}
