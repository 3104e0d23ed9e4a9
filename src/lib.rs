//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod analysis;
pub mod api;
pub mod bindings;
pub mod components;
pub mod config;
pub mod pages;
pub mod pipelines;

// Top-Level pages
use crate::config::AppConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::pipeline::PipelinePage;
use crate::pipelines::CATALOG;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Site navigation: overview plus every pipeline.
#[component]
fn NavBar() -> impl IntoView {
	view! {
		<nav class="navbar">
			<A href="/" attr:class="brand">"☁️ Cloud Cost Atlas"</A>
			<ul class="nav-links">
				{CATALOG
					.iter()
					.map(|p| view! { <li><A href=p.href()>{p.title}</A></li> })
					.collect_view()}
			</ul>
		</nav>
	}
}

/// An app router which renders the overview, the pipeline pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::from_env();
	info!("API base {}", config.api_base());
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Cloud Cost Atlas" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<NavBar />
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/pipelines/:slug") view=PipelinePage />
				</Routes>
			</main>
		</Router>
	}
}
