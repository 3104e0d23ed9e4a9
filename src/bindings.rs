//! Thin bindings to the `mermaid` and `katex` globals loaded by `index.html`.
//!
//! Every call is `catch`: a missing global surfaces as [`RenderError`]
//! instead of a panic.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_namespace = mermaid, js_name = initialize, catch)]
	fn mermaid_initialize(config: &JsValue) -> Result<(), JsValue>;

	#[wasm_bindgen(js_namespace = mermaid, js_name = render, catch)]
	fn mermaid_render(id: &str, source: &str) -> Result<js_sys::Promise, JsValue>;

	#[wasm_bindgen(js_namespace = katex, js_name = renderToString, catch)]
	fn katex_render_to_string(tex: &str, options: &JsValue) -> Result<String, JsValue>;
}

/// Decorative rendering failed; callers fall back to the source text.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
	/// The library threw or is not loaded.
	#[error("{library} failed: {message}")]
	Library {
		/// `mermaid` or `katex`.
		library: &'static str,
		/// Stringified JS exception.
		message: String,
	},
	/// The call succeeded but returned something unexpected.
	#[error("{library} returned no markup")]
	NoMarkup {
		/// `mermaid` or `katex`.
		library: &'static str,
	},
}

impl RenderError {
	fn library(library: &'static str) -> impl FnOnce(JsValue) -> Self {
		move |err| Self::Library {
			library,
			message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
		}
	}
}

/// Settings applied before each diagram render.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfig {
	/// Never scan the page on load; diagrams render on demand.
	pub start_on_load: bool,
	/// Mermaid theme name.
	pub theme: &'static str,
	/// Mermaid security level.
	pub security_level: &'static str,
}

impl Default for DiagramConfig {
	fn default() -> Self {
		Self {
			start_on_load: false,
			theme: "default",
			security_level: "loose",
		}
	}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormulaOptions {
	display_mode: bool,
	throw_on_error: bool,
}

/// Render `source` to SVG markup. `id` must be unique within the document.
pub async fn render_diagram(
	id: &str,
	source: &str,
	config: &DiagramConfig,
) -> Result<String, RenderError> {
	let config = serde_wasm_bindgen::to_value(config).map_err(|e| RenderError::Library {
		library: "mermaid",
		message: e.to_string(),
	})?;
	mermaid_initialize(&config).map_err(RenderError::library("mermaid"))?;

	let promise = mermaid_render(id, source).map_err(RenderError::library("mermaid"))?;
	let result = JsFuture::from(promise)
		.await
		.map_err(RenderError::library("mermaid"))?;

	js_sys::Reflect::get(&result, &JsValue::from_str("svg"))
		.ok()
		.and_then(|svg| svg.as_string())
		.ok_or(RenderError::NoMarkup { library: "mermaid" })
}

/// Render TeX to HTML markup, inline or as a display block.
pub fn render_formula(tex: &str, display: bool) -> Result<String, RenderError> {
	let options = serde_wasm_bindgen::to_value(&FormulaOptions {
		display_mode: display,
		throw_on_error: false,
	})
	.map_err(|e| RenderError::Library {
		library: "katex",
		message: e.to_string(),
	})?;
	katex_render_to_string(tex, &options).map_err(RenderError::library("katex"))
}
