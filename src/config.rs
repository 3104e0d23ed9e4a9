//! Runtime configuration for the API client.

use thiserror::Error;
use url::Url;

/// Base URL baked in at build time, e.g. `API_BASE_URL=https://api.example.com trunk build`.
const BUILD_API_BASE: Option<&str> = option_env!("API_BASE_URL");
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Configuration errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
	/// The configured base is not an absolute http(s) URL.
	#[error("invalid API base URL {value:?}: {reason}")]
	InvalidBase {
		/// Raw configured value.
		value: String,
		/// Parser message.
		reason: String,
	},
}

/// Application configuration, provided through Leptos context by `App`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	api_base: Url,
}

impl AppConfig {
	/// Parse an explicit base URL.
	pub fn new(base: &str) -> Result<Self, ConfigError> {
		let invalid = |reason: String| ConfigError::InvalidBase {
			value: base.to_string(),
			reason,
		};
		let mut api_base = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
		if api_base.cannot_be_a_base() || !matches!(api_base.scheme(), "http" | "https") {
			return Err(invalid("expected an http(s) URL".into()));
		}
		// Endpoints are appended as segments, so drop the trailing empty one.
		if let Ok(mut segments) = api_base.path_segments_mut() {
			segments.pop_if_empty();
		}
		api_base.set_query(None);
		api_base.set_fragment(None);
		Ok(Self { api_base })
	}

	/// Resolve the base from a build-time value, falling back to the page origin.
	pub fn resolve(configured: Option<&str>, origin: &str) -> Result<Self, ConfigError> {
		match configured.map(str::trim).filter(|v| !v.is_empty()) {
			Some(base) => Self::new(base),
			None => Self::new(origin),
		}
	}

	/// Configuration for the running browser session.
	pub fn from_env() -> Self {
		let origin = web_sys::window()
			.and_then(|w| w.location().origin().ok())
			.unwrap_or_else(|| FALLBACK_ORIGIN.to_string());

		Self::resolve(BUILD_API_BASE, &origin)
			.or_else(|err| {
				log::error!("{err}; falling back to {origin}");
				Self::new(&origin)
			})
			.or_else(|_| Self::new(FALLBACK_ORIGIN))
			.expect("fallback origin is a valid URL")
	}

	/// The configured base URL.
	pub fn api_base(&self) -> &Url {
		&self.api_base
	}

	/// Build an endpoint URL by appending `segments` to the base path.
	///
	/// Each segment is percent-encoded on its own, so a pipeline name such as
	/// `"Smart Grid Analytics Platform"` stays a single path segment.
	pub fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> String {
		let mut url = self.api_base.clone();
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}
		url.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_joins_segments_under_base_path() {
		let config = AppConfig::new("https://api.example.com/gateway/").unwrap();
		assert_eq!(
			config.endpoint(["api", "v1", "graph", "compute"]),
			"https://api.example.com/gateway/api/v1/graph/compute"
		);
	}

	#[test]
	fn endpoint_encodes_pipeline_names_as_one_segment() {
		let config = AppConfig::new("http://localhost:8080").unwrap();
		assert_eq!(
			config.endpoint(["api", "v1", "pipelines", "Smart Grid/Analytics", "cost"]),
			"http://localhost:8080/api/v1/pipelines/Smart%20Grid%2FAnalytics/cost"
		);
	}

	#[test]
	fn resolve_prefers_configured_base() {
		let config = AppConfig::resolve(Some("https://costs.internal"), "http://page.test").unwrap();
		assert_eq!(config.api_base().as_str(), "https://costs.internal/");
	}

	#[test]
	fn resolve_falls_back_to_origin_when_unset_or_blank() {
		for configured in [None, Some(""), Some("   ")] {
			let config = AppConfig::resolve(configured, "http://page.test:3000").unwrap();
			assert_eq!(config.api_base().as_str(), "http://page.test:3000/");
		}
	}

	#[test]
	fn rejects_relative_and_non_http_bases() {
		assert!(matches!(
			AppConfig::new("/api"),
			Err(ConfigError::InvalidBase { .. })
		));
		assert!(matches!(
			AppConfig::new("mailto:ops@example.com"),
			Err(ConfigError::InvalidBase { .. })
		));
		assert!(matches!(
			AppConfig::new("ftp://files.example.com"),
			Err(ConfigError::InvalidBase { .. })
		));
	}
}
