//! Static catalog of example pipeline architectures.

use crate::api::AnalysisTarget;

mod connected_vehicle;
mod ecommerce;
mod global_finance;
mod healthcare;
mod iot_manufacturing;
mod media_streaming;
mod media_streaming_v1;
mod smart_city;
mod smart_grid;
mod smart_tourism;

/// One hard-coded pipeline page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pipeline {
	/// URL segment under `/pipelines/`.
	pub slug: &'static str,
	/// Page heading and navigation label.
	pub title: &'static str,
	/// Emoji shown next to the title.
	pub badge: &'static str,
	/// One-paragraph description under the heading.
	pub summary: &'static str,
	/// Backend pipeline name with its own cost data. `None` uses the shared
	/// compute graph.
	pub cost_profile: Option<&'static str>,
	/// Architecture layers, top to bottom.
	pub layers: &'static [Layer],
	/// Mermaid flowchart source.
	pub diagram: &'static str,
}

/// An architecture layer and the services in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
	/// Layer heading.
	pub title: &'static str,
	/// Emoji before the title.
	pub icon: &'static str,
	/// Card background color.
	pub color: &'static str,
	/// Service cards in the layer.
	pub services: &'static [Service],
}

/// A service card inside a layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
	/// Card heading.
	pub name: &'static str,
	/// Bullet points, e.g. data rates or components.
	pub details: &'static [&'static str],
}

/// Every pipeline, in navigation order.
pub const CATALOG: &[Pipeline] = &[
	connected_vehicle::PIPELINE,
	ecommerce::PIPELINE,
	global_finance::PIPELINE,
	media_streaming::PIPELINE,
	media_streaming_v1::PIPELINE,
	healthcare::PIPELINE,
	iot_manufacturing::PIPELINE,
	smart_city::PIPELINE,
	smart_grid::PIPELINE,
	smart_tourism::PIPELINE,
];

/// Look up a pipeline by its URL slug.
pub fn find(slug: &str) -> Option<&'static Pipeline> {
	CATALOG.iter().find(|p| p.slug == slug)
}

impl Pipeline {
	/// Route path of this pipeline's page.
	pub fn href(&self) -> String {
		format!("/pipelines/{}", self.slug)
	}

	/// Which endpoints the Graph Analysis panel reads.
	pub fn analysis_target(&self) -> AnalysisTarget {
		match self.cost_profile {
			Some(name) => AnalysisTarget::Pipeline(name.to_string()),
			None => AnalysisTarget::Compute,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn slugs_are_unique_and_url_safe() {
		let slugs: HashSet<_> = CATALOG.iter().map(|p| p.slug).collect();
		assert_eq!(slugs.len(), CATALOG.len());
		assert_eq!(CATALOG.len(), 10);
		for slug in slugs {
			assert!(
				slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
				"{slug}"
			);
		}
	}

	#[test]
	fn titles_are_distinct() {
		let titles: HashSet<_> = CATALOG.iter().map(|p| p.title).collect();
		assert_eq!(titles.len(), CATALOG.len());
	}

	#[test]
	fn find_by_slug() {
		assert_eq!(
			find("smart-grid-analytics").map(|p| p.title),
			Some("Smart Grid Analytics Platform")
		);
		assert!(find("does-not-exist").is_none());
		assert_eq!(find("smart-grid-analytics").map(Pipeline::href).as_deref(), Some("/pipelines/smart-grid-analytics"));
	}

	#[test]
	fn every_pipeline_has_content() {
		for pipeline in CATALOG {
			assert_eq!(pipeline.layers.len(), 4, "{}", pipeline.slug);
			assert!(pipeline.diagram.trim_start().starts_with("flowchart"), "{}", pipeline.slug);
			assert!(
				pipeline.layers.iter().all(|l| !l.services.is_empty()),
				"{}",
				pipeline.slug
			);
		}
	}

	#[test]
	fn cost_profile_selects_the_analysis_target() {
		assert_eq!(
			find("smart-grid-analytics").map(Pipeline::analysis_target),
			Some(AnalysisTarget::Pipeline("Smart Grid Analytics Platform".into()))
		);
		assert_eq!(
			find("ecommerce-personalization").map(Pipeline::analysis_target),
			Some(AnalysisTarget::Compute)
		);
	}
}
