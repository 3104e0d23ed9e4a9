use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "global-media-streaming",
	title: "Global Media Streaming Platform",
	badge: "📡🌎",
	summary: "The platform enhances media streaming with AI-driven content management, intelligent recommendations, and real-time user insights.",
	cost_profile: Some("Global Media Streaming Platform"),
	layers: &[
		Layer {
			title: "Content Management Layer",
			icon: "🎬",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Ingestion Pipeline",
					details: &[
						"Content Upload (50TB/day)",
						"Quality Validation (real-time)",
						"Metadata Extraction (auto)",
					],
				},
				Service {
					name: "Transcoding Farm",
					details: &[
						"Multi-format Encoding (8K)",
						"Multi-bitrate Outputs (20)",
						"DRM Integration (real-time)",
					],
				},
				Service {
					name: "Content Processing",
					details: &[
						"Scene Detection (ML)",
						"Content Tagging (auto)",
						"Subtitle Processing (100 langs)",
					],
				},
			],
		},
		Layer {
			title: "Streaming Service Layer",
			icon: "📡",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Streaming Engine",
					details: &[
						"Adaptive Bitrate (<100ms)",
						"Multi-protocol Support (all)",
						"Quality Monitoring (real-time)",
					],
				},
				Service {
					name: "CDN Management",
					details: &[
						"Global Edge Network (200+)",
						"Cache Optimization (95% hit)",
						"Load Balancing (automatic)",
					],
				},
				Service {
					name: "Session Management",
					details: &[
						"User Authentication (10ms)",
						"DRM License (instant)",
						"Quality Metrics (real-time)",
					],
				},
			],
		},
		Layer {
			title: "Data Management Layer",
			icon: "💾",
			color: "#F4EAFB",
			services: &[
				Service {
					name: "Content Store",
					details: &[
						"Master Content (50PB)",
						"Encoded Variants (30PB)",
						"Metadata Store (5PB)",
					],
				},
				Service {
					name: "User Data Store",
					details: &[
						"Profiles (500M+)",
						"Viewing History (10PB)",
						"Preferences (2PB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"Streaming Analytics (5PB)",
						"Performance Data (2PB)",
						"ML Features (1PB)",
					],
				},
			],
		},
		Layer {
			title: "Intelligence Layer",
			icon: "🤖",
			color: "#FEF9E8",
			services: &[
				Service {
					name: "Recommendation Engine",
					details: &[
						"Content Matching (50ms)",
						"Personalization (real-time)",
						"Trend Analysis (hourly)",
					],
				},
				Service {
					name: "Quality Engine",
					details: &[
						"Experience Monitoring",
						"Network Analysis (live)",
						"Performance Optimization",
					],
				},
				Service {
					name: "Content Intelligence",
					details: &[
						"Popularity Prediction",
						"Content Analysis (ML)",
						"Engagement Analytics",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph CML[Content Management]
      CI[Content Ingestion] --> QV[Quality Validation]
      QV --> TF[Transcoding Farm]
      TF --> CP[Content Processing]
      CP --> DRM[DRM Encryption]
  end

  subgraph SSL[Streaming Service]
      SE[Streaming Engine]
      CDN[CDN Management]
      SM[Session Management]
      QE[Quality Engine]
  end

  subgraph DML[Data Management]
      CS[(Content Store)]
      US[(User Store)]
      AS[(Analytics Store)]
      MS[(Metadata Store)]
  end

  subgraph IL[Intelligence Layer]
      RE[Recommendation Engine]
      PA[Performance Analytics]
      CA[Content Analytics]
      ML[ML Models]
  end

  %% Content Flow
  DRM --> CS
  CS --> CDN
  CDN --> SE
  SE --> SM

  %% User Flow
  SM --> US
  US --> RE
  RE --> SE

  %% Analytics Flow
  SE --> AS
  AS --> PA
  PA --> QE
  QE --> SE

  %% Intelligence Flow
  AS --> ML
  ML --> RE
  ML --> CA
  CA --> RE

  %% Metadata Flow
  CP --> MS
  MS --> RE
  MS --> CA

  classDef content fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef streaming fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef intelligence fill:#E8A87C,stroke:#333
  classDef processing fill:#95DAC1,stroke:#333

  class CML content
  class SSL streaming
  class DML storage
  class IL intelligence
  class CI,QV,TF,CP processing"#,
};
