use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "ecommerce-personalization",
	title: "E-commerce Personalization Platform",
	badge: "🛒🎯",
	summary: "The platform provides AI-driven personalization, optimizing user experience with real-time recommendations, behavioral insights, and dynamic pricing.",
	cost_profile: None,
	layers: &[
		Layer {
			title: "User Interaction Layer",
			icon: "🛒",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Session Management",
					details: &[
						"User Tracking (1M concurrent)",
						"Behavior Analysis (real-time)",
						"Journey Mapping (<50ms)",
					],
				},
				Service {
					name: "Event Processing",
					details: &[
						"Click Stream (100K events/sec)",
						"Search Patterns (50K/sec)",
						"Cart Actions (10K/sec)",
					],
				},
				Service {
					name: "Context Engine",
					details: &[
						"Location Awareness (real-time)",
						"Device Context (100% coverage)",
						"Time-based Analysis (24/7)",
					],
				},
			],
		},
		Layer {
			title: "Personalization Engine",
			icon: "🎯",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Real-time Recommendations",
					details: &[
						"Product Suggestions (<100ms)",
						"Cross-sell Analysis (real-time)",
						"Basket Analysis (95% accuracy)",
					],
				},
				Service {
					name: "ML Models",
					details: &[
						"Collaborative Filtering (hourly)",
						"Content-based (daily)",
						"Hybrid Models (real-time)",
					],
				},
				Service {
					name: "Dynamic Pricing",
					details: &[
						"Price Optimization (5min)",
						"Inventory Analysis (real-time)",
						"Competitor Tracking (hourly)",
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
					name: "User Profiles",
					details: &[
						"Profile Store (500M users)",
						"Preference Data (2PB)",
						"History Store (1PB)",
					],
				},
				Service {
					name: "Product Catalog",
					details: &[
						"Product Data (100M items)",
						"Attribute Store (500TB)",
						"Media Assets (1PB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"Behavioral Data (1PB)",
						"Transaction History (500TB)",
						"Model Features (200TB)",
					],
				},
			],
		},
		Layer {
			title: "Integration Layer",
			icon: "🔗",
			color: "#FEF9E8",
			services: &[
				Service {
					name: "Commerce Integration",
					details: &[
						"Order Management (10K/min)",
						"Inventory Sync (real-time)",
						"Pricing Engine (5min sync)",
					],
				},
				Service {
					name: "API Services",
					details: &[
						"REST APIs (<50ms)",
						"GraphQL (real-time)",
						"Event Streams (WebSocket)",
					],
				},
				Service {
					name: "Analytics Services",
					details: &[
						"A/B Testing (real-time)",
						"Performance Analytics (1min)",
						"Business Metrics (hourly)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph UIL[User Interaction Layer]
      UT[User Tracking] --> EP[Event Processing]
      EP --> CE[Context Engine]
      SR[Search & Browse] --> EP
      CA[Cart Actions] --> EP
  end

  subgraph PE[Personalization Engine]
      RR[Real-time Recommendations]
      ML[ML Models]
      DP[Dynamic Pricing]
      AB[A/B Testing]
  end

  subgraph DM[Data Management]
      UP[(User Profiles)]
      PC[(Product Catalog)]
      AS[(Analytics Store)]
      FS[(Feature Store)]
  end

  subgraph IL[Integration Layer]
      API[API Services]
      ES[Event Streaming]
      CI[Commerce Integration]
      AN[Analytics Service]
  end

  %% User Interaction Flows
  CE --> RR
  EP --> ML
  EP --> AS

  %% Personalization Flows
  ML --> RR
  ML --> DP
  FS --> ML
  RR --> AB

  %% Data Flows
  UP --> RR
  PC --> RR
  AS --> ML
  AS --> AN

  %% Integration Flows
  RR --> API
  DP --> API
  AB --> AN
  CI --> PC
  EP --> ES

  %% Real-time Updates
  API --> UT
  ES --> CE
  AN --> AB

  classDef interaction fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef engine fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef integration fill:#E8A87C,stroke:#333
  classDef tracking fill:#95DAC1,stroke:#333

  class UIL,PE,DM,IL interaction
  class RR,ML,DP,AB engine
  class UP,PC,AS,FS storage
  class API,ES,CI,AN integration
  class UT,SR,CA,CE tracking"#,
};
