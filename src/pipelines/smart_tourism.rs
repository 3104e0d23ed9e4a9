use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "smart-tourism",
	title: "Smart Tourism Platform",
	badge: "🌍✈️",
	summary: "The platform enhances tourism experiences with AI-driven personalization, real-time booking, and seamless travel services.",
	cost_profile: Some("Smart Tourism Platform"),
	layers: &[
		Layer {
			title: "Experience Layer",
			icon: "🌍",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Personalization Engine",
					details: &[
						"Preference Analysis (real-time)",
						"Experience Matching (<100ms)",
						"Cultural Adaptation (dynamic)",
					],
				},
				Service {
					name: "Location Services",
					details: &[
						"Real-time Tracking (1s update)",
						"POI Discovery (50m accuracy)",
						"Route Optimization (real-time)",
					],
				},
				Service {
					name: "Interactive Guides",
					details: &[
						"AR Experiences (30fps)",
						"Virtual Tours (4K quality)",
						"Audio Guides (40 languages)",
					],
				},
			],
		},
		Layer {
			title: "Real-time Services Layer",
			icon: "⚡",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Booking Engine",
					details: &[
						"Accommodation (real-time)",
						"Activities (<500ms confirm)",
						"Transport Integration (live)",
					],
				},
				Service {
					name: "Crowd Management",
					details: &[
						"Occupancy Tracking (real-time)",
						"Flow Prediction (15min ahead)",
						"Capacity Alerts (instant)",
					],
				},
				Service {
					name: "Event Services",
					details: &[
						"Live Updates (real-time)",
						"Ticket Management (instant)",
						"Schedule Optimization (5min)",
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
					name: "Tourist Profiles",
					details: &[
						"Preferences (1PB)",
						"Activity History (2PB)",
						"Feedback Data (500TB)",
					],
				},
				Service {
					name: "Content Store",
					details: &[
						"Media Assets (1PB)",
						"AR/VR Content (500TB)",
						"Guides & Maps (200TB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"Behavioral Data (1PB)",
						"Traffic Patterns (500TB)",
						"Service Usage (200TB)",
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
					name: "Travel Services",
					details: &[
						"Transport APIs (real-time)",
						"Hotel Systems (instant)",
						"Tour Operators (5min sync)",
					],
				},
				Service {
					name: "City Services",
					details: &[
						"Emergency Services (instant)",
						"Tourist Information (5min)",
						"Public Transport (real-time)",
					],
				},
				Service {
					name: "Partner Network",
					details: &[
						"Attraction APIs (live)",
						"Restaurant Systems (real-time)",
						"Event Platforms (5min)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph EL[Experience Layer]
      PE[Personalization Engine] --> LS[Location Services]
      LS --> IG[Interactive Guides]
      UB[User Behavior] --> PE
  end

  subgraph RSL[Real-time Services]
      BE[Booking Engine]
      CM[Crowd Management]
      ES[Event Services]
      RA[Real-time Analytics]
  end

  subgraph DML[Data Management]
      TP[(Tourist Profiles)]
      CS[(Content Store)]
      AS[(Analytics Store)]
      FS[(Feature Store)]
  end

  subgraph IL[Integration Layer]
      TS[Travel Services]
      CY[City Services]
      PN[Partner Network]
      WS[Weather Services]
  end

  %% Experience Flows
  PE --> BE
  LS --> CM
  IG --> ES

  %% Data Flows
  UB --> TP
  TP --> PE
  CS --> IG
  AS --> RA
  RA --> CM

  %% Booking Flows
  BE --> TS
  BE --> PN
  ES --> PN

  %% Service Integration
  TS --> CM
  CY --> CM
  WS --> RA
  PN --> BE

  %% Analytics Flows
  CM --> AS
  BE --> AS
  ES --> AS
  FS --> PE

  %% Emergency Services
  CM --> CY
  LS --> CY

  classDef experience fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef services fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef integration fill:#E8A87C,stroke:#333
  classDef user fill:#95DAC1,stroke:#333

  class EL experience
  class RSL services
  class DML storage
  class IL integration
  class UB user"#,
};
