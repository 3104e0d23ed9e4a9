use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "smart-grid-analytics",
	title: "Smart Grid Analytics Platform",
	badge: "⚡📊",
	summary: "The platform enables real-time monitoring, demand analytics, and smart grid optimization to enhance energy distribution and grid stability.",
	cost_profile: Some("Smart Grid Analytics Platform"),
	layers: &[
		Layer {
			title: "Grid Data Collection Layer",
			icon: "⚡",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Smart Meter Integration",
					details: &[
						"Consumption Data (15min intervals)",
						"Power Quality (1min samples)",
						"Load Profiles (real-time)",
					],
				},
				Service {
					name: "Grid Sensors",
					details: &[
						"Voltage Monitoring (1sec)",
						"Current Measurements (1sec)",
						"Frequency Data (100ms)",
					],
				},
				Service {
					name: "Renewable Integration",
					details: &[
						"Solar Production (5min)",
						"Wind Generation (real-time)",
						"Storage Status (1min)",
					],
				},
			],
		},
		Layer {
			title: "Real-time Analytics Layer",
			icon: "📊",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Grid Analytics",
					details: &[
						"Load Balancing (real-time)",
						"Power Quality Analysis (1min)",
						"Fault Detection (<100ms)",
					],
				},
				Service {
					name: "Demand Analytics",
					details: &[
						"Load Forecasting (15min ahead)",
						"Peak Prediction (hourly)",
						"Consumption Patterns (daily)",
					],
				},
				Service {
					name: "Optimization Engine",
					details: &[
						"Resource Allocation (5min)",
						"Grid Stability (real-time)",
						"Cost Optimization (hourly)",
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
					name: "Time Series Store",
					details: &[
						"Meter Data (10PB)",
						"Grid Metrics (5PB)",
						"Event History (2PB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"Consumption Patterns (2PB)",
						"Prediction Models (500TB)",
						"Performance Data (1PB)",
					],
				},
				Service {
					name: "Operational Store",
					details: &[
						"Grid Configuration (100TB)",
						"Asset Information (200TB)",
						"Maintenance Records (100TB)",
					],
				},
			],
		},
		Layer {
			title: "Integration & Control Layer",
			icon: "🔗",
			color: "#FEF9E8",
			services: &[
				Service {
					name: "Grid Control",
					details: &[
						"Load Distribution (real-time)",
						"Storage Management (1min)",
						"Emergency Response (<10ms)",
					],
				},
				Service {
					name: "External Integration",
					details: &[
						"Weather Services (5min)",
						"Market Data (real-time)",
						"Regulatory Reporting (daily)",
					],
				},
				Service {
					name: "Customer Services",
					details: &[
						"Usage Portals (5min refresh)",
						"Billing Integration (hourly)",
						"Demand Response (real-time)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph DCL[Data Collection Layer]
      SM[Smart Meters] --> DC[Data Collector]
      GS[Grid Sensors] --> DC
      RE[Renewable Sources] --> DC
      DC --> DV[Data Validation]
  end

  subgraph RAL[Real-time Analytics]
      GA[Grid Analytics]
      DA[Demand Analytics]
      OE[Optimization Engine]
      ML[ML Models]
  end

  subgraph DML[Data Management]
      TS[(Time Series Store)]
      AS[(Analytics Store)]
      OS[(Operational Store)]
      FS[(Feature Store)]
  end

  subgraph ICL[Integration & Control]
      GC[Grid Control]
      EI[External Integration]
      CS[Customer Services]
      EM[Emergency Management]
  end

  %% Data Flow Paths
  DV --> TS
  DV --> GA
  DV --> DA

  %% Analytics Flows
  GA --> OE
  DA --> OE
  TS --> ML
  ML --> OE
  
  %% Feature Engineering
  TS --> FS
  AS --> FS
  FS --> ML

  %% Control & Integration
  OE --> GC
  GA --> EM
  DA --> CS
  EI --> DA

  %% Historical Analysis
  TS --> AS
  GA --> AS
  DA --> AS

  %% External Integrations
  EI --> OE
  CS --> DA
  GC --> EM

  classDef collection fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef analytics fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef integration fill:#E8A87C,stroke:#333
  classDef sensors fill:#95DAC1,stroke:#333

  class DCL,RAL,DML,ICL collection
  class GA,DA,OE,ML analytics
  class TS,AS,OS,FS storage
  class GC,EI,CS,EM integration
  class SM,GS,RE,DC sensors"#,
};
