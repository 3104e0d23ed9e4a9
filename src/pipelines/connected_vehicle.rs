use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "connected-vehicle-analytics",
	title: "Connected Vehicles Analytics Platform",
	badge: "🚘📊",
	summary: "The platform ingests high-frequency vehicle telemetry data, applies real-time analytics, and integrates predictive insights with service providers.",
	cost_profile: None,
	layers: &[
		Layer {
			title: "Vehicle Data Ingestion Layer",
			icon: "🚗",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Telemetry Processing",
					details: &[
						"Sensor Data (1K signals/sec/car)",
						"GPS Tracking (1Hz update)",
						"Diagnostic Data (100Hz)",
					],
				},
				Service {
					name: "Event Processing",
					details: &[
						"Critical Alerts (<10ms)",
						"System Warnings (real-time)",
						"Behavior Events (50ms)",
					],
				},
				Service {
					name: "Data Validation",
					details: &[
						"Signal Validation (real-time)",
						"Data Quality (99.999%)",
						"Error Correction (5ms)",
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
					name: "Vehicle Analytics",
					details: &[
						"Performance Analysis (real-time)",
						"Battery/Fuel Analytics (1min)",
						"Emissions Monitoring (5min)",
					],
				},
				Service {
					name: "Driver Analytics",
					details: &[
						"Behavior Analysis (real-time)",
						"Safety Scoring (5min update)",
						"Route Optimization (real-time)",
					],
				},
				Service {
					name: "Predictive Analytics",
					details: &[
						"Maintenance Prediction (95% accuracy)",
						"Component Life Analysis (hourly)",
						"Risk Assessment (real-time)",
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
						"Telemetry Data (20PB)",
						"Performance Metrics (10PB)",
						"Event History (5PB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"Driver Profiles (1PB)",
						"Vehicle Models (5PB)",
						"ML Features (2PB)",
					],
				},
				Service {
					name: "Operational Store",
					details: &[
						"Maintenance Records (2PB)",
						"Configuration Data (1PB)",
						"OTA Updates (500TB)",
					],
				},
			],
		},
		Layer {
			title: "Service Integration Layer",
			icon: "🔗",
			color: "#FEF9E8",
			services: &[
				Service {
					name: "Vehicle Services",
					details: &[
						"OTA Updates (100K vehicles/day)",
						"Remote Diagnostics (real-time)",
						"Emergency Services (instant)",
					],
				},
				Service {
					name: "API Services",
					details: &[
						"REST APIs (<50ms)",
						"MQTT (real-time)",
						"Streaming (WebSocket)",
					],
				},
				Service {
					name: "Integration Services",
					details: &[
						"Dealer Systems (5min sync)",
						"Service Centers (real-time)",
						"Insurance APIs (hourly)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph VDI[Vehicle Data Ingestion]
      TS[Telemetry Sensors] --> EP[Event Processor]
      GPS[GPS Data] --> EP
      DG[Diagnostics] --> EP
      EP --> DV[Data Validation]
  end

  subgraph RTA[Real-time Analytics]
      VA[Vehicle Analytics]
      DA[Driver Analytics]
      PA[Predictive Analytics]
      ML[ML Models]
  end

  subgraph DM[Data Management]
      TSS[(Time Series Store)]
      AS[(Analytics Store)]
      OS[(Operational Store)]
      FS[(Feature Store)]
  end

  subgraph SI[Service Integration]
      OTA[OTA Updates]
      API[API Services]
      ES[Emergency Services]
      DS[Dealer Services]
  end

  %% Data Flow Paths
  DV --> TSS
  DV --> VA
  DV --> DA

  %% Analytics Flows
  VA --> PA
  DA --> PA
  TSS --> ML
  ML --> PA
  
  %% Feature Engineering
  TSS --> FS
  AS --> FS
  FS --> ML

  %% Service Integration
  VA --> API
  PA --> OTA
  DA --> ES
  OS --> DS

  %% Feedback Loops
  PA --> OS
  ML --> AS
  API --> EP

  classDef ingestion fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef analytics fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef services fill:#E8A87C,stroke:#333
  classDef sensors fill:#95DAC1,stroke:#333

  class VDI,RTA,DM,SI ingestion
  class VA,DA,PA,ML analytics
  class TSS,AS,OS,FS storage
  class OTA,API,ES,DS services
  class TS,GPS,DG sensors"#,
};
