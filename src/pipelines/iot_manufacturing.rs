use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "iot-manufacturing-analytics",
	title: "IoT-Based Manufacturing Platform",
	badge: "🏭🔗",
	summary: "The platform enables real-time data processing, predictive analytics, and seamless enterprise integration to optimize manufacturing operations.",
	cost_profile: None,
	layers: &[
		Layer {
			title: "Edge Processing Layer",
			icon: "🔗",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Sensor Integration",
					details: &[
						"Device Management (1M devices)",
						"Data Collection (10K readings/sec)",
						"Edge Filtering (<10ms latency)",
					],
				},
				Service {
					name: "Edge Analytics",
					details: &[
						"Real-time Processing (1ms SLA)",
						"Local ML Inference (100ms)",
						"Anomaly Detection (real-time)",
					],
				},
				Service {
					name: "Edge Storage",
					details: &[
						"Local Cache (1TB/device)",
						"Data Buffering (24h retention)",
						"Sync Management (5min cycles)",
					],
				},
			],
		},
		Layer {
			title: "Core Processing Layer",
			icon: "⚙️",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Stream Processing",
					details: &[
						"Data Ingestion (1GB/s)",
						"Real-time Analytics (100ms)",
						"Pattern Detection (5s window)",
					],
				},
				Service {
					name: "Predictive Analytics",
					details: &[
						"ML Model Training (hourly)",
						"Failure Prediction (95% accuracy)",
						"Performance Optimization (real-time)",
					],
				},
				Service {
					name: "Process Optimization",
					details: &[
						"Quality Control (real-time)",
						"Resource Planning (15min updates)",
						"Workflow Optimization (hourly)",
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
						"Sensor Data (2PB)",
						"Performance Metrics (1PB)",
						"Event History (500TB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"ML Models (100TB)",
						"Analytics Results (500TB)",
						"Historical Patterns (200TB)",
					],
				},
				Service {
					name: "Operational Store",
					details: &[
						"Process Parameters (100TB)",
						"Quality Metrics (200TB)",
						"Maintenance Records (100TB)",
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
					name: "Enterprise Integration",
					details: &[
						"ERP Integration (real-time)",
						"MES Integration (5min sync)",
						"SCM Integration (hourly)",
					],
				},
				Service {
					name: "API Services",
					details: &[
						"REST APIs (<100ms)",
						"Real-time Events (WebSocket)",
						"Batch Processing (15min)",
					],
				},
				Service {
					name: "Visualization Services",
					details: &[
						"Real-time Dashboards (1s refresh)",
						"Analytics Reports (5min updates)",
						"Alert Management (<1s)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph EL[Edge Layer]
      Sensors[IoT Sensors] --> EF[Edge Filtering]
      EF --> EA[Edge Analytics]
      EA --> ES[Edge Storage]
      EA --> AD[Anomaly Detection]
  end

  subgraph PL[Processing Layer]
      SP[Stream Processing]
      PA[Predictive Analytics]
      PO[Process Optimization]
      ML[ML Training]
  end

  subgraph DM[Data Management]
      TS[(Time Series Store)]
      AS[(Analytics Store)]
      OS[(Operational Store)]
  end

  subgraph IL[Integration Layer]
      EI[Enterprise Integration]
      API[API Services]
      VS[Visualization Services]
  end

  %% Edge to Processing Flow
  ES --> SP
  AD --> SP
  SP --> PA
  SP --> PO
  
  %% Processing to Storage Flow
  PA --> AS
  PO --> OS
  SP --> TS
  ML --> AS
  
  %% ML Training Flow
  TS --> ML
  AS --> ML
  OS --> ML
  
  %% Integration Flow
  TS --> API
  AS --> API
  OS --> API
  
  API --> EI
  API --> VS
  
  %% Real-time Alerts
  AD --> VS
  PA --> VS
  PO --> VS

  classDef edge fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef process fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef integration fill:#E8A87C,stroke:#333
  classDef sensors fill:#95DAC1,stroke:#333

  class EL,PL,DM,IL edge
  class SP,PA,PO,ML,EA,AD process
  class TS,AS,OS storage
  class EI,API,VS integration
  class Sensors,EF,ES sensors"#,
};
