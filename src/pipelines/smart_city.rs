use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "smart-city-operations",
	title: "Smart City Operations Platform",
	badge: "🌆📡",
	summary: "The platform enables real-time urban monitoring, predictive analytics, and smart resource management for efficient city operations.",
	cost_profile: Some("Smart City Operations Platform"),
	layers: &[
		Layer {
			title: "City Sensor Network Layer",
			icon: "🌍",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Environmental Monitoring",
					details: &[
						"Air Quality (5min intervals)",
						"Weather Stations (real-time)",
						"Noise Levels (continuous)",
					],
				},
				Service {
					name: "Traffic Monitoring",
					details: &[
						"Traffic Flow (real-time)",
						"Signal Status (100ms)",
						"Parking Occupancy (1min)",
					],
				},
				Service {
					name: "Infrastructure Sensors",
					details: &[
						"Utility Networks (1min)",
						"Building Systems (5min)",
						"Public Transport (real-time)",
					],
				},
			],
		},
		Layer {
			title: "Real-time Operations Layer",
			icon: "⚙️",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Emergency Response",
					details: &[
						"Incident Detection (<1s)",
						"Response Coordination (real-time)",
						"Resource Dispatching (<30s)",
					],
				},
				Service {
					name: "Traffic Management",
					details: &[
						"Signal Optimization (5min)",
						"Congestion Analysis (real-time)",
						"Route Planning (1min update)",
					],
				},
				Service {
					name: "Resource Optimization",
					details: &[
						"Energy Management (15min)",
						"Waste Collection (hourly)",
						"Water Distribution (real-time)",
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
					name: "Operational Data",
					details: &[
						"Sensor Data (5PB)",
						"Event Logs (2PB)",
						"Service Records (1PB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"Historical Analysis (2PB)",
						"Performance Metrics (500TB)",
						"Prediction Models (200TB)",
					],
				},
				Service {
					name: "City Knowledge Base",
					details: &[
						"Infrastructure Maps (1PB)",
						"Asset Information (500TB)",
						"Service Catalogs (100TB)",
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
					name: "Citizen Services",
					details: &[
						"Mobile Apps (1M+ users)",
						"Service Portals (real-time)",
						"Information Systems (5min)",
					],
				},
				Service {
					name: "Agency Integration",
					details: &[
						"Emergency Services (real-time)",
						"Municipal Departments (5min)",
						"Utility Providers (15min)",
					],
				},
				Service {
					name: "Command Center",
					details: &[
						"Situation Awareness (real-time)",
						"Decision Support (instant)",
						"Resource Management (1min)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph SNL[Sensor Network Layer]
      ES[Environmental Sensors] --> DC[Data Collection]
      TS[Traffic Sensors] --> DC
      IS[Infrastructure Sensors] --> DC
      DC --> DV[Data Validation]
  end

  subgraph ROL[Real-time Operations]
      ER[Emergency Response]
      TM[Traffic Management]
      RO[Resource Optimization]
      PA[Predictive Analytics]
  end

  subgraph DML[Data Management]
      OD[(Operational Data)]
      AS[(Analytics Store)]
      KB[(Knowledge Base)]
      FS[(Feature Store)]
  end

  subgraph SIL[Service Integration]
      CS[Citizen Services]
      AI[Agency Integration]
      CC[Command Center]
      EM[Emergency Management]
  end

  %% Main Data Flows
  DV --> OD
  DV --> ER
  DV --> TM
  DV --> RO

  %% Analytics Flows
  OD --> PA
  PA --> ER
  PA --> TM
  PA --> RO

  %% Knowledge Base Flows
  OD --> KB
  AS --> KB
  KB --> CC

  %% Service Integration
  ER --> EM
  TM --> CS
  RO --> AI
  CC --> AI

  %% Historical Analysis
  OD --> AS
  PA --> AS
  AS --> FS
  FS --> PA

  %% Command & Control
  CC --> ER
  CC --> TM
  CC --> RO

  %% Public Services
  CS --> AI
  AI --> EM

  classDef sensors fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef operations fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef services fill:#E8A87C,stroke:#333
  classDef collection fill:#95DAC1,stroke:#333

  class SNL sensors
  class ROL operations
  class DML storage
  class SIL services
  class DC,DV collection"#,
};
