use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "global-finance-data-processing",
	title: "Global Finance Data Processing Platform",
	badge: "🌍💰",
	summary: "This platform follows a structured approach to ensure efficient market data processing, real-time analytics, and robust compliance.",
	cost_profile: Some("Global Finance Data Processing Platform"),
	layers: &[
		Layer {
			title: "Market Data Layer",
			icon: "📊",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Data Feed Handlers",
					details: &[
						"Market Feed Processors (100K msg/sec)",
						"Normalization Engine (<10μs latency)",
						"Real-time Validation (99.999% accuracy)",
					],
				},
				Service {
					name: "Order Processing",
					details: &[
						"Order Book Management (1M orders/sec)",
						"Matching Engine (<100μs latency)",
						"Trade Processor (500K trades/sec)",
					],
				},
				Service {
					name: "Real-time Analytics",
					details: &[
						"Market Analysis (10ms updates)",
						"Price Calculation (5ms latency)",
						"Risk Analytics (50ms SLA)",
					],
				},
			],
		},
		Layer {
			title: "Processing Layer",
			icon: "⚙️",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Trading Engine",
					details: &[
						"Algorithm Processing (100K algo/sec)",
						"Position Management (real-time)",
						"Order Routing (<50μs latency)",
					],
				},
				Service {
					name: "Risk Engine",
					details: &[
						"Real-time Risk (100ms updates)",
						"Exposure Calculation (real-time)",
						"Compliance Checks (<1s SLA)",
					],
				},
				Service {
					name: "Analytics Engine",
					details: &[
						"Performance Analytics (5min updates)",
						"Portfolio Analysis (real-time)",
						"Market Analysis (1min updates)",
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
						"Market Data History (5PB)",
						"Price Series (2PB)",
						"Analytics History (3PB)",
					],
				},
				Service {
					name: "Transaction Store",
					details: &[
						"Order History (1PB)",
						"Trade Records (2PB)",
						"Position Data (500TB)",
					],
				},
				Service {
					name: "Analytics Store",
					details: &[
						"Risk Data (1PB)",
						"Performance Metrics (500TB)",
						"Compliance Data (1PB)",
					],
				},
			],
		},
		Layer {
			title: "Compliance & Security Layer",
			icon: "🔒",
			color: "#FEF9E8",
			services: &[
				Service {
					name: "Compliance Engine",
					details: &[
						"Rule Processing (1M rules)",
						"Audit Logging (100TB/day)",
						"Regulatory Reporting (hourly)",
					],
				},
				Service {
					name: "Security Services",
					details: &[
						"Authentication (<50ms)",
						"Authorization (<10ms)",
						"Encryption (AES-256)",
					],
				},
				Service {
					name: "Monitoring",
					details: &[
						"System Monitoring (real-time)",
						"Performance Tracking (1s updates)",
						"Alert Management (<1s)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph MD[Market Data Layer]
      MF[Market Feeds] --> FH[Feed Handlers]
      FH --> NE[Normalization Engine]
      NE --> RV[Real-time Validation]
  end

  subgraph PL[Processing Layer]
      TE[Trading Engine]
      RE[Risk Engine]
      AE[Analytics Engine]
  end

  subgraph DM[Data Management]
      TS[(Time Series Store)]
      TRS[(Transaction Store)]
      AS[(Analytics Store)]
  end

  subgraph CS[Compliance & Security]
      CE[Compliance Engine]
      SS[Security Services]
      MON[Monitoring]
  end

  %% Market Data Flow
  RV --> TE
  RV --> RE
  RV --> TS

  %% Processing Flow
  TE --> TRS
  TE --> RE
  RE --> AS
  RE --> CE

  %% Analytics Flow
  AE --> AS
  AE --> CE
  
  %% Compliance Flow
  CE --> MON
  SS --> MON

  %% Data Storage Flow
  TS --> AE
  TRS --> AE
  AS --> MON

  classDef layer fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef process fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef security fill:#E8A87C,stroke:#333

  class MD,PL,DM,CS layer
  class FH,NE,RV,TE,RE,AE process
  class TS,TRS,AS storage
  class CE,SS,MON security"#,
};
