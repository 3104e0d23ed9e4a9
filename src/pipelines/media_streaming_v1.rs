use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "global-media-streaming-v1",
	title: "Global Media Streaming Platform (v1)",
	badge: "📡🌎",
	summary: "Platform follows a layered approach to ensure seamless content processing, efficient distribution, and robust analytics.",
	cost_profile: None,
	layers: &[
		Layer {
			title: "Content Processing Layer",
			icon: "📁",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "Ingestion Service",
					details: &[
						"Content Validation",
						"Metadata Extraction",
						"Quality Checks",
					],
				},
				Service {
					name: "Transcoding Service",
					details: &[
						"Multi-bitrate Encoding",
						"Format Conversion",
						"Quality Control",
					],
				},
				Service {
					name: "Asset Management",
					details: &[
						"Content Cataloging",
						"Version Control",
						"Rights Management",
					],
				},
			],
		},
		Layer {
			title: "Distribution Layer",
			icon: "📡",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "CDN Management",
					details: &[
						"Edge Caching",
						"Load Balancing",
						"Traffic Routing",
					],
				},
				Service {
					name: "Streaming Service",
					details: &[
						"Adaptive Streaming",
						"Protocol Support",
						"DRM Integration",
					],
				},
				Service {
					name: "Quality Management",
					details: &[
						"Quality Monitoring",
						"Bandwidth Optimization",
						"Error Recovery",
					],
				},
			],
		},
		Layer {
			title: "Data & Analytics Layer",
			icon: "📊",
			color: "#F4EAFB",
			services: &[
				Service {
					name: "Data Pipeline",
					details: &[
						"Event Collection",
						"Stream Processing",
						"Data Lake Integration",
					],
				},
				Service {
					name: "ML Services",
					details: &[
						"Recommendation Engine",
						"Content Analysis",
						"User Behavior Analysis",
					],
				},
				Service {
					name: "Analytics Platform",
					details: &[
						"Business Intelligence",
						"Performance Analytics",
						"Cost Analytics",
					],
				},
			],
		},
		Layer {
			title: "Platform Services Layer",
			icon: "⚙️",
			color: "#FEF9E8",
			services: &[
				Service {
					name: "Security Services",
					details: &[
						"Authentication",
						"Authorization",
						"Encryption",
					],
				},
				Service {
					name: "Operations Services",
					details: &[
						"Monitoring",
						"Logging",
						"Alerting",
					],
				},
				Service {
					name: "Infrastructure Services",
					details: &[
						"Auto-scaling",
						"Load Balancing",
						"Cost Optimization",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
    subgraph CP[Content Production Zone]
        CI[Content Ingestion] --> QC[Quality Check]
        QC --> TF[Transcode Farm]
        TF --> Asset[Asset Management]
        Asset --> PS[Primary Storage]
        PS --> Meta[Metadata Service]
    end
    subgraph DZ[Distribution Zones]
        subgraph EU[European Zone]
            EUCache[Edge Cache]
            EUStore[Regional Storage]
            EUStream[Streaming Servers]
        end
        
        subgraph APAC[Asia-Pacific Zone]
            APCache[Edge Cache]
            APStore[Regional Storage]
            APStream[Streaming Servers]
        end
        
        subgraph AM[Americas Zone]
            AMCache[Edge Cache]
            AMStore[Regional Storage]
            AMStream[Streaming Servers]
        end
    end
    subgraph AZ[Analytics Zone]
        Events[Event Collection] --> Stream[Stream Processing]
        Stream --> DL[Data Lake]
        DL --> ML[ML Training]
        DL --> AW[Analytics Warehouse]
        ML --> Rec[Recommendation Engine]
        AW --> BI[Business Intelligence]
    end
    %% Content Distribution Flows
    PS --> EUStore
    PS --> APStore
    PS --> AMStore
    
    EUStore --> EUCache
    APStore --> APCache
    AMStore --> AMCache
    
    EUCache --> EUStream
    APCache --> APStream
    AMCache --> AMStream
    
    %% Analytics Flows
    EUStream --> Events
    APStream --> Events
    AMStream --> Events
    
    %% Recommendation Flows
    Rec --> EUStream
    Rec --> APStream
    Rec --> AMStream
    %% Metadata Flows
    Meta --> EUStream
    Meta --> APStream
    Meta --> AMStream
    classDef zone fill:#f0f0f0,stroke:#333,stroke-width:2px
    classDef storage fill:#b5d3e7,stroke:#333
    classDef compute fill:#d3b5e7,stroke:#333
    classDef stream fill:#e7d3b5,stroke:#333
    class CP,DZ,AZ zone
    class PS,EUStore,APStore,AMStore,DL,AW storage
    class TF,ML,Rec,Stream compute
    class EUStream,APStream,AMStream stream"#,
};
