use super::{Layer, Pipeline, Service};

pub(super) const PIPELINE: Pipeline = Pipeline {
	slug: "healthcare-data-exchange",
	title: "Healthcare Data Exchange Platform",
	badge: "🏥🔄",
	summary: "The platform ensures secure data exchange, AI-driven analytics, and compliance with healthcare regulations.",
	cost_profile: None,
	layers: &[
		Layer {
			title: "Data Ingestion Layer",
			icon: "🔗",
			color: "#E8F0FE",
			services: &[
				Service {
					name: "EHR Integration",
					details: &[
						"HL7/FHIR Support (v4.0.1)",
						"DICOM Integration (50TB/day)",
						"Clinical Data (1M records/day)",
					],
				},
				Service {
					name: "Data Validation",
					details: &[
						"Schema Validation (real-time)",
						"Compliance Check (<100ms)",
						"Data Quality (99.99% accuracy)",
					],
				},
				Service {
					name: "Security Preprocessing",
					details: &[
						"PHI Detection (100% coverage)",
						"Encryption (AES-256)",
						"Access Logging (real-time)",
					],
				},
			],
		},
		Layer {
			title: "Processing & Analytics Layer",
			icon: "⚙️",
			color: "#EAF8E6",
			services: &[
				Service {
					name: "Medical Imaging",
					details: &[
						"Image Processing (8K resolution)",
						"AI Diagnostics (95% accuracy)",
						"Study Management (10TB/day)",
					],
				},
				Service {
					name: "Clinical Analytics",
					details: &[
						"Population Health (100M patients)",
						"Risk Analysis (real-time)",
						"Treatment Optimization (hourly)",
					],
				},
				Service {
					name: "Research Platform",
					details: &[
						"Data Anonymization (100%)",
						"Cohort Analysis (daily)",
						"Study Collaboration (1000+ users)",
					],
				},
			],
		},
		Layer {
			title: "Data Storage Layer",
			icon: "💾",
			color: "#F4EAFB",
			services: &[
				Service {
					name: "Clinical Data Store",
					details: &[
						"Patient Records (5PB)",
						"Treatment Data (2PB)",
						"Lab Results (1PB)",
					],
				},
				Service {
					name: "Imaging Store",
					details: &[
						"PACS Integration (10PB)",
						"Radiology Studies (5PB)",
						"AI Models (100TB)",
					],
				},
				Service {
					name: "Research Data Lake",
					details: &[
						"Anonymized Data (3PB)",
						"Study Results (1PB)",
						"Analytics Data (500TB)",
					],
				},
			],
		},
		Layer {
			title: "Security & Compliance Layer",
			icon: "🔐",
			color: "#FEF9E8",
			services: &[
				Service {
					name: "Access Control",
					details: &[
						"Role-Based Access (10K roles)",
						"Identity Management (1M users)",
						"Consent Management (real-time)",
					],
				},
				Service {
					name: "Compliance Engine",
					details: &[
						"HIPAA Monitoring (100%)",
						"Audit Trails (7 years)",
						"Policy Enforcement (real-time)",
					],
				},
				Service {
					name: "Security Operations",
					details: &[
						"Threat Detection (<1s)",
						"Encryption Management",
						"Incident Response (24/7)",
					],
				},
			],
		},
	],
	diagram: r#"flowchart TD
  subgraph IL[Ingestion Layer]
      EHR[EHR Systems] --> DV[Data Validation]
      PACS[PACS Systems] --> DV
      LAB[Lab Systems] --> DV
      DV --> PHI[PHI Detection]
      PHI --> SEC[Security Preprocessing]
  end

  subgraph PL[Processing Layer]
      IMG[Image Processing]
      CLA[Clinical Analytics]
      RES[Research Platform]
      ANO[Anonymization Engine]
  end

  subgraph SL[Storage Layer]
      CDS[(Clinical Data Store)]
      IMS[(Imaging Store)]
      RDL[(Research Data Lake)]
  end

  subgraph SCL[Security & Compliance]
      IAM[Identity & Access]
      AUD[Audit Logging]
      ENC[Encryption Service]
      COM[Compliance Monitor]
  end

  %% Ingestion Flow with Security Checks
  SEC --> |Encrypted|IAM
  IAM --> |Authorized|IMG
  IAM --> |Authorized|CLA
  IAM --> |Authorized|CDS
  
  %% Processing Flows
  IMG --> |Processed Images|IMS
  CLA --> |Analytics Results|CDS
  
  %% Research Flow
  CDS --> ANO
  IMS --> ANO
  ANO --> RDL
  RDL --> RES
  
  %% Security & Compliance Flows
  IAM --> |Access Logs|AUD
  ENC -.-> |Encryption Keys|SEC
  COM -.-> |Compliance Check|DV
  COM -.-> |Compliance Check|ANO
  AUD --> |Audit Trail|COM

  classDef ingestion fill:#f0f0f0,stroke:#333,stroke-width:2px
  classDef processing fill:#d4f1f4,stroke:#333
  classDef storage fill:#ffed99,stroke:#333
  classDef security fill:#E8A87C,stroke:#333
  classDef systems fill:#95DAC1,stroke:#333

  class IL,PL,SL,SCL ingestion
  class IMG,CLA,RES,ANO processing
  class CDS,IMS,RDL storage
  class IAM,AUD,ENC,COM security
  class EHR,PACS,LAB systems"#,
};
