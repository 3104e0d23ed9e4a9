use leptos::prelude::*;

use crate::components::formula::Formula;

struct Technique {
	title: &'static str,
	summary: &'static str,
	tex: &'static str,
	tint: &'static str,
}

const TECHNIQUES: &[Technique] = &[
	Technique {
		title: "🛤️ Shortest Path Algorithm",
		summary: "Determines the most cost-effective path between cloud resources.",
		tex: r"d(v) = \min_{u \in V} (d(u) + w(u, v))",
		tint: "#fbe9e7",
	},
	Technique {
		title: "🔄 Workload Partitioning",
		summary: "Optimizes workload distribution across cloud regions.",
		tex: r"W = \sum_{i=1}^{n} W_i, \quad \min \sum_{i=1}^{n} C(W_i)",
		tint: "#ede7f6",
	},
	Technique {
		title: "📈 Auto-Scaling with Markov Decision Process (MDP)",
		summary: "Dynamically adjusts cloud resources based on demand.",
		tex: r"P(s' | s, a) = \sum_{r} P(s' | s, a, r) P(r | s, a)",
		tint: "#e3f2fd",
	},
	Technique {
		title: "☁️ Multi-Cloud Optimization",
		summary: "Uses linear programming to determine the optimal cloud provider.",
		tex: r"\min \sum_{i} C_i x_i",
		tint: "#dcedc8",
	},
];

const CHALLENGES: &[(&str, &str, &str)] = &[
	("⚡", "Balancing", "resource utilization and costs"),
	("🌍", "Managing", "data transfer across regions"),
	("🏗", "Optimizing", "storage and compute placement"),
	("🔄", "Handling", "dynamic workload scaling"),
	("☁️", "Managing", "multi-cloud environments efficiently"),
];

const TAKEAWAYS: &[(&str, &str, &str)] = &[
	("📊", "Graph Modeling", "simplifies cloud resource relationships."),
	("🛤️", "Shortest Path Algorithms", "minimize resource allocation costs."),
	("📈", "Workload Partitioning", "balances cloud utilization effectively."),
	("☁️", "Multi-Cloud Optimization", "ensures cost-effective provider selection."),
];

fn emphasis_list(items: &'static [(&'static str, &'static str, &'static str)]) -> impl IntoView {
	view! {
		<ul>
			{items
				.iter()
				.map(|(icon, lead, rest)| view! { <li>{*icon} " " <b>{*lead}</b> " " {*rest}</li> })
				.collect_view()}
		</ul>
	}
}

/// Overview of the graph-based cost optimization approach.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<article class="page home">
			<h1 class="page-title">"📈 Cloud Cost Optimization Approach"</h1>

			<section class="panel" style="background: #f5f5f5;">
				<h2>"🔍 Introduction"</h2>
				<p>
					"Cloud computing has revolutionized how applications are deployed, but "
					<b>"cost optimization"</b>
					" remains a significant challenge. This approach introduces a "
					<b>"graph-based mathematical model"</b>
					" to make smarter cost-saving decisions for cloud infrastructure."
				</p>
			</section>

			<section>
				<h2>"🚀 Core Challenges in Cloud Cost Optimization"</h2>
				{emphasis_list(CHALLENGES)}
			</section>

			<section>
				<h2>"📊 Graph-Based Cloud Resource Modeling"</h2>
				<div class="panel" style="background: #e3f2fd;">
					<p>"The cloud infrastructure is represented as:"</p>
					<Formula tex="G = (V, E)" block=true />
					<p>"Where:"</p>
					<ul>
						<li><b>"Vertices (V):"</b> " Cloud resources (VMs, storage, networks)"</li>
						<li><b>"Edges (E):"</b> " Dependencies between resources"</li>
						<li><b>"Weights:"</b> " Cost associated with each resource link"</li>
					</ul>
				</div>
			</section>

			<section>
				<h2>"💰 Cloud Resource Cost Modeling"</h2>
				<div class="panel" style="background: #e8f5e9;">
					<p>"The " <b>"total resource cost"</b> " is calculated as:"</p>
					<Formula tex=r"C_r = C_{compute} + C_{storage} + C_{network}" block=true />
				</div>
			</section>

			<section>
				<h2>"🏆 Optimization Techniques & Their Mathematical Models"</h2>
				{TECHNIQUES
					.iter()
					.map(|t| {
						view! {
							<div class="panel technique" style=format!("background: {};", t.tint)>
								<h3>{t.title}</h3>
								<p>{t.summary}</p>
								<Formula tex=t.tex block=true />
							</div>
						}
					})
					.collect_view()}
			</section>

			<section>
				<h2>"🎯 Conclusion"</h2>
				<div class="panel" style="background: #fffde7;">
					<p>
						<b>"Cloud cost optimization"</b>
						" is a critical challenge in modern cloud infrastructures. The "
						<b>"Graph-Based Cloud Cost Optimization"</b>
						" approach provides a "
						<b>"powerful, data-driven framework"</b>
						" to manage cloud resources effectively while reducing unnecessary costs."
					</p>
					<p><b>"Key Takeaways:"</b></p>
					{emphasis_list(TAKEAWAYS)}
					<p class="centered">
						<b>"🚀 Implementing these optimization techniques will drive better cost savings and cloud efficiency."</b>
					</p>
				</div>
			</section>
		</article>
	}
}
