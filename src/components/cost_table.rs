//! Ranked cost options, as cards (per-region) or a table (per-path).

use leptos::prelude::*;

use crate::analysis::cost::{format_currency, rank};
use crate::api::models::{CostRecord, PathCostRecord};

/// Region cost options as cards, cheapest first and marked "Recommended".
///
/// Renders nothing at all when there are no records.
#[component]
pub fn CostCards(#[prop(optional, into)] records: Option<Vec<CostRecord>>) -> impl IntoView {
	let records = rank(records.unwrap_or_default());
	(!records.is_empty()).then(move || {
		view! {
			<section class="cost-cards">
				<h3>"Regional Cost Options"</h3>
				<div class="cost-card-grid">
					{records
						.into_iter()
						.enumerate()
						.map(|(index, record)| view! { <CostCard record=record recommended=index == 0 /> })
						.collect_view()}
				</div>
			</section>
		}
	})
}

#[component]
fn CostCard(record: CostRecord, recommended: bool) -> impl IntoView {
	let breakdown: Vec<_> = record
		.breakdown()
		.map(|(service, cost)| (service.to_string(), format_currency(cost)))
		.collect();

	view! {
		<article class="cost-card" class:recommended=recommended>
			<header class="cost-card-header">
				<h4>{record.region}</h4>
				{recommended.then(|| view! { <span class="badge">"Recommended"</span> })}
			</header>
			<p class="cost-total">{format_currency(record.total_cost)}</p>
			<ul class="cost-breakdown">
				{breakdown
					.into_iter()
					.map(|(service, cost)| {
						view! {
							<li>
								<span>{service}</span>
								<span class="amount">{cost}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</article>
	}
}

/// Shortest-path options as a table; the cheapest row is starred.
///
/// Renders nothing at all when there are no paths.
#[component]
pub fn CostComparisonTable(
	#[prop(optional, into)] paths: Option<Vec<PathCostRecord>>,
) -> impl IntoView {
	let paths = rank(paths.unwrap_or_default());
	(!paths.is_empty()).then(move || {
		view! {
			<section class="cost-table">
				<h3>"Infrastructure Cost Optimization Paths"</h3>
				<div class="table-scroll">
					<table>
						<thead>
							<tr>
								<th>"Infrastructure Component"</th>
								<th>"Configuration"</th>
								<th>"Location"</th>
								<th>"Component Cost"</th>
								<th class="numeric">"Total Cost"</th>
							</tr>
						</thead>
						<tbody>
							{paths
								.into_iter()
								.enumerate()
								.map(|(index, path)| view! { <PathRow path=path lowest=index == 0 /> })
								.collect_view()}
						</tbody>
					</table>
				</div>
				<p class="footnote">
					"★ Recommended option is highlighted and represents the most cost-effective infrastructure configuration"
				</p>
			</section>
		}
	})
}

#[component]
fn PathRow(path: PathCostRecord, lowest: bool) -> impl IntoView {
	let text = |value: Option<String>| value.unwrap_or_default();
	let other = format_currency(path.other_costs());

	view! {
		<tr class:lowest=lowest>
			<td>
				<strong>{text(path.compute_service)}</strong>
				{lowest.then(|| view! { <span class="star">" ★"</span> })}
			</td>
			<td>
				<div>"Storage: " {text(path.storage_type)}</div>
				<div>"Network: " {text(path.network_type)}</div>
				<div>"Security: " {text(path.security)}</div>
			</td>
			<td>
				<div>"Region: " {text(path.region)}</div>
				<div>"Zone: " {text(path.availability_zone)}</div>
			</td>
			<td>
				<div>"Compute: " {format_currency(path.compute_cost)}</div>
				<div>"Storage: " {format_currency(path.storage_cost)}</div>
				<div>"Network: " {format_currency(path.network_cost)}</div>
				<div>"Other: " {other}</div>
			</td>
			<td class="numeric">
				<strong class="cost-total">{format_currency(path.total_cost)}</strong>
				{lowest.then(|| view! { <div class="lowest-note">"Lowest Cost Option"</div> })}
			</td>
		</tr>
	}
}
