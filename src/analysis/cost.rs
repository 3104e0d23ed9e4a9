//! Cost ranking and currency formatting.

use std::cmp::Ordering;

use crate::api::models::{CostRecord, PathCostRecord};

/// Something with a total cost that can be ranked.
pub trait Priced {
	/// Total cost in USD.
	fn total_cost(&self) -> f64;
}

impl Priced for CostRecord {
	fn total_cost(&self) -> f64 {
		self.total_cost
	}
}

impl Priced for PathCostRecord {
	fn total_cost(&self) -> f64 {
		self.total_cost
	}
}

/// Sort cheapest first. Equal totals keep their incoming order.
pub fn rank<T: Priced>(mut options: Vec<T>) -> Vec<T> {
	// `-0.0 == 0.0` must tie; totals are finite after decoding
	options.sort_by(|a, b| {
		a.total_cost()
			.partial_cmp(&b.total_cost())
			.unwrap_or(Ordering::Equal)
	});
	options
}

/// Edge label text: `$12.50`, or `$0.00` when the cost is unknown.
pub fn cost_label(cost: Option<f64>) -> String {
	format!("${:.2}", cost.filter(|c| c.is_finite()).unwrap_or(0.0))
}

/// US-dollar formatting with thousands separators.
///
/// Sub-cent amounts keep six fraction digits so per-request prices stay
/// readable; everything else uses two.
pub fn format_currency(value: f64) -> String {
	let value = if value.is_finite() { value } else { 0.0 };
	let digits = if value.abs() < 0.01 { 6 } else { 2 };
	let fixed = format!("{:.*}", digits, value.abs());
	let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

	let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
	for (i, digit) in whole.chars().enumerate() {
		if i > 0 && (whole.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}

	let sign = if value < 0.0 { "-" } else { "" };
	format!("{sign}${grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn option(region: &str, total: f64) -> CostRecord {
		CostRecord {
			region: region.into(),
			total_cost: total,
			..Default::default()
		}
	}

	#[test]
	fn rank_is_non_decreasing_and_stable() {
		let ranked = rank(vec![
			option("us-east-1", 120.0),
			option("eu-west-1", 80.0),
			option("ap-south-1", 120.0),
			option("us-west-2", 79.99),
		]);
		let order: Vec<_> = ranked.iter().map(|r| r.region.as_str()).collect();
		assert_eq!(order, ["us-west-2", "eu-west-1", "us-east-1", "ap-south-1"]);
		assert!(ranked.windows(2).all(|w| w[0].total_cost <= w[1].total_cost));
	}

	#[test]
	fn signed_zero_totals_tie() {
		let ranked = rank(vec![option("first", 0.0), option("second", -0.0)]);
		let order: Vec<_> = ranked.iter().map(|r| r.region.as_str()).collect();
		assert_eq!(order, ["first", "second"]);
	}

	#[test]
	fn rank_handles_empty_input() {
		assert!(rank(Vec::<CostRecord>::new()).is_empty());
	}

	#[test]
	fn missing_cost_labels_as_zero() {
		assert_eq!(cost_label(None), "$0.00");
		assert_eq!(cost_label(Some(f64::NAN)), "$0.00");
		assert_eq!(cost_label(Some(12.5)), "$12.50");
		assert_eq!(cost_label(Some(0.126)), "$0.13");
	}

	#[test]
	fn currency_groups_thousands() {
		assert_eq!(format_currency(1234.5), "$1,234.50");
		assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
		assert_eq!(format_currency(999.999), "$1,000.00");
		assert_eq!(format_currency(12.0), "$12.00");
	}

	#[test]
	fn currency_keeps_sub_cent_precision() {
		assert_eq!(format_currency(0.0042), "$0.004200");
		assert_eq!(format_currency(0.0), "$0.000000");
		assert_eq!(format_currency(f64::INFINITY), "$0.000000");
	}

	#[test]
	fn currency_prefixes_negative_amounts() {
		assert_eq!(format_currency(-1500.0), "-$1,500.00");
	}
}
