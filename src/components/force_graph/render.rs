use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NodeInfo};
use super::types::NodeShape;

const BACKGROUND: &str = "#f8fafc";
const EDGE_RGB: &str = "100, 116, 139";
const LABEL_COLOR: &str = "#2c3e50";
const FONT_FACE: &str = "Inter, system-ui, sans-serif";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (2.0 / k, 8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	for edge in &state.edges {
		let (Some((x1, y1)), Some((x2, y2))) =
			(state.position(edge.source), state.position(edge.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (r1, r2) = (edge.source_radius, edge.target_radius);

		let is_highlighted =
			state.is_highlighted(edge.source) && state.is_highlighted(edge.target);

		// t=0: every edge at base alpha; t=1: highlighted edges brighten, the rest dim
		let (edge_alpha, arrow_alpha, width) = if is_highlighted {
			(0.6 + 0.3 * t, 0.8 + 0.1 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.6 - 0.45 * t, 0.8 - 0.45 * t, line_width * (1.0 - 0.3 * t))
		};

		ctx.set_stroke_style_str(&format!("rgba({EDGE_RGB}, {edge_alpha})"));
		ctx.set_line_width(width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow_size), y2 - uy * (r2 + arrow_size));
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&format!("rgba({EDGE_RGB}, {arrow_alpha})"));
		let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if !edge.label.is_empty() {
			let alpha = if is_highlighted { 1.0 } else { 1.0 - 0.6 * t };
			draw_text_block(
				ctx,
				&edge.label,
				(x1 + x2) / 2.0,
				(y1 + y2) / 2.0,
				10.0 / k.max(0.5),
				&format!("rgba(71, 85, 105, {alpha})"),
			);
		}
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if has_highlight && state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let (alpha, radius) = (1.0 - 0.7 * t, info.radius * (1.0 - 0.15 * t));

		ctx.set_global_alpha(alpha);
		draw_shape(ctx, info, x, y, radius, false, k);
		ctx.set_global_alpha(1.0);
		draw_label(ctx, info, x, y, radius, alpha * 0.9, k);
	});

	if !has_highlight {
		return;
	}

	// highlighted nodes go on top
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if !state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let is_hovered = state.is_hovered(idx);
		let is_neighbor =
			state.hover.neighbors.contains(&idx) || state.hover.prev_neighbors.contains(&idx);

		let (radius, glow_radius) = if is_hovered {
			(info.radius * (1.0 + 0.2 * t), info.radius * (1.5 + 0.6 * t))
		} else if is_neighbor {
			(info.radius * (1.0 + 0.1 * t), info.radius * (1.3 + 0.3 * t))
		} else {
			(info.radius, 0.0)
		};

		if glow_radius > 0.0 && t > 0.01 {
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
				let alpha = if is_hovered { 0.35 * t } else { 0.2 * t };
				let _ = gradient.add_color_stop(0.0, &format!("rgba(59, 130, 246, {alpha})"));
				let _ = gradient
					.add_color_stop(0.6, &format!("rgba(147, 197, 253, {})", alpha * 0.3));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		draw_shape(ctx, info, x, y, radius, is_hovered && t > 0.01, k);
		draw_label(ctx, info, x, y, radius, 1.0, k);
	});
}

fn draw_shape(
	ctx: &CanvasRenderingContext2d,
	info: &NodeInfo,
	x: f64,
	y: f64,
	r: f64,
	highlighted: bool,
	k: f64,
) {
	let (fill, stroke) = if highlighted {
		(info.color.highlight_background, info.color.highlight_border)
	} else {
		(info.color.background, info.color.border)
	};

	ctx.begin_path();
	match info.shape {
		NodeShape::Circle | NodeShape::Dot => {
			let r = if info.shape == NodeShape::Dot { r * 0.7 } else { r };
			let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
		}
		NodeShape::Hexagon => {
			for i in 0..6 {
				let a = PI / 3.0 * i as f64 - PI / 2.0;
				let (px, py) = (x + r * a.cos(), y + r * a.sin());
				if i == 0 {
					ctx.move_to(px, py);
				} else {
					ctx.line_to(px, py);
				}
			}
			ctx.close_path();
		}
		NodeShape::Diamond => {
			ctx.move_to(x, y - r);
			ctx.line_to(x + r, y);
			ctx.line_to(x, y + r);
			ctx.line_to(x - r, y);
			ctx.close_path();
		}
		NodeShape::Database => {
			// cylinder: body plus top and bottom ellipses
			let (w, h, cap) = (r * 0.9, r, r * 0.3);
			ctx.move_to(x - w, y - h + cap);
			ctx.line_to(x - w, y + h - cap);
			let _ = ctx.ellipse_with_anticlockwise(x, y + h - cap, w, cap, 0.0, PI, 0.0, true);
			ctx.line_to(x + w, y - h + cap);
			let _ = ctx.ellipse(x, y - h + cap, w, cap, 0.0, 0.0, 2.0 * PI);
		}
	}
	ctx.set_fill_style_str(fill);
	ctx.fill();
	ctx.set_stroke_style_str(stroke);
	ctx.set_line_width(2.0 / k);
	ctx.stroke();
}

fn draw_label(
	ctx: &CanvasRenderingContext2d,
	info: &NodeInfo,
	x: f64,
	y: f64,
	radius: f64,
	alpha: f64,
	k: f64,
) {
	if info.label.is_empty() {
		return;
	}
	ctx.set_global_alpha(alpha);
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	ctx.set_fill_style_str(LABEL_COLOR);
	ctx.set_font(&format!("{}px {FONT_FACE}", 12.0 / k.max(0.5)));
	let _ = ctx.fill_text(&info.label, x, y + radius + 3.0 / k);
	ctx.set_global_alpha(1.0);
}

/// Multi-line text centred on `(x, y)` over a background box.
fn draw_text_block(
	ctx: &CanvasRenderingContext2d,
	text: &str,
	x: f64,
	y: f64,
	size: f64,
	color: &str,
) {
	let lines: Vec<&str> = text.lines().collect();
	let line_height = size * 1.2;
	ctx.set_font(&format!("{size}px {FONT_FACE}"));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	let width = lines
		.iter()
		.filter_map(|l| ctx.measure_text(l).ok())
		.map(|m| m.width())
		.fold(0.0, f64::max);
	let height = line_height * lines.len() as f64;
	let top = y - height / 2.0;

	ctx.set_fill_style_str("rgba(248, 250, 252, 0.85)");
	ctx.fill_rect(x - width / 2.0 - 2.0, top, width + 4.0, height);

	ctx.set_fill_style_str(color);
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, x, top + line_height * (i as f64 + 0.5));
	}
}
