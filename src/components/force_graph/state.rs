use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphData, NodeColor, NodeShape, Selection};

/// Node `size` to world-space radius.
const SIZE_TO_RADIUS: f64 = 0.4;
/// Extra world-space slack around a node outline for picking.
const HIT_SLACK: f64 = 4.0;
/// Screen-space distance to an edge that still counts as a hit.
const EDGE_HIT_PX: f64 = 5.0;
/// Pointer travel (px) below which a press counts as a click.
const CLICK_SLOP_PX: f64 = 3.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub data_idx: usize,
	pub label: String,
	pub color: NodeColor,
	pub shape: NodeShape,
	pub radius: f64,
}

#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub data_idx: usize,
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub source_radius: f64,
	pub target_radius: f64,
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Tracks whether the current press is still a click.
#[derive(Clone, Debug, Default)]
pub struct PressState {
	pub down: bool,
	pub moved: bool,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub data: GraphData,
	pub edges: Vec<EdgeInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub press: PressState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	positions: HashMap<DefaultNodeIdx, (f64, f64)>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 600.0,
			force_spring: 0.04,
			force_max: 200.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let spread = 60.0 + 12.0 * (data.nodes.len() as f64).sqrt();
			let (x, y) = ((spread * angle.cos()) as f32, (spread * angle.sin()) as f32);

			let radius = node.size * SIZE_TO_RADIUS;
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					data_idx: i,
					label: node.label.clone(),
					color: node.color,
					shape: node.shape,
					radius,
				},
			});
			id_to_idx.insert(node.id.clone(), (idx, radius));
		}

		for (i, link) in data.links.iter().enumerate() {
			if let (Some(&(src, src_r)), Some(&(tgt, tgt_r))) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push(EdgeInfo {
					data_idx: i,
					source: src,
					target: tgt,
					source_radius: src_r,
					target_radius: tgt_r,
					label: link.label.clone(),
				});
			}
		}

		let mut state = Self {
			graph,
			data: data.clone(),
			edges,
			// graph origin sits at the canvas centre
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			press: PressState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			positions: HashMap::new(),
		};
		state.sync_positions();
		state
	}

	fn sync_positions(&mut self) {
		let positions = &mut self.positions;
		positions.clear();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		self.positions.get(&idx).copied()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// hit area is world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_SLACK {
				found = Some(node.index());
			}
		});
		found
	}

	/// Index into `self.edges` of the edge nearest to the pointer, if close enough.
	pub fn edge_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let threshold = EDGE_HIT_PX / self.transform.k;

		self.edges
			.iter()
			.enumerate()
			.filter_map(|(i, edge)| {
				let (x1, y1) = self.position(edge.source)?;
				let (x2, y2) = self.position(edge.target)?;
				Some((i, distance_to_segment(gx, gy, x1, y1, x2, y2)))
			})
			.filter(|(_, d)| *d <= threshold)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// What a click at screen position `(sx, sy)` selects. Nodes win over edges.
	pub fn selection_at(&self, sx: f64, sy: f64) -> Option<Selection> {
		if let Some(idx) = self.node_at_position(sx, sy) {
			let mut data_idx = None;
			self.graph.visit_nodes(|node| {
				if node.index() == idx {
					data_idx = Some(node.data.user_data.data_idx);
				}
			});
			return data_idx
				.and_then(|i| self.data.nodes.get(i))
				.cloned()
				.map(Selection::Node);
		}
		self.edge_at_position(sx, sy)
			.and_then(|i| self.data.links.get(self.edges[i].data_idx))
			.cloned()
			.map(Selection::Edge)
	}

	/// Tooltip text of the node under the pointer.
	pub fn tooltip_for(&self, idx: DefaultNodeIdx) -> Option<&str> {
		let mut data_idx = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				data_idx = Some(node.data.user_data.data_idx);
			}
		});
		data_idx
			.and_then(|i| self.data.nodes.get(i))
			.map(|n| n.tooltip.as_str())
	}

	pub fn press(&mut self, x: f64, y: f64) {
		self.press = PressState {
			down: true,
			moved: false,
			x,
			y,
		};
	}

	pub fn track_press(&mut self, x: f64, y: f64) {
		if self.press.down && (x - self.press.x).hypot(y - self.press.y) > CLICK_SLOP_PX {
			self.press.moved = true;
		}
	}

	/// Ends the press; `true` when it never moved far enough to be a drag.
	pub fn release(&mut self) -> bool {
		let was_click = self.press.down && !self.press.moved;
		self.press = PressState::default();
		was_click
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the previous highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Zoom by `factor` keeping screen point `(cx, cy)` fixed.
	pub fn zoom_at(&mut self, cx: f64, cy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = cx - (cx - self.transform.x) * ratio;
		self.transform.y = cy - (cy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn zoom_center(&mut self, factor: f64) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, factor);
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.sync_positions();
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len_sq = dx * dx + dy * dy;
	if len_sq < f64::EPSILON {
		return (px - x1).hypot(py - y1);
	}
	let t = (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0);
	(px - (x1 + t * dx)).hypot(py - (y1 + t * dy))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::{GraphLink, GraphNode};

	const GRAY: NodeColor = NodeColor {
		background: "#eee",
		border: "#999",
		highlight_background: "#ddd",
		highlight_border: "#666",
	};

	fn node(id: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: id.to_uppercase(),
			tooltip: format!("{{\"name\":\"{id}\"}}"),
			group: None,
			shape: NodeShape::Dot,
			color: GRAY,
			size: 25.0,
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			id: format!("{source}->{target}"),
			source: source.into(),
			target: target.into(),
			label: "$1.00".into(),
			tooltip: "{\"cost\":1.0}".into(),
		}
	}

	fn pinned_state() -> ForceGraphState {
		let data = GraphData {
			nodes: vec![node("a"), node("b"), node("c")],
			links: vec![link("a", "b"), link("b", "c"), link("c", "missing")],
			regions: Vec::new(),
		};
		let mut state = ForceGraphState::new(&data, 400.0, 400.0);
		// lay the nodes on a horizontal line so picking is predictable
		let layout = [(-100.0, 0.0), (0.0, 0.0), (100.0, 100.0)];
		state.graph.visit_nodes_mut(|n| {
			let (x, y) = layout[n.data.user_data.data_idx];
			n.data.x = x;
			n.data.y = y;
			n.data.is_anchor = true;
		});
		state.sync_positions();
		state
	}

	#[test]
	fn links_to_unknown_nodes_are_skipped() {
		let state = pinned_state();
		assert_eq!(state.edges.len(), 2);
	}

	#[test]
	fn clicking_a_node_selects_it() {
		let state = pinned_state();
		// graph (-100, 0) is screen (100, 200) with the default transform
		match state.selection_at(102.0, 199.0) {
			Some(Selection::Node(n)) => assert_eq!(n.id, "a"),
			other => panic!("expected node a, got {other:?}"),
		}
	}

	#[test]
	fn clicking_between_nodes_selects_the_edge() {
		let state = pinned_state();
		match state.selection_at(150.0, 202.0) {
			Some(Selection::Edge(l)) => assert_eq!(l.id, "a->b"),
			other => panic!("expected edge a->b, got {other:?}"),
		}
		assert_eq!(state.selection_at(150.0, 260.0), None);
	}

	#[test]
	fn hover_collects_neighbors() {
		let mut state = pinned_state();
		let b = state.node_at_position(200.0, 200.0).unwrap();
		state.set_hover(Some(b));
		assert_eq!(state.hover.neighbors.len(), 2);
		assert_eq!(state.tooltip_for(b), Some("{\"name\":\"b\"}"));

		state.set_hover(None);
		assert_eq!(state.hover.prev_node, Some(b));
		assert!(state.is_highlighted(b));
	}

	#[test]
	fn press_release_distinguishes_click_from_drag() {
		let mut state = pinned_state();
		state.press(10.0, 10.0);
		state.track_press(11.0, 11.0);
		assert!(state.release());

		state.press(10.0, 10.0);
		state.track_press(30.0, 10.0);
		assert!(!state.release());
	}

	#[test]
	fn zoom_is_clamped_and_anchored() {
		let mut state = pinned_state();
		let before = state.screen_to_graph(50.0, 80.0);
		state.zoom_at(50.0, 80.0, 2.0);
		let after = state.screen_to_graph(50.0, 80.0);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);

		for _ in 0..50 {
			state.zoom_center(1.5);
		}
		assert_eq!(state.transform.k, MAX_ZOOM);
	}

	#[test]
	fn segment_distance_clamps_to_endpoints() {
		assert_eq!(distance_to_segment(0.0, 5.0, -10.0, 0.0, 10.0, 0.0), 5.0);
		assert_eq!(distance_to_segment(13.0, 4.0, -10.0, 0.0, 10.0, 0.0), 5.0);
		assert_eq!(distance_to_segment(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 5.0);
	}
}
