/// Outline drawn for a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeShape {
	#[default]
	/// Plain circle.
	Circle,
	/// Smaller filled circle.
	Dot,
	/// Six-sided, pointy top.
	Hexagon,
	/// Cylinder.
	Database,
	/// Square rotated 45 degrees.
	Diamond,
}

/// Fill and stroke colors, normal and highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeColor {
	/// Normal fill.
	pub background: &'static str,
	/// Normal stroke.
	pub border: &'static str,
	/// Fill while hovered.
	pub highlight_background: &'static str,
	/// Stroke while hovered.
	pub highlight_border: &'static str,
}

/// A node as the canvas draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique within one `GraphData`; links refer to it.
	pub id: String,
	/// Text under the shape.
	pub label: String,
	/// Hover text, also the source of the details dialog.
	pub tooltip: String,
	/// Region the node belongs to, if grouped.
	pub group: Option<String>,
	/// Outline drawn for the node.
	pub shape: NodeShape,
	/// Fill and stroke.
	pub color: NodeColor,
	/// Nominal size, scaled to a radius by the canvas.
	pub size: f64,
}

/// A directed edge between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Unique per link, even between the same endpoints.
	pub id: String,
	/// Id of the start node.
	pub source: String,
	/// Id of the end node.
	pub target: String,
	/// Text drawn at the midpoint; may span lines.
	pub label: String,
	/// Shown in the details dialog.
	pub tooltip: String,
}

/// Everything one canvas draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Drawn nodes.
	pub nodes: Vec<GraphNode>,
	/// Links whose endpoints are missing from `nodes` are skipped when drawn.
	pub links: Vec<GraphLink>,
	/// Distinct node groups in first-seen order.
	pub regions: Vec<String>,
}

impl GraphData {
	/// No nodes to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// What a click on the canvas picked.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
	/// A node was clicked.
	Node(GraphNode),
	/// A link was clicked.
	Edge(GraphLink),
}

impl Selection {
	/// Tooltip of the selected element.
	pub fn tooltip(&self) -> &str {
		match self {
			Self::Node(node) => &node.tooltip,
			Self::Edge(link) => &link.tooltip,
		}
	}
}
