use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::ForceGraphState;
use super::types::{GraphData, Selection};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Clone, Debug, PartialEq)]
struct Tooltip {
	x: f64,
	y: f64,
	text: String,
}

/// Force-directed canvas. Drag nodes to pin them, drag the background to pan,
/// scroll or use the buttons to zoom, click a node or edge to select it.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = 600.0)] height: f64,
	#[prop(optional, into)] on_select: Option<Callback<Selection>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let stopped = Arc::new(AtomicBool::new(false));
	let tooltip = RwSignal::new(None::<Tooltip>);

	let stop = stopped.clone();
	on_cleanup(move || stop.store(true, Ordering::Relaxed));

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let w = parent_width(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);
		*state_init.borrow_mut() = Some(ForceGraphState::new(&graph, w, height));

		// one frame loop per mounted canvas; new data only swaps the state
		if animate_init.borrow().is_some() {
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			log::warn!("canvas 2d context unavailable; graph not drawn");
			return;
		};
		let (state_anim, animate_inner, stopped) =
			(state_init.clone(), animate_init.clone(), stopped.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if release_if_stopped(&stopped, &animate_inner) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.animation_running {
					s.tick(0.016);
				}
				render::render(s, &ctx);
			}
			request_frame(&animate_inner);
		}));
		request_frame(&animate_init);
	});

	let state_rs = state.clone();
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let w = parent_width(&canvas);
		canvas.set_width(w as u32);
		if let Some(ref mut s) = *state_rs.borrow_mut() {
			s.resize(w, s.height);
		}
	});
	on_cleanup(move || resize.remove());

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.press(x, y);
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				if let Some((nx, ny)) = s.position(idx) {
					s.drag.node_start_x = nx as f32;
					s.drag.node_start_y = ny as f32;
				}
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.track_press(x, y);

			if !s.drag.active && !s.pan.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				let tip = hovered
					.and_then(|idx| s.tooltip_for(idx))
					.map(|text| Tooltip {
						x,
						y,
						text: text.to_string(),
					});
				if tooltip.with_untracked(|current| current != &tip) {
					tooltip.set(tip);
				}
			}

			if s.drag.active && s.press.moved {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let selection = {
			let mut guard = state_mu.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			let clicked = s.release();
			match pointer(canvas_ref, &ev) {
				Some((x, y)) if clicked => s.selection_at(x, y),
				_ => None,
			}
		};
		if let (Some(selection), Some(callback)) = (selection, on_select.as_ref()) {
			callback.run(selection);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.release();
			s.set_hover(None);
		}
		tooltip.set(None);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	let (state_zi, state_zo) = (state.clone(), state.clone());
	let zoom_in = move |_| {
		if let Some(ref mut s) = *state_zi.borrow_mut() {
			s.zoom_center(1.2);
		}
	};
	let zoom_out = move |_| {
		if let Some(ref mut s) = *state_zo.borrow_mut() {
			s.zoom_center(1.0 / 1.2);
		}
	};

	view! {
		<div class="force-graph" style=format!("height: {height}px;")>
			<canvas
				node_ref=canvas_ref
				class=move || {
					if tooltip.with(Option::is_some) {
						"force-graph-canvas is-hovering"
					} else {
						"force-graph-canvas"
					}
				}
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
			/>
			{move || {
				data.with(GraphData::is_empty)
					.then(|| view! { <div class="graph-empty">"No data available"</div> })
			}}
			{move || {
				tooltip
					.get()
					.map(|tip| {
						view! {
							<pre
								class="graph-tooltip"
								style=format!("left: {}px; top: {}px;", tip.x + 12.0, tip.y + 12.0)
							>
								{tip.text}
							</pre>
						}
					})
			}}
			<div class="graph-zoom">
				<button type="button" aria-label="Zoom in" on:click=zoom_in>"+"</button>
				<button type="button" aria-label="Zoom out" on:click=zoom_out>"−"</button>
			</div>
		</div>
	}
}

/// After unmount, empties the slot holding the frame callback. The callback
/// owns a clone of its own slot, so this is what lets it and the graph state
/// be freed. wasm-bindgen defers the free until the running call returns.
fn release_if_stopped<T>(stopped: &AtomicBool, slot: &RefCell<Option<T>>) -> bool {
	if !stopped.load(Ordering::Relaxed) {
		return false;
	}
	drop(slot.borrow_mut().take());
	true
}

fn request_frame(callback: &FrameCallback) {
	if let (Some(window), Some(cb)) = (web_sys::window(), callback.borrow().as_ref()) {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

fn parent_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0)
}

fn pointer(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stopped_loop_releases_its_own_slot() {
		let slot: Rc<RefCell<Option<Rc<()>>>> = Rc::new(RefCell::new(None));
		let captured = Rc::new(());
		// stands in for the callback holding a clone of its slot
		*slot.borrow_mut() = Some(captured.clone());
		let stopped = AtomicBool::new(false);

		assert!(!release_if_stopped(&stopped, &slot));
		assert_eq!(Rc::strong_count(&captured), 2);

		stopped.store(true, Ordering::Relaxed);
		assert!(release_if_stopped(&stopped, &slot));
		assert!(slot.borrow().is_none());
		assert_eq!(Rc::strong_count(&captured), 1);
	}
}
