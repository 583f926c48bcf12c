//! Leptos component wrapping the bloom canvas.
//!
//! The component creates a full-window canvas element and wires up the input
//! signals: pointer moves feed the spawn point, clicks cycle the palette,
//! space pauses/resumes, and window resizes re-size the canvas bitmap. The
//! animation loop runs via `requestAnimationFrame`; each frame re-arms the
//! callback first (retaining the handle so pause can cancel it) and then runs
//! one scene tick.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window,
};

use super::render::CanvasSurface;
use super::state::BloomState;
use super::theme::Color;

/// Bundles scene state with the surface the animation loop draws to.
struct SceneContext {
	state: BloomState,
	surface: CanvasSurface,
}

/// Apply the current background color to the canvas element's CSS.
///
/// The canvas bitmap is cleared to transparent every frame; the visible
/// background comes from the element style, so a palette cycle only has to
/// touch this property.
fn apply_background(canvas: &HtmlCanvasElement, color: Color) {
	let _ = web_sys::HtmlElement::style(canvas.as_ref())
		.set_property("background-color", &color.to_css());
}

/// Renders the bloom effect on a viewport-filling canvas element.
///
/// The canvas sizes itself to the window on mount and tracks it on resize.
/// The animation starts immediately; pressing space toggles it.
#[component]
pub fn BloomCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let frame_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
	let (scene_init, animate_init, resize_cb_init, keydown_cb_init, frame_id_init) = (
		scene.clone(),
		animate.clone(),
		resize_cb.clone(),
		keydown_cb.clone(),
		frame_id.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let state = BloomState::new(w, h, SmallRng::from_entropy());
		apply_background(&canvas, state.background());

		*scene_init.borrow_mut() = Some(SceneContext {
			state,
			surface: CanvasSurface::new(ctx),
		});

		let (scene_resize, canvas_resize) = (scene_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *scene_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (scene_anim, animate_inner, frame_id_anim) = (
			scene_init.clone(),
			animate_init.clone(),
			frame_id_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Re-arm before ticking so pause can always cancel by handle.
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					*frame_id_anim.borrow_mut() = Some(id);
				}
			}
			if let Some(ref mut c) = *scene_anim.borrow_mut() {
				let SceneContext { state, surface } = c;
				state.tick(surface);
			}
		}));

		let (scene_kd, animate_kd, frame_id_kd) = (
			scene_init.clone(),
			animate_init.clone(),
			frame_id_init.clone(),
		);
		*keydown_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() != " " {
				return;
			}
			let win: Window = web_sys::window().unwrap();
			// The state decides pause-vs-resume; this closure only does the
			// frame bookkeeping for whichever side it answers.
			let resume = match *scene_kd.borrow_mut() {
				Some(ref mut c) => c.state.toggle_running(),
				None => return,
			};
			if resume {
				if let Some(ref cb) = *animate_kd.borrow() {
					if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						*frame_id_kd.borrow_mut() = Some(id);
					}
				}
			} else if let Some(id) = frame_id_kd.borrow_mut().take() {
				let _ = win.cancel_animation_frame(id);
			}
		}));
		if let Some(ref cb) = *keydown_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				*frame_id_init.borrow_mut() = Some(id);
			}
		}
	});

	let scene_mm = scene.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut c) = *scene_mm.borrow_mut() {
			c.state.pointer_moved(x, y);
		}
	};

	let scene_click = scene.clone();
	let on_click = move |_: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		if let Some(ref mut c) = *scene_click.borrow_mut() {
			c.state.cycle_palette();
			apply_background(&canvas, c.state.background());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="bloom-canvas"
			on:mousemove=on_mousemove
			on:click=on_click
			style="display: block;"
		/>
	}
}
