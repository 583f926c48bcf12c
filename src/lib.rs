//! canvas-bloom: a full-window canvas effect of expanding, fading circles
//! that trail the pointer, overlaid with a gradient text label.
//!
//! This crate is a WASM client-side application: `App` mounts a single
//! [`BloomCanvas`] component that owns the animation loop and all input
//! handling.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::bloom::BloomCanvas;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("canvas-bloom: logging initialized");
}

/// Main application component: meta tags plus the full-window bloom canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Itai's canvas" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<BloomCanvas />
	}
}
