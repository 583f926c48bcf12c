//! Pointer-following bloom effect.
//!
//! Renders a trail of expanding, fading circles on a full-window HTML canvas:
//! - One circle spawns per frame at the pointer (or the load-time center)
//! - Circles grow, drift, reflect off the window edges, and fade out over a
//!   fixed lifetime
//! - Clicking cycles the color palette and re-picks the page background
//! - Space pauses and resumes the animation
//!
//! The scene logic (`BloomState`) draws through the `DrawSurface` trait so it
//! can be driven headlessly in tests.

mod component;
mod particle;
mod render;
mod state;
pub mod theme;

pub use component::BloomCanvas;
pub use theme::Color;
