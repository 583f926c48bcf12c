//! Drawing operations for the bloom scene.
//!
//! The scene draws through the [`DrawSurface`] trait so particle and timing
//! logic stays testable without a live canvas. [`CanvasSurface`] is the real
//! implementation over a 2D canvas context; tests substitute a recording
//! surface.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Text drawn over the particles every frame.
pub const LABEL_TEXT: &str = "Itai's canvas";
/// Canvas font shorthand for the label.
pub const LABEL_FONT: &str = "8vw 'Lobster'";
/// Fixed start point of the label's linear gradient.
const GRADIENT_ANCHOR: (f64, f64) = (400.0, 400.0);
/// Offset from the center anchor to the gradient's end point.
const GRADIENT_CENTER_OFFSET: f64 = 100.0;
/// Outline width around the label glyphs.
const LABEL_STROKE_WIDTH: f64 = 2.0;

/// Minimal drawing capability the render loop needs.
pub trait DrawSurface {
	/// Clear the whole surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Filled disc with `alpha` applied as global alpha.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);
	/// The static gradient-filled, black-stroked text label, horizontally
	/// centered on `center_x` with its baseline at `center_y`.
	fn gradient_label(&mut self, center_x: f64, center_y: f64);
}

/// [`DrawSurface`] over a live 2D canvas context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl DrawSurface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.ctx.begin_path();
		self.ctx.save();
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_fill_style_str(&color.to_css());
		let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		self.ctx.fill();
		self.ctx.restore();
	}

	fn gradient_label(&mut self, center_x: f64, center_y: f64) {
		let gradient = self.ctx.create_linear_gradient(
			GRADIENT_ANCHOR.0,
			GRADIENT_ANCHOR.1,
			center_x + GRADIENT_CENTER_OFFSET,
			center_y + GRADIENT_CENTER_OFFSET,
		);
		let _ = gradient.add_color_stop(0.0, "red");
		let _ = gradient.add_color_stop(1.0, "white");

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.set_font(LABEL_FONT);

		let text_width = self
			.ctx
			.measure_text(LABEL_TEXT)
			.map(|m| m.width())
			.unwrap_or(0.0);
		let text_x = center_x - text_width / 2.0;

		let _ = self.ctx.fill_text(LABEL_TEXT, text_x, center_y);
		self.ctx.set_stroke_style_str("black");
		self.ctx.set_line_width(LABEL_STROKE_WIDTH);
		let _ = self.ctx.stroke_text(LABEL_TEXT, text_x, center_y);
	}
}
