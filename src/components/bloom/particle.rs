//! A single expanding, fading circle.

use super::render::DrawSurface;
use super::theme::Color;

/// Ticks a particle lives from spawn to removal.
pub const MAX_LIFETIME: i32 = 2000;
/// Radius growth per tick, unbounded.
pub const RADIUS_SPEED: f64 = 0.2;
/// Opacity lost per tick once past the lifetime midpoint.
pub const FADE_RATE: f64 = 0.01;

/// One circle in the bloom trail.
///
/// Position, radius, and opacity are mutated in place every tick; color and
/// velocity magnitude are fixed at creation (velocity signs flip on boundary
/// contact). The owning scene removes the particle once `lifetime` hits 0.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: Color,
	lifetime: i32,
}

impl Particle {
	/// Create a particle aimed at `(x, y)`, pulled inside the surface bounds
	/// so the disc starts fully visible.
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
		dx: f64,
		dy: f64,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			x: clamp_initial(x, radius, width),
			y: clamp_initial(y, radius, height),
			dx,
			dy,
			radius,
			opacity: 1.0,
			color,
			lifetime: MAX_LIFETIME,
		}
	}

	/// Remaining ticks before removal.
	pub fn lifetime(&self) -> i32 {
		self.lifetime
	}

	/// Draw the particle as a filled disc at its current opacity.
	pub fn draw(&self, surface: &mut impl DrawSurface) {
		if self.opacity < 0.0 {
			return;
		}
		surface.fill_circle(self.x, self.y, self.radius, self.color, self.opacity);
	}

	/// Advance one tick: age, grow, move, reflect off the bounds, fade.
	pub fn step(&mut self, width: f64, height: f64) {
		self.lifetime -= 1;
		self.radius += RADIUS_SPEED;
		self.x += self.dx;
		self.y += self.dy;

		if self.x + self.radius >= width || self.x - self.radius <= 0.0 {
			self.dx = -self.dx;
		}
		// Re-clamp every tick so the growing disc never pokes past a bound,
		// not only on the frame the velocity flips.
		if self.x + self.radius > width {
			self.x = width - self.radius;
		}
		if self.x - self.radius < 0.0 {
			self.x = self.radius;
		}

		if self.y + self.radius >= height || self.y - self.radius <= 0.0 {
			self.dy = -self.dy;
		}
		if self.y + self.radius > height {
			self.y = height - self.radius;
		}
		if self.y - self.radius < 0.0 {
			self.y = self.radius;
		}

		if self.lifetime < MAX_LIFETIME / 2 {
			self.opacity = (self.opacity - FADE_RATE).max(0.0);
		}
	}
}

/// Pull a spawn coordinate inside `[radius, extent - radius]`.
fn clamp_initial(target: f64, radius: f64, extent: f64) -> f64 {
	if target + radius > extent {
		return extent - radius;
	}
	if target - radius <= 0.0 {
		return radius;
	}
	target
}
