//! Bloom scene state and the per-frame tick.
//!
//! Everything the animation loop mutates lives here: the particle collection,
//! the tracked pointer, the run flag, and the palette/background selection.
//! The loop owns one `BloomState` and calls [`BloomState::tick`] once per
//! frame; input handlers call the small mutators in between frames.

use rand::Rng;
use rand::rngs::SmallRng;

use super::particle::Particle;
use super::render::DrawSurface;
use super::theme::{Color, PaletteManager};

/// Radius every particle spawns with.
pub const SPAWN_RADIUS: f64 = 10.0;
/// Velocity components are drawn uniformly from `[-VELOCITY_RANGE, VELOCITY_RANGE)`.
const VELOCITY_RANGE: f64 = 0.5;

/// Mutable state of the bloom scene.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop. The scene starts running; `toggle_running` is the single
/// source of truth for pause/resume, so the loop driver only ever acts on its
/// answer. The center anchor is fixed at creation and deliberately not
/// recomputed on resize; the label and the pointer-less spawn point keep
/// using the load-time center.
pub struct BloomState {
	pub particles: Vec<Particle>,
	pub running: bool,
	pub width: f64,
	pub height: f64,
	pointer: Option<(f64, f64)>,
	center: (f64, f64),
	palette: PaletteManager,
	background: Color,
	rng: SmallRng,
}

impl BloomState {
	pub fn new(width: f64, height: f64, mut rng: SmallRng) -> Self {
		let palette = PaletteManager::new(&mut rng);
		let background = PaletteManager::random_background(&mut rng);
		Self {
			particles: Vec::new(),
			// The loop starts automatically on load; the flag must already be
			// true before the first frame fires so a pause arriving ahead of
			// it cancels instead of scheduling a second loop.
			running: true,
			width,
			height,
			pointer: None,
			center: (width / 2.0, height / 2.0),
			palette,
			background,
			rng,
		}
	}

	/// Load-time center anchor (fallback spawn point and label position).
	pub fn center(&self) -> (f64, f64) {
		self.center
	}

	/// Current page background color.
	pub fn background(&self) -> Color {
		self.background
	}

	/// Index of the active particle palette.
	pub fn palette_index(&self) -> usize {
		self.palette.index()
	}

	/// Record the latest pointer position. Non-finite coordinates are dropped
	/// so a degenerate event cannot poison every later spawn.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if x.is_finite() && y.is_finite() {
			self.pointer = Some((x, y));
		}
	}

	/// Advance to the next particle palette and re-pick the background color.
	pub fn cycle_palette(&mut self) {
		self.palette.advance();
		self.background = PaletteManager::random_background(&mut self.rng);
		log::debug!(
			"canvas-bloom: palette {} background {}",
			self.palette.index(),
			self.background.to_css()
		);
	}

	/// Flip the run flag and report the driver's side of the toggle: `true`
	/// means a new frame must be scheduled, `false` means the pending frame
	/// must be cancelled. Flipping synchronously (rather than waiting for the
	/// next tick to run) keeps the flag honest even when no frame has fired
	/// yet, so repeated toggles alternate instead of stacking loops.
	pub fn toggle_running(&mut self) -> bool {
		self.running = !self.running;
		self.running
	}

	/// Track new surface dimensions. Existing particles and the center anchor
	/// are left untouched.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// One frame: clear, spawn one particle at the pointer (or the center
	/// anchor), draw and advance every particle in insertion order, drop the
	/// expired ones, draw the label overlay.
	pub fn tick(&mut self, surface: &mut impl DrawSurface) {
		self.running = true;
		if !(self.width > 0.0 && self.height > 0.0) {
			return;
		}

		surface.clear(self.width, self.height);

		let (x, y) = self.pointer.unwrap_or(self.center);
		let color = self.palette.particle_color(&mut self.rng);
		let dx = self.rng.gen_range(-VELOCITY_RANGE..VELOCITY_RANGE);
		let dy = self.rng.gen_range(-VELOCITY_RANGE..VELOCITY_RANGE);
		self.particles.push(Particle::new(
			x,
			y,
			SPAWN_RADIUS,
			color,
			dx,
			dy,
			self.width,
			self.height,
		));

		for particle in &mut self.particles {
			particle.draw(surface);
			particle.step(self.width, self.height);
		}
		self.particles.retain(|particle| particle.lifetime() > 0);

		surface.gradient_label(self.center.0, self.center.1);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::super::particle::MAX_LIFETIME;
	use super::super::render::test_support::RecordingSurface;
	use super::super::theme::BACKGROUND_COLORS;
	use super::*;

	fn state(width: f64, height: f64) -> BloomState {
		BloomState::new(width, height, SmallRng::seed_from_u64(42))
	}

	#[test]
	fn spawns_at_center_while_pointer_never_moved() {
		let mut scene = state(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		for _ in 0..5 {
			scene.tick(&mut surface);
			let newest = surface.circles.last().unwrap();
			assert_eq!((newest.x, newest.y), (400.0, 300.0));
		}
	}

	#[test]
	fn spawns_at_tracked_pointer() {
		let mut scene = state(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		scene.pointer_moved(120.0, 40.0);
		scene.tick(&mut surface);

		let newest = surface.circles.last().unwrap();
		assert_eq!((newest.x, newest.y), (120.0, 40.0));
		assert_eq!(newest.radius, SPAWN_RADIUS);
		assert_eq!(newest.alpha, 1.0);
	}

	#[test]
	fn non_finite_pointer_coordinates_are_ignored() {
		let mut scene = state(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		scene.pointer_moved(f64::NAN, 40.0);
		scene.pointer_moved(120.0, f64::INFINITY);
		scene.tick(&mut surface);

		let newest = surface.circles.last().unwrap();
		assert_eq!((newest.x, newest.y), (400.0, 300.0));
	}

	#[test]
	fn one_spawn_per_tick_and_removal_after_max_lifetime() {
		let mut scene = state(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		scene.tick(&mut surface);
		assert_eq!(scene.particles.len(), 1);

		// A particle is stepped on its spawn tick, so it is gone at the end
		// of its 2000th update and the population plateaus one below
		// MAX_LIFETIME.
		for _ in 1..MAX_LIFETIME as usize {
			scene.tick(&mut surface);
		}
		assert_eq!(scene.particles.len(), MAX_LIFETIME as usize - 1);

		scene.tick(&mut surface);
		assert_eq!(scene.particles.len(), MAX_LIFETIME as usize - 1);
	}

	#[test]
	fn tick_clears_then_draws_particles_and_label() {
		let mut scene = state(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		scene.tick(&mut surface);
		scene.tick(&mut surface);

		assert_eq!(surface.clears, 2);
		assert_eq!(surface.circles.len(), 2);
		assert_eq!(surface.labels, vec![(400.0, 300.0)]);
	}

	#[test]
	fn cycle_palette_wraps_and_resamples_background() {
		let mut scene = state(800.0, 600.0);
		let start = scene.palette_index();

		for step in 1..=6 {
			scene.cycle_palette();
			assert_eq!(
				scene.palette_index(),
				(start + step) % PaletteManager::palette_count()
			);
			assert!(BACKGROUND_COLORS.contains(&scene.background()));
		}
	}

	#[test]
	fn center_anchor_survives_resize() {
		let mut scene = state(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		scene.resize(1000.0, 1000.0);
		scene.tick(&mut surface);

		let newest = surface.circles.last().unwrap();
		assert_eq!((newest.x, newest.y), (400.0, 300.0));
		assert_eq!(surface.labels, vec![(400.0, 300.0)]);
		assert_eq!((scene.width, scene.height), (1000.0, 1000.0));
	}

	#[test]
	fn fresh_scene_is_running_so_the_first_toggle_pauses() {
		// A toggle can arrive before the first scheduled frame ever runs.
		// The flag must already be true so that toggle cancels the pending
		// frame rather than scheduling a second loop alongside it.
		let mut scene = state(800.0, 600.0);
		assert!(scene.running);
		assert!(!scene.toggle_running());
		assert!(!scene.running);
	}

	#[test]
	fn toggles_alternate_schedule_and_cancel() {
		// Two presses within one frame must net out to a single live loop:
		// pause (cancel), resume (schedule), never schedule twice in a row.
		let mut scene = state(800.0, 600.0);
		assert!(!scene.toggle_running());
		assert!(scene.toggle_running());
		assert!(!scene.toggle_running());
		assert!(scene.toggle_running());
		assert!(scene.running);
	}

	#[test]
	fn paused_scene_spawns_nothing_until_resumed() {
		let mut scene = state(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		scene.tick(&mut surface);
		assert_eq!(scene.particles.len(), 1);

		// Pause cancels the pending frame, so no tick runs and nothing is
		// spawned or redrawn until resume schedules a new one.
		assert!(!scene.toggle_running());
		assert_eq!(scene.particles.len(), 1);
		assert_eq!(surface.clears, 1);

		assert!(scene.toggle_running());
		scene.tick(&mut surface);
		assert_eq!(scene.particles.len(), 2);
		assert_eq!(surface.clears, 2);
		assert!(scene.running);
	}

	#[test]
	fn zero_area_surface_makes_tick_a_no_op() {
		let mut scene = state(0.0, 0.0);
		let mut surface = RecordingSurface::default();

		scene.tick(&mut surface);

		assert_eq!(surface.clears, 0);
		assert!(surface.circles.is_empty());
		assert!(surface.labels.is_empty());
		assert!(scene.particles.is_empty());
		assert!(scene.running);
	}
}
