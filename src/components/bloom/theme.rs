//! Color pools and palette cycling for the bloom effect.
//!
//! Two independent pools: page background colors (re-picked on every cycle
//! trigger) and particle palettes (an ordered list the cycle trigger walks
//! through, wrapping).

use rand::Rng;

/// RGB color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Background color pool, drawn from uniformly at startup and on each
/// palette cycle.
pub const BACKGROUND_COLORS: [Color; 10] = [
	Color::rgb(112, 108, 97),  // Stone
	Color::rgb(137, 158, 139), // Sage
	Color::rgb(153, 197, 181), // Eucalyptus
	Color::rgb(175, 236, 231), // Pale aqua
	Color::rgb(129, 244, 153), // Mint
	Color::rgb(146, 55, 77),   // Wine
	Color::rgb(140, 83, 131),  // Plum
	Color::rgb(74, 88, 153),   // Indigo
	Color::rgb(85, 156, 173),  // Teal
	Color::rgb(193, 178, 171), // Mushroom
];

/// Ordered particle palettes the cycle trigger walks through.
const PALETTES: [[Color; 5]; 3] = [
	// Meadow - soft greens into olive
	[
		Color::rgb(215, 242, 186),
		Color::rgb(189, 228, 168),
		Color::rgb(156, 198, 155),
		Color::rgb(121, 180, 169),
		Color::rgb(103, 111, 84),
	],
	// Autumn - cream through rust to cocoa
	[
		Color::rgb(201, 203, 163),
		Color::rgb(255, 225, 168),
		Color::rgb(226, 109, 92),
		Color::rgb(114, 61, 70),
		Color::rgb(71, 45, 48),
	],
	// Pastel - washed-out candy tones
	[
		Color::rgb(176, 242, 180),
		Color::rgb(186, 242, 233),
		Color::rgb(186, 215, 242),
		Color::rgb(242, 186, 201),
		Color::rgb(242, 226, 186),
	],
];

/// Tracks which particle palette is active and samples colors from the pools.
///
/// The palette index starts at a uniformly random position and wraps to 0
/// after the last palette on each `advance`. Particle colors are drawn
/// independently on every spawn from the *current* palette only.
#[derive(Clone, Debug)]
pub struct PaletteManager {
	index: usize,
}

impl PaletteManager {
	pub fn new(rng: &mut impl Rng) -> Self {
		Self {
			index: rng.gen_range(0..PALETTES.len()),
		}
	}

	/// Current palette index (wraps over `palette_count`).
	pub fn index(&self) -> usize {
		self.index
	}

	/// Number of palettes in the cycle.
	pub fn palette_count() -> usize {
		PALETTES.len()
	}

	/// Advance to the next palette, wrapping after the last.
	pub fn advance(&mut self) {
		self.index = (self.index + 1) % PALETTES.len();
	}

	/// Uniform draw from the current palette.
	pub fn particle_color(&self, rng: &mut impl Rng) -> Color {
		let palette = &PALETTES[self.index];
		palette[rng.gen_range(0..palette.len())]
	}

	/// Uniform draw from the background pool (independent of the palette index).
	pub fn random_background(rng: &mut impl Rng) -> Color {
		BACKGROUND_COLORS[rng.gen_range(0..BACKGROUND_COLORS.len())]
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn advance_wraps_after_last_palette() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut manager = PaletteManager::new(&mut rng);
		let start = manager.index();

		for step in 1..=PaletteManager::palette_count() {
			manager.advance();
			assert_eq!(
				manager.index(),
				(start + step) % PaletteManager::palette_count()
			);
		}
		assert_eq!(manager.index(), start);
	}

	#[test]
	fn particle_colors_come_from_current_palette() {
		let mut rng = SmallRng::seed_from_u64(2);
		let manager = PaletteManager::new(&mut rng);
		let palette = &PALETTES[manager.index()];

		for _ in 0..100 {
			let color = manager.particle_color(&mut rng);
			assert!(palette.contains(&color));
		}
	}

	#[test]
	fn backgrounds_come_from_background_pool() {
		let mut rng = SmallRng::seed_from_u64(3);
		for _ in 0..100 {
			let color = PaletteManager::random_background(&mut rng);
			assert!(BACKGROUND_COLORS.contains(&color));
		}
	}

	#[test]
	fn to_css_formats_hex() {
		assert_eq!(Color::rgb(112, 108, 97).to_css(), "#706c61");
		assert_eq!(Color::rgb(0, 255, 16).to_css(), "#00ff10");
	}
}
