//! 3D positions of pixels on the tree and the per-pixel data spatial patterns derive from them.
//!
//! Coordinates come from photographing the lit tree from four sides (see `cargo xtask
//! positions`). `y` is height, `0` at the bottom and roughly `1000` at the top; `x` and `z`
//! are horizontal offsets from the trunk axis, roughly `-500..=500`.
//!
//! [`POSITIONS`] is generated at build time from `data/positions.csv`, one `x,y,z` row per
//! pixel in strip order. Its length is the tree's pixel count, [`TREE_LEN`](crate::TREE_LEN).

/// A pixel's position on the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, defmt::Format)]
pub struct Position {
    /// Left-right offset from the trunk, as seen from the front.
    pub x: i16,
    /// Height above the bottom of the tree.
    pub y: i16,
    /// Front-back offset from the trunk.
    pub z: i16,
}

impl Position {
    /// Creates a position from its three coordinates.
    #[must_use]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Angle around the trunk in radians, `atan2(x, z)`, in `-π..=π`.
    #[must_use]
    pub fn angle(self) -> f32 {
        libm::atan2f(f32::from(self.x), f32::from(self.z))
    }
}

include!(concat!(env!("OUT_DIR"), "/positions.rs"));

const LINEAR_HEIGHT: usize = 1000;

/// Pixel positions for a string of `N` LEDs plus the per-pixel spin angles derived from them.
///
/// Built once at startup and then only read; patterns index it with the same pixel index
/// they write, so it always has exactly one entry per pixel.
///
/// ```
/// use christmas_lights::layout::{Layout, Position};
///
/// let layout = Layout::new(&[Position::new(0, 0, 100), Position::new(100, 500, 0)]);
/// assert_eq!(layout.positions()[1].y, 500);
/// assert!(layout.angles()[0].abs() < 1e-6);
/// assert!((layout.angles()[1] - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct Layout<const N: usize> {
    positions: [Position; N],
    angles: [f32; N],
}

impl<const N: usize> Layout<N> {
    /// Takes a copy of `positions` and precomputes each pixel's angle around the trunk.
    #[must_use]
    pub fn new(positions: &[Position; N]) -> Self {
        Self {
            positions: *positions,
            angles: positions.map(Position::angle),
        }
    }

    /// A straight vertical line of `N` pixels from the bottom (index 0) to height 1000.
    ///
    /// For plain strips that only run index-based patterns.
    #[must_use]
    pub fn linear() -> Self {
        let mut positions = [Position::default(); N];
        for (index, position) in positions.iter_mut().enumerate() {
            // Below 1000 because index < N.
            let y = index.saturating_mul(LINEAR_HEIGHT).checked_div(N).unwrap_or_default();
            *position = Position::new(0, i16::try_from(y).unwrap_or(i16::MAX), 0);
        }
        Self::new(&positions)
    }

    /// All positions in strip order.
    #[must_use]
    pub const fn positions(&self) -> &[Position; N] {
        &self.positions
    }

    /// All precomputed angles in strip order.
    #[must_use]
    pub const fn angles(&self) -> &[f32; N] {
        &self.angles
    }
}

impl Layout<{ crate::TREE_LEN }> {
    /// The tree, built from [`POSITIONS`].
    #[must_use]
    pub fn tree() -> Self {
        Self::new(&POSITIONS)
    }
}
