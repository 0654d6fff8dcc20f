//! Viewport orientation and normalized map coordinates.

use std::fmt;

/// Device/viewport aspect state.
///
/// Derived externally (viewport aspect ratio) and treated as projection
/// input; the engine stores the latest value but never computes it.  Each
/// orientation selects a differently-rotated map asset and, per stop, an
/// independently calibrated anchor position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// The other orientation.
    #[inline]
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Landscape => Orientation::Portrait,
            Orientation::Portrait  => Orientation::Landscape,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait  => "portrait",
        };
        f.write_str(s)
    }
}

/// A position on the rendered map asset, as percent offsets from its
/// top-left corner.  Both axes are in `[0, 100]` for any in-bounds input.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}%, {:.1}%)", self.x, self.y)
    }
}
