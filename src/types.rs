//! Shared types for scenes and placements.
//!
//! A [`Scene`] is the full input to the placement engine: the wall, the
//! target centroid, the arrangement mode, and the list of artworks. A
//! [`Placement`] is one record of the engine's output. Both sides are
//! serde-derived: scenes load from `scene.toml`, placements serialize to
//! JSON for `plan --json`.
//!
//! ## Coordinate conventions
//!
//! All horizontal values are coordinates measured from the wall's left edge;
//! all vertical values are heights above the floor. A centered composition on
//! a wall of unknown width (`wall_width = 0`) therefore collapses around
//! zero and may produce negative x values, still well-defined and never NaN.

use serde::{Deserialize, Serialize};

/// Centimeters per inch, the only conversion constant in the system.
pub const CM_PER_INCH: f64 = 2.54;

/// Linear measurement unit for every length in a scene.
///
/// Affects input and display only. The placement math is unit-agnostic:
/// by the time a scene reaches the engine, every length is assumed to be in
/// one consistent unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Cm,
    In,
}

impl Unit {
    /// Multiplier that re-expresses a length of this unit in `target`.
    ///
    /// 2.54 for inches→cm, 1/2.54 for cm→inches, 1.0 when the units match.
    pub fn factor_to(self, target: Unit) -> f64 {
        match (self, target) {
            (Unit::In, Unit::Cm) => CM_PER_INCH,
            (Unit::Cm, Unit::In) => 1.0 / CM_PER_INCH,
            _ => 1.0,
        }
    }

    /// Display suffix ("cm" / "in").
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::In => "in",
        }
    }
}

/// Hanging hardware on the back of a frame.
///
/// Each variant carries only the measurements its nail formula reads, so
/// there is no "ignored field" state to reason about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mounting {
    /// A wire strung across the back, hung taut over a single nail.
    Wire {
        /// Distance from the frame's top edge down to the wire's resting
        /// point when the wire is pulled taut.
        #[serde(default)]
        wire_offset: f64,
        /// Extra height the nail sits above the wire's resting point, to
        /// account for wire sag.
        #[serde(default)]
        hanger_offset: f64,
    },
    /// A pair of bilaterally symmetric D-rings, one nail each.
    DRing {
        /// Distance from the frame's top edge down to each ring's hole.
        #[serde(default)]
        vertical_offset: f64,
        /// Distance from each side edge inward to its ring's hole.
        #[serde(default)]
        horizontal_offset: f64,
    },
}

impl Default for Mounting {
    fn default() -> Self {
        Mounting::Wire {
            wire_offset: 0.0,
            hanger_offset: 0.0,
        }
    }
}

/// One physical piece to hang.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Artwork {
    /// Display name used by CLI output. Never read by the math.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Frame width, non-negative, in the scene's active unit.
    pub width: f64,
    /// Frame height, non-negative, in the scene's active unit.
    pub height: f64,
    /// Hanging hardware geometry.
    pub mounting: Mounting,
}

/// Arrangement parameters shared across all artworks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Grid rows (custom grid only). Clamped to ≥ 1 at use.
    pub rows: u32,
    /// Grid columns (custom grid only). Clamped to ≥ 1 at use.
    pub cols: u32,
    /// Spacing between horizontally adjacent artwork edges.
    pub horizontal_gap: f64,
    /// Spacing between vertically adjacent artwork edges.
    pub vertical_gap: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            horizontal_gap: 0.0,
            vertical_gap: 0.0,
        }
    }
}

/// Which of the four layout algorithms places the artworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// One artwork, centered on the wall.
    #[default]
    Single,
    /// Left-to-right row sharing the target centroid.
    Horizontal,
    /// Bottom-to-top stack whose group centroid hits the target.
    Vertical,
    /// Row-major `rows × cols` grid centered on the wall and target.
    Custom,
}

/// The full input to the placement engine.
///
/// Owned and edited by the caller; the engine never mutates a scene and
/// recomputes every placement from scratch on each call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    /// Unit every length below is expressed in.
    pub units: Unit,
    /// Wall span, left edge to right edge. Zero means "unknown"; centering
    /// then collapses around zero.
    pub wall_width: f64,
    /// Desired height of the composition's visual center above the floor.
    pub target_centroid: f64,
    /// Layout algorithm.
    pub arrangement: Arrangement,
    /// Gap and grid parameters.
    pub layout: Layout,
    /// The pieces to hang, in placement order.
    pub artworks: Vec<Artwork>,
}

/// Which anchor a placement's horizontal derivation used.
///
/// Values are always coordinates from the wall's left edge; this records
/// whether they were derived from a left-edge cursor or from the wall's
/// centerline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceEdge {
    /// Built from a running left-edge cursor (horizontal stack, custom grid).
    Left,
    /// Centered on the wall midline (single, vertical stack).
    Center,
}

/// Nail x coordinates for one artwork: one nail for wire, a symmetric pair
/// for D-rings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nails {
    Single { x: f64 },
    Pair { left: f64, right: f64 },
}

/// Zero-based grid coordinates. Row 0 is the lowest row on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

/// One placement record: where the nail(s) for one artwork go, plus the
/// arithmetic that produced the numbers.
///
/// All lengths are rounded to two decimals for display; the derivation
/// strings ([`vertical_steps`](Self::vertical_steps),
/// [`horizontal_steps`](Self::horizontal_steps)) show the inputs and
/// operators behind the vertical and horizontal results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index into the scene's artwork list.
    pub artwork: usize,
    /// Grid position, custom-grid mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<GridCell>,
    /// Nail height above the floor (both nails for a D-ring pair).
    pub nail_height: f64,
    /// The artwork's vertical centroid this placement realizes.
    pub centroid: f64,
    /// Nail x coordinate(s) from the wall's left edge.
    pub nails: Nails,
    /// Anchor the horizontal derivation used.
    pub reference: ReferenceEdge,
    /// Human-readable arithmetic behind `nail_height`.
    pub vertical_steps: String,
    /// Human-readable arithmetic behind `nails`.
    pub horizontal_steps: String,
}
