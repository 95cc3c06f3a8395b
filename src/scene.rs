//! Scene file loading.
//!
//! A scene is described declaratively in `scene.toml`: the wall, the target
//! centroid, the arrangement, and one `[[artworks]]` table per piece.
//! Files are sparse, since every field has a default (numeric fields default
//! to zero, meaning "unset"), and unknown keys are rejected to catch typos
//! early.
//!
//! ```toml
//! units = "cm"
//! wall_width = 400
//! target_centroid = 152.4
//! arrangement = "horizontal"
//!
//! [layout]
//! horizontal_gap = 8
//!
//! [[artworks]]
//! label = "Seascape"
//! width = 50
//! height = 70
//!
//! [artworks.mounting]
//! type = "wire"
//! wire_offset = 10
//! hanger_offset = 2.5
//! ```
//!
//! Validation is deliberately thin: the placement math is total over
//! non-negative numbers, so the only thing worth rejecting is a negative
//! length. Zeros pass: a zero-sized artwork produces well-defined
//! (zero-valued) placements, not an error.

use crate::types::{Mounting, Scene};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("scene validation error: {0}")]
    Validation(String),
}

/// Load and validate a scene file.
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    parse_scene(&fs::read_to_string(path)?)
}

/// Parse and validate scene TOML.
pub fn parse_scene(raw: &str) -> Result<Scene, SceneError> {
    let scene: Scene = toml::from_str(raw)?;
    validate(&scene)?;
    Ok(scene)
}

/// Serialize a scene back to TOML (used by `convert`).
pub fn to_toml(scene: &Scene) -> Result<String, SceneError> {
    Ok(toml::to_string_pretty(scene)?)
}

/// Reject values the placement math is not defined for.
pub fn validate(scene: &Scene) -> Result<(), SceneError> {
    ensure_non_negative(scene.wall_width, "wall_width")?;
    ensure_non_negative(scene.target_centroid, "target_centroid")?;
    ensure_non_negative(scene.layout.horizontal_gap, "layout.horizontal_gap")?;
    ensure_non_negative(scene.layout.vertical_gap, "layout.vertical_gap")?;
    for (i, art) in scene.artworks.iter().enumerate() {
        ensure_non_negative(art.width, &format!("artworks[{i}].width"))?;
        ensure_non_negative(art.height, &format!("artworks[{i}].height"))?;
        match art.mounting {
            Mounting::Wire {
                wire_offset,
                hanger_offset,
            } => {
                ensure_non_negative(wire_offset, &format!("artworks[{i}].mounting.wire_offset"))?;
                ensure_non_negative(
                    hanger_offset,
                    &format!("artworks[{i}].mounting.hanger_offset"),
                )?;
            }
            Mounting::DRing {
                vertical_offset,
                horizontal_offset,
            } => {
                ensure_non_negative(
                    vertical_offset,
                    &format!("artworks[{i}].mounting.vertical_offset"),
                )?;
                ensure_non_negative(
                    horizontal_offset,
                    &format!("artworks[{i}].mounting.horizontal_offset"),
                )?;
            }
        }
    }
    Ok(())
}

fn ensure_non_negative(value: f64, field: &str) -> Result<(), SceneError> {
    if value < 0.0 {
        return Err(SceneError::Validation(format!(
            "{field} must be non-negative (got {value})"
        )));
    }
    Ok(())
}

/// A documented example scene, printed by `plumbline gen-scene`.
pub fn stock_scene_toml() -> String {
    r#"# plumbline scene
# All lengths are in the unit named below. A value of 0 means "unset".

units = "cm"             # "cm" or "in"
wall_width = 400         # wall span, left edge to right edge
target_centroid = 152.4  # height of the composition's visual center (57 in / 145-155 cm is typical)
arrangement = "horizontal"  # single | horizontal | vertical | custom

[layout]
rows = 1                 # custom grid only
cols = 2                 # custom grid only
horizontal_gap = 8       # spacing between horizontally adjacent artworks
vertical_gap = 10        # spacing between vertically stacked artworks

# One [[artworks]] table per piece, in placement order.
# In vertical and custom arrangements the first artwork hangs lowest.

[[artworks]]
label = "Seascape"
width = 50
height = 70

[artworks.mounting]
type = "wire"
wire_offset = 10         # top edge down to the taut wire
hanger_offset = 2.5      # nail above the wire's resting point (sag)

[[artworks]]
label = "Portrait"
width = 40
height = 60

[artworks.mounting]
type = "dring"
vertical_offset = 12     # top edge down to each ring's hole
horizontal_offset = 5    # side edge in to each ring's hole
"#
    .to_string()
}
