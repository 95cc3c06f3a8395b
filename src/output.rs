//! CLI output formatting.
//!
//! Information-first display, same contract for every entity: a header line
//! with positional index and label, then indented context lines (nail
//! coordinates, grid cell, derivation arithmetic). Each command has a
//! `format_*` function returning `Vec<String>` for testability and a
//! `print_*` wrapper that writes to stdout. Format functions are pure.
//!
//! ```text
//! Wall: 400 cm wide, target centroid 152.4 cm
//! Arrangement: horizontal stack, 2 artworks
//!
//! 001 Seascape (50 x 70 cm)
//!     Nail: 179.94 cm up, 100.00 cm from the left edge
//!     Vertical: 152.4 + 70/2 - 10 + 2.54 = 179.94
//!     Horizontal: 200/2 = 100.00
//! ```

use crate::report::fmt_len;
use crate::types::{Arrangement, Artwork, Mounting, Nails, Placement, ReferenceEdge, Scene, Unit};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header line: index + label, dimensions as context.
///
/// ```text
/// 001 Seascape (50 x 70 cm)
/// 002 (40 x 60 cm)          // unlabeled: dimensions ARE the identity
/// ```
fn artwork_header(index: usize, art: &Artwork, unit: Unit) -> String {
    let dims = format!("{} x {} {}", fmt_len(art.width), fmt_len(art.height), unit.suffix());
    match art.label.as_deref() {
        Some(label) if !label.is_empty() => format!("{} {} ({})", format_index(index), label, dims),
        _ => format!("{} ({})", format_index(index), dims),
    }
}

/// Human label for the active arrangement, with grid shape where relevant.
fn arrangement_label(scene: &Scene) -> String {
    match scene.arrangement {
        Arrangement::Single => "single".to_string(),
        Arrangement::Horizontal => "horizontal stack".to_string(),
        Arrangement::Vertical => "vertical stack".to_string(),
        Arrangement::Custom => format!(
            "custom grid ({} x {})",
            scene.layout.rows.max(1),
            scene.layout.cols.max(1)
        ),
    }
}

fn scene_summary(scene: &Scene) -> Vec<String> {
    let unit = scene.units.suffix();
    vec![
        format!(
            "Wall: {} {} wide, target centroid {} {}",
            fmt_len(scene.wall_width),
            unit,
            fmt_len(scene.target_centroid),
            unit
        ),
        format!(
            "Arrangement: {}, {} artwork{}",
            arrangement_label(scene),
            scene.artworks.len(),
            if scene.artworks.len() == 1 { "" } else { "s" }
        ),
    ]
}

fn reference_note(reference: ReferenceEdge) -> &'static str {
    match reference {
        ReferenceEdge::Left => "",
        ReferenceEdge::Center => " (wall-centered)",
    }
}

// ============================================================================
// plan output
// ============================================================================

/// Format the placement list for display.
pub fn format_plan_output(scene: &Scene, placements: &[Placement]) -> Vec<String> {
    let mut lines = scene_summary(scene);
    lines.push(String::new());

    if placements.is_empty() {
        lines.push("No artworks to place".to_string());
        return lines;
    }

    let unit = scene.units.suffix();
    for placement in placements {
        let art = &scene.artworks[placement.artwork];
        lines.push(artwork_header(placement.artwork + 1, art, scene.units));

        if let Some(cell) = placement.cell {
            lines.push(format!(
                "    Cell: row {}, col {}",
                cell.row + 1,
                cell.col + 1
            ));
        }

        match placement.nails {
            Nails::Single { x } => lines.push(format!(
                "    Nail: {:.2} {unit} up, {x:.2} {unit} from the left edge{}",
                placement.nail_height,
                reference_note(placement.reference)
            )),
            Nails::Pair { left, right } => lines.push(format!(
                "    Nails: {:.2} {unit} up; left {left:.2} {unit}, right {right:.2} {unit} from the left edge{}",
                placement.nail_height,
                reference_note(placement.reference)
            )),
        }
        lines.push(format!("    Centroid: {:.2} {unit}", placement.centroid));
        lines.push(format!("    Vertical: {}", placement.vertical_steps));
        lines.push(format!("    Horizontal: {}", placement.horizontal_steps));
    }
    lines
}

/// Print plan output to stdout.
pub fn print_plan_output(scene: &Scene, placements: &[Placement]) {
    for line in format_plan_output(scene, placements) {
        println!("{line}");
    }
}

// ============================================================================
// check output
// ============================================================================

/// Format a scene inventory without computing placements.
pub fn format_check_output(scene: &Scene) -> Vec<String> {
    let mut lines = scene_summary(scene);
    lines.push(String::new());

    let unit = scene.units.suffix();
    for (i, art) in scene.artworks.iter().enumerate() {
        lines.push(artwork_header(i + 1, art, scene.units));
        let mounting = match art.mounting {
            Mounting::Wire {
                wire_offset,
                hanger_offset,
            } => format!(
                "    Mounting: wire (offset {} {unit}, hanger {} {unit})",
                fmt_len(wire_offset),
                fmt_len(hanger_offset)
            ),
            Mounting::DRing {
                vertical_offset,
                horizontal_offset,
            } => format!(
                "    Mounting: d-ring (drop {} {unit}, inset {} {unit})",
                fmt_len(vertical_offset),
                fmt_len(horizontal_offset)
            ),
        };
        lines.push(mounting);
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(scene: &Scene) {
    for line in format_check_output(scene) {
        println!("{line}");
    }
}
