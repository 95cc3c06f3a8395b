//! Placement packaging: rounding and derivation strings.
//!
//! Turns the raw output of [`crate::arrange`] into display-ready
//! [`Placement`] records: every length rounded to two decimals, plus one
//! "show your work" string each for the vertical and horizontal results.
//! The strings are generated text for people, not data: they stay
//! numerically consistent with the rounded values, but their phrasing is
//! free to change.

use crate::arrange::{self, RawPlacement};
use crate::types::{Artwork, Mounting, Nails, Placement, ReferenceEdge, Scene};

/// Compute the full placement list for a scene: arrange → report.
///
/// The engine's single entry point. Pure and synchronous: the scene is
/// only read, and every call recomputes from scratch.
pub fn plan(scene: &Scene) -> Vec<Placement> {
    report(scene, &arrange::arrange(scene))
}

/// Package raw placements into display records.
pub fn report(scene: &Scene, raw: &[RawPlacement]) -> Vec<Placement> {
    raw.iter()
        .map(|placement| {
            let art = &scene.artworks[placement.artwork];
            Placement {
                artwork: placement.artwork,
                cell: placement.cell,
                nail_height: round2(placement.nail_height),
                centroid: round2(placement.centroid),
                nails: round_nails(placement.nails),
                reference: placement.reference,
                vertical_steps: vertical_steps(art, placement),
                horizontal_steps: horizontal_steps(scene, art, placement),
            }
        })
        .collect()
}

/// Round to two decimal places, the display step for all results.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_nails(nails: Nails) -> Nails {
    match nails {
        Nails::Single { x } => Nails::Single { x: round2(x) },
        Nails::Pair { left, right } => Nails::Pair {
            left: round2(left),
            right: round2(right),
        },
    }
}

/// Format a length the way a person would write it: up to two decimals,
/// trailing zeros trimmed ("10", "2.54", "152.4").
pub(crate) fn fmt_len(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// The arithmetic behind the nail height, as entered into the formula.
fn vertical_steps(art: &Artwork, placement: &RawPlacement) -> String {
    let centroid = fmt_len(placement.centroid);
    let height = fmt_len(art.height);
    let nail = round2(placement.nail_height);
    match art.mounting {
        Mounting::Wire {
            wire_offset,
            hanger_offset,
        } => format!(
            "{centroid} + {height}/2 - {} + {} = {nail:.2}",
            fmt_len(wire_offset),
            fmt_len(hanger_offset)
        ),
        Mounting::DRing {
            vertical_offset, ..
        } => format!(
            "{centroid} + {height}/2 - {} = {nail:.2}",
            fmt_len(vertical_offset)
        ),
    }
}

/// The arithmetic behind the nail x coordinate(s).
///
/// Center-referenced placements derive from the wall midline; left-referenced
/// ones from the artwork's left edge as positioned by the strategy's cursor.
fn horizontal_steps(scene: &Scene, art: &Artwork, placement: &RawPlacement) -> String {
    let wall = fmt_len(scene.wall_width);
    let width = fmt_len(art.width);
    let edge = fmt_len(placement.left_edge);
    match (placement.reference, placement.nails) {
        (ReferenceEdge::Center, Nails::Single { x }) => {
            format!("{wall}/2 = {:.2}", round2(x))
        }
        (ReferenceEdge::Left, Nails::Single { x }) => {
            format!("{edge} + {width}/2 = {:.2}", round2(x))
        }
        (ReferenceEdge::Center, Nails::Pair { left, right }) => {
            let inset = fmt_len(dring_inset(art));
            format!(
                "left: ({wall} - {width})/2 + {inset} = {:.2}; right: ({wall} + {width})/2 - {inset} = {:.2}",
                round2(left),
                round2(right)
            )
        }
        (ReferenceEdge::Left, Nails::Pair { left, right }) => {
            let inset = fmt_len(dring_inset(art));
            format!(
                "left: {edge} + {inset} = {:.2}; right: {edge} + {width} - {inset} = {:.2}",
                round2(left),
                round2(right)
            )
        }
    }
}

fn dring_inset(art: &Artwork) -> f64 {
    match art.mounting {
        Mounting::DRing {
            horizontal_offset, ..
        } => horizontal_offset,
        Mounting::Wire { .. } => 0.0,
    }
}
