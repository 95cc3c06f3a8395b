//! # Plumbline
//!
//! A nail placement calculator for hanging framed artwork. Describe your
//! wall and artworks in a `scene.toml`, and plumbline computes where to
//! drive the nails so the composition's visual center lands exactly where
//! you want it, with the arithmetic shown so you can check the numbers
//! against your tape measure before picking up the hammer.
//!
//! # Architecture: A Pure Engine Behind a Thin Shell
//!
//! The whole system is one pure, synchronous computation:
//!
//! ```text
//! scene.toml → Scene ── arrange ──→ raw placements ── report ──→ Placement list
//!                         │
//!                       mount (nail formulas per hardware type)
//! ```
//!
//! The engine ([`report::plan`]) holds no state, never mutates its input,
//! and recomputes every placement from scratch on each call. There is no
//! caching and no incremental update; the computation is O(artworks) with
//! no I/O. The CLI is a thin shell that loads the scene, calls the
//! engine, and renders the result list.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared data model: `Scene`, `Artwork`, `Mounting`, `Placement` |
//! | [`convert`] | Unit switching: multiply-and-round over every length in a scene |
//! | [`mount`] | Nail geometry formulas for wire and D-ring hardware |
//! | [`arrange`] | The four layout strategies: single, horizontal, vertical, custom grid |
//! | [`report`] | Rounds results and generates the per-nail derivation strings |
//! | [`scene`] | `scene.toml` loading, validation, and the stock example scene |
//! | [`output`] | CLI display, information-first rendering of placements |
//!
//! # Design Decisions
//!
//! ## Hardware As a Tagged Union
//!
//! Wire and D-ring mounts need different measurements and different
//! formulas, so [`types::Mounting`] is a two-variant enum where each variant
//! carries only its own fields. There is no "this field is ignored for that
//! type" state to keep in your head.
//!
//! ## Strategies As a Closed Enum
//!
//! The four arrangements share no state and dispatch to one function each in
//! [`arrange`]. Nothing is dynamically extensible, so nothing is a trait
//! object.
//!
//! ## Coordinates
//!
//! X is measured from the wall's left edge, y is height above the floor.
//! Vertical stacking proceeds upward from the first artwork (the first
//! listed piece hangs lowest). A centered composition on a wall of unknown
//! width (`wall_width = 0`) collapses around zero rather than failing.
//!
//! ## Zero Means Unset
//!
//! Numeric input that is missing or invalid becomes 0 before it reaches the
//! engine, and the math is total over non-negative numbers: degenerate
//! geometry produces well-defined zero-valued placements, never NaN and
//! never an error. Unit conversion preserves exact zeros so unset fields
//! stay visually empty after a switch.

pub mod arrange;
pub mod convert;
pub mod mount;
pub mod output;
pub mod report;
pub mod scene;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
