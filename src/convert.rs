//! Unit conversion across a whole scene.
//!
//! Switching a scene between centimeters and inches is a uniform
//! multiply-and-round over every length-valued field: wall width, target
//! centroid, artwork dimensions, mounting offsets, and layout gaps.
//! `rows`/`cols` are counts, not lengths, and pass through untouched.
//!
//! A value that is exactly zero is preserved as zero: zero means "unset",
//! and an unset field must stay visually empty after a unit switch.

use crate::types::{Artwork, Layout, Mounting, Scene, Unit};

/// Convert one length by `factor`, rounding to one decimal place.
///
/// ```
/// # use plumbline::convert::convert_length;
/// // 10 in → 25.4 cm
/// assert_eq!(convert_length(10.0, 2.54), 25.4);
/// // unset stays unset
/// assert_eq!(convert_length(0.0, 2.54), 0.0);
/// ```
pub fn convert_length(value: f64, factor: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    round1(value * factor)
}

/// Round to one decimal place, the input-field step for both units.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Return a new scene with every length re-expressed in `target` units.
///
/// The returned scene carries `target` as its unit. When the scene is
/// already in `target`, it is returned unchanged (no re-rounding). The
/// input is never mutated.
pub fn convert_scene(scene: &Scene, target: Unit) -> Scene {
    if scene.units == target {
        return scene.clone();
    }
    let factor = scene.units.factor_to(target);
    Scene {
        units: target,
        wall_width: convert_length(scene.wall_width, factor),
        target_centroid: convert_length(scene.target_centroid, factor),
        arrangement: scene.arrangement,
        layout: Layout {
            rows: scene.layout.rows,
            cols: scene.layout.cols,
            horizontal_gap: convert_length(scene.layout.horizontal_gap, factor),
            vertical_gap: convert_length(scene.layout.vertical_gap, factor),
        },
        artworks: scene
            .artworks
            .iter()
            .map(|art| convert_artwork(art, factor))
            .collect(),
    }
}

fn convert_artwork(art: &Artwork, factor: f64) -> Artwork {
    Artwork {
        label: art.label.clone(),
        width: convert_length(art.width, factor),
        height: convert_length(art.height, factor),
        mounting: match art.mounting {
            Mounting::Wire {
                wire_offset,
                hanger_offset,
            } => Mounting::Wire {
                wire_offset: convert_length(wire_offset, factor),
                hanger_offset: convert_length(hanger_offset, factor),
            },
            Mounting::DRing {
                vertical_offset,
                horizontal_offset,
            } => Mounting::DRing {
                vertical_offset: convert_length(vertical_offset, factor),
                horizontal_offset: convert_length(horizontal_offset, factor),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{dring_artwork, wire_artwork};
    use crate::types::CM_PER_INCH;

    fn inches_scene() -> Scene {
        Scene {
            units: Unit::In,
            wall_width: 100.0,
            target_centroid: 60.0,
            layout: Layout {
                rows: 2,
                cols: 3,
                horizontal_gap: 4.0,
                vertical_gap: 6.0,
            },
            artworks: vec![
                wire_artwork(20.0, 28.0, 4.0, 1.0),
                dring_artwork(16.0, 24.0, 5.0, 2.0),
            ],
            ..Scene::default()
        }
    }

    // =========================================================================
    // convert_length
    // =========================================================================

    #[test]
    fn length_rounds_to_one_decimal() {
        // 50 cm → 19.685... in → 19.7
        assert_eq!(convert_length(50.0, 1.0 / CM_PER_INCH), 19.7);
    }

    #[test]
    fn zero_is_preserved_not_converted() {
        assert_eq!(convert_length(0.0, CM_PER_INCH), 0.0);
        assert_eq!(convert_length(0.0, 1.0 / CM_PER_INCH), 0.0);
    }

    #[test]
    fn round_trip_stays_within_rounding_tolerance() {
        for original in [0.5, 7.3, 50.0, 152.4, 400.0] {
            let inches = convert_length(original, 1.0 / CM_PER_INCH);
            let back = convert_length(inches, CM_PER_INCH);
            assert!(
                (back - original).abs() <= 0.15,
                "{original} cm → {inches} in → {back} cm drifted too far"
            );
        }
    }

    // =========================================================================
    // convert_scene
    // =========================================================================

    #[test]
    fn every_length_field_is_rescaled() {
        let converted = convert_scene(&inches_scene(), Unit::Cm);
        assert_eq!(converted.units, Unit::Cm);
        assert_eq!(converted.wall_width, 254.0);
        assert_eq!(converted.target_centroid, 152.4);
        assert_eq!(converted.layout.horizontal_gap, 10.2);
        assert_eq!(converted.layout.vertical_gap, 15.2);
        assert_eq!(converted.artworks[0].width, 50.8);
        assert_eq!(converted.artworks[0].height, 71.1);
        assert_eq!(
            converted.artworks[0].mounting,
            Mounting::Wire {
                wire_offset: 10.2,
                hanger_offset: 2.5
            }
        );
        assert_eq!(
            converted.artworks[1].mounting,
            Mounting::DRing {
                vertical_offset: 12.7,
                horizontal_offset: 5.1
            }
        );
    }

    #[test]
    fn counts_pass_through_untouched() {
        let converted = convert_scene(&inches_scene(), Unit::Cm);
        assert_eq!(converted.layout.rows, 2);
        assert_eq!(converted.layout.cols, 3);
    }

    #[test]
    fn same_unit_is_a_no_op() {
        let scene = inches_scene();
        assert_eq!(convert_scene(&scene, Unit::In), scene);
    }

    #[test]
    fn input_scene_is_not_mutated() {
        let scene = inches_scene();
        let snapshot = scene.clone();
        let _ = convert_scene(&scene, Unit::Cm);
        assert_eq!(scene, snapshot);
    }

    #[test]
    fn unset_fields_stay_unset_after_switch() {
        let mut scene = inches_scene();
        scene.wall_width = 0.0;
        scene.artworks[0].width = 0.0;
        let converted = convert_scene(&scene, Unit::Cm);
        assert_eq!(converted.wall_width, 0.0);
        assert_eq!(converted.artworks[0].width, 0.0);
    }
}
