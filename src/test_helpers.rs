//! Shared test constructors for the plumbline test suite.
//!
//! Unit tests build scenes constantly; these helpers keep them to one line
//! per artwork. All lengths are in the scene's unit (cm unless a test says
//! otherwise).

use crate::types::{Arrangement, Artwork, Mounting, Scene};

/// A wire-mounted artwork with no label.
pub fn wire_artwork(width: f64, height: f64, wire_offset: f64, hanger_offset: f64) -> Artwork {
    Artwork {
        label: None,
        width,
        height,
        mounting: Mounting::Wire {
            wire_offset,
            hanger_offset,
        },
    }
}

/// A D-ring-mounted artwork with no label.
pub fn dring_artwork(
    width: f64,
    height: f64,
    vertical_offset: f64,
    horizontal_offset: f64,
) -> Artwork {
    Artwork {
        label: None,
        width,
        height,
        mounting: Mounting::DRing {
            vertical_offset,
            horizontal_offset,
        },
    }
}

/// A scene with default layout (1x1 grid, zero gaps). Tests that need gaps
/// or a grid shape mutate `scene.layout` afterwards.
pub fn scene_with(
    arrangement: Arrangement,
    wall_width: f64,
    target_centroid: f64,
    artworks: Vec<Artwork>,
) -> Scene {
    Scene {
        wall_width,
        target_centroid,
        arrangement,
        artworks,
        ..Scene::default()
    }
}

/// Assert two lengths are equal up to float noise.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
