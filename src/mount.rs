//! Nail geometry for the two mounting hardware types.
//!
//! Both formulas take the artwork's vertical centroid as an explicit input.
//! Where that centroid lies (and where the artwork's left edge sits) is
//! the arrangement strategy's job ([`crate::arrange`]); this module only
//! turns frame geometry into nail coordinates.

use crate::types::Mounting;

/// Nail height for an artwork whose vertical centroid is `centroid`.
///
/// - Wire: the centroid plus half the height gives the top of the frame;
///   the taut wire rests `wire_offset` below that; the nail sits
///   `hanger_offset` above the wire's resting point to absorb sag.
/// - D-ring: both nails go straight through the ring holes,
///   `vertical_offset` below the top of the frame.
///
/// ```
/// # use plumbline::mount::nail_height;
/// # use plumbline::types::Mounting;
/// let wire = Mounting::Wire { wire_offset: 10.0, hanger_offset: 2.5 };
/// // 150 + 70/2 - 10 + 2.5
/// assert_eq!(nail_height(&wire, 70.0, 150.0), 177.5);
///
/// let dring = Mounting::DRing { vertical_offset: 12.0, horizontal_offset: 5.0 };
/// // 150 + 70/2 - 12
/// assert_eq!(nail_height(&dring, 70.0, 150.0), 173.0);
/// ```
pub fn nail_height(mounting: &Mounting, height: f64, centroid: f64) -> f64 {
    match *mounting {
        Mounting::Wire {
            wire_offset,
            hanger_offset,
        } => centroid + height / 2.0 - wire_offset + hanger_offset,
        Mounting::DRing {
            vertical_offset, ..
        } => centroid + height / 2.0 - vertical_offset,
    }
}

/// X coordinates of the left and right D-ring nails for an artwork whose
/// left edge sits at `left_edge`.
///
/// The mounts are bilaterally symmetric: each nail is `horizontal_offset`
/// in from its side edge, so the pair is symmetric about the artwork's
/// horizontal center.
pub fn dring_nail_xs(left_edge: f64, width: f64, horizontal_offset: f64) -> (f64, f64) {
    (
        left_edge + horizontal_offset,
        left_edge + width - horizontal_offset,
    )
}
