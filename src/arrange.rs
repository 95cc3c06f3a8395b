//! The four arrangement strategies.
//!
//! Pure dispatch on [`Arrangement`] to one algorithm each. Every strategy
//! derives a vertical centroid and a left edge for each artwork, then hands
//! off to [`crate::mount`] for the nail coordinates. Output is ordered by
//! artwork index (row-major for the custom grid).
//!
//! Coordinates follow the crate convention: x from the wall's left edge,
//! y as height above the floor. Larger y is higher, so cumulative stacking
//! proceeds *upward* from the first artwork: in vertical and grid modes the
//! first listed artwork hangs lowest.
//!
//! ## Cell alignment in the custom grid
//!
//! An artwork narrower or shorter than its column/row is aligned to the
//! cell's left edge and baseline, not centered within the cell. The stack
//! modes center each artwork individually; the grid does not. Both rules
//! are intentional and load-bearing.

use crate::mount;
use crate::types::{Arrangement, Artwork, GridCell, Mounting, Nails, ReferenceEdge, Scene};

/// One unrounded placement as produced by a strategy.
///
/// [`crate::report`] turns these into display-ready [`crate::types::Placement`]
/// records; tests assert exact arithmetic against the raw values here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlacement {
    /// Index into the scene's artwork list.
    pub artwork: usize,
    /// Grid position, custom-grid mode only.
    pub cell: Option<GridCell>,
    /// The artwork's vertical centroid.
    pub centroid: f64,
    /// Nail height above the floor.
    pub nail_height: f64,
    /// Nail x coordinate(s) from the wall's left edge.
    pub nails: Nails,
    /// Anchor the horizontal derivation used.
    pub reference: ReferenceEdge,
    /// X of the artwork's left edge (input to the horizontal derivation).
    pub left_edge: f64,
}

/// Compute raw placements for a scene.
///
/// Zero artworks yield an empty list in every mode. The scene is only read.
pub fn arrange(scene: &Scene) -> Vec<RawPlacement> {
    if scene.artworks.is_empty() {
        return Vec::new();
    }
    match scene.arrangement {
        Arrangement::Single => single(scene),
        Arrangement::Horizontal => horizontal_stack(scene),
        Arrangement::Vertical => vertical_stack(scene),
        Arrangement::Custom => custom_grid(scene),
    }
}

/// Build one placement from an artwork's derived centroid and left edge.
fn place_artwork(
    index: usize,
    art: &Artwork,
    centroid: f64,
    left_edge: f64,
    reference: ReferenceEdge,
    cell: Option<GridCell>,
) -> RawPlacement {
    let nails = match art.mounting {
        Mounting::Wire { .. } => Nails::Single {
            x: left_edge + art.width / 2.0,
        },
        Mounting::DRing {
            horizontal_offset, ..
        } => {
            let (left, right) = mount::dring_nail_xs(left_edge, art.width, horizontal_offset);
            Nails::Pair { left, right }
        }
    };
    RawPlacement {
        artwork: index,
        cell,
        centroid,
        nail_height: mount::nail_height(&art.mounting, art.height, centroid),
        nails,
        reference,
        left_edge,
    }
}

/// Left edge of an artwork centered on the wall's midline.
fn centered_left_edge(scene: &Scene, art: &Artwork) -> f64 {
    (scene.wall_width - art.width) / 2.0
}

/// One artwork, dead center: its centroid is the target directly.
fn single(scene: &Scene) -> Vec<RawPlacement> {
    let art = &scene.artworks[0];
    vec![place_artwork(
        0,
        art,
        scene.target_centroid,
        centered_left_edge(scene, art),
        ReferenceEdge::Center,
        None,
    )]
}

/// Left-to-right row. The artworks form one composite that is centered on
/// the wall; no vertical offsetting occurs, and every artwork's centroid is
/// the target.
fn horizontal_stack(scene: &Scene) -> Vec<RawPlacement> {
    let gap = scene.layout.horizontal_gap;
    let total_width: f64 = scene.artworks.iter().map(|a| a.width).sum::<f64>()
        + (scene.artworks.len() - 1) as f64 * gap;
    let start_x = (scene.wall_width - total_width) / 2.0;

    let mut x = start_x;
    let mut placements = Vec::with_capacity(scene.artworks.len());
    for (index, art) in scene.artworks.iter().enumerate() {
        placements.push(place_artwork(
            index,
            art,
            scene.target_centroid,
            x,
            ReferenceEdge::Left,
            None,
        ));
        x += art.width + gap;
    }
    placements
}

/// Bottom-to-top stack. The *stack's* centroid (not any single artwork's)
/// lands on the target: the whole group is shifted by
/// `target - total_height/2`. Horizontally each artwork is centered on the
/// wall independently, on its own width.
fn vertical_stack(scene: &Scene) -> Vec<RawPlacement> {
    let gap = scene.layout.vertical_gap;
    let total_height: f64 = scene.artworks.iter().map(|a| a.height).sum::<f64>()
        + (scene.artworks.len() - 1) as f64 * gap;
    let offset = scene.target_centroid - total_height / 2.0;

    let mut y = 0.0;
    let mut placements = Vec::with_capacity(scene.artworks.len());
    for (index, art) in scene.artworks.iter().enumerate() {
        placements.push(place_artwork(
            index,
            art,
            y + art.height / 2.0 + offset,
            centered_left_edge(scene, art),
            ReferenceEdge::Center,
            None,
        ));
        y += art.height + gap;
    }
    placements
}

/// Row-major `rows × cols` grid, truncated to `min(len, rows·cols)`.
///
/// Column width is the widest artwork in the column; row height the tallest
/// in the row. The grid is centered on the wall like the horizontal stack
/// and shifted onto the target like the vertical stack. Unoccupied trailing
/// rows/columns contribute zero size but still count toward the gap total.
fn custom_grid(scene: &Scene) -> Vec<RawPlacement> {
    let rows = scene.layout.rows.max(1) as usize;
    let cols = scene.layout.cols.max(1) as usize;
    let count = scene.artworks.len().min(rows * cols);
    let arts = &scene.artworks[..count];

    let mut col_widths = vec![0.0_f64; cols];
    let mut row_heights = vec![0.0_f64; rows];
    for (i, art) in arts.iter().enumerate() {
        let (row, col) = (i / cols, i % cols);
        col_widths[col] = col_widths[col].max(art.width);
        row_heights[row] = row_heights[row].max(art.height);
    }

    let h_gap = scene.layout.horizontal_gap;
    let v_gap = scene.layout.vertical_gap;
    let total_width = col_widths.iter().sum::<f64>() + (cols - 1) as f64 * h_gap;
    let total_height = row_heights.iter().sum::<f64>() + (rows - 1) as f64 * v_gap;
    let start_x = (scene.wall_width - total_width) / 2.0;
    let offset = scene.target_centroid - total_height / 2.0;

    let mut placements = Vec::with_capacity(count);
    for (i, art) in arts.iter().enumerate() {
        let (row, col) = (i / cols, i % cols);
        let cell_x = start_x + col_widths[..col].iter().sum::<f64>() + col as f64 * h_gap;
        let row_base = row_heights[..row].iter().sum::<f64>() + row as f64 * v_gap;
        placements.push(place_artwork(
            i,
            art,
            row_base + art.height / 2.0 + offset,
            cell_x,
            ReferenceEdge::Left,
            Some(GridCell {
                row: row as u32,
                col: col as u32,
            }),
        ));
    }
    placements
}
