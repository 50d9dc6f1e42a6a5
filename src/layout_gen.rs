//! Generated panel layouts for running without real hardware.

use tiles_core::{Layout, LayoutError, Panel};

/// `panel_count` panels on a triangular lattice, filled row by row.
///
/// Every panel's nearest neighbours sit exactly `spacing` away: odd rows are
/// shifted half a spacing and rows are `spacing * sqrt(3) / 2` apart. Ids
/// run from 1 in fill order.
pub fn lattice(panel_count: usize, spacing: f32) -> Result<Layout, LayoutError> {
    let width = (panel_count as f32).sqrt().ceil().max(1.0) as usize;
    let row_height = spacing * 3f32.sqrt() / 2.0;
    let panels = (0..panel_count)
        .map(|i| {
            let (row, col) = (i / width, i % width);
            let shift = if row % 2 == 1 { spacing / 2.0 } else { 0.0 };
            Panel::new(
                i as u32 + 1,
                col as f32 * spacing + shift,
                row as f32 * row_height,
            )
        })
        .collect();
    Layout::new(panels)
}

/// `panel_count` panels in a straight line, `spacing` apart.
pub fn strip(panel_count: usize, spacing: f32) -> Result<Layout, LayoutError> {
    let panels = (0..panel_count)
        .map(|i| Panel::new(i as u32 + 1, i as f32 * spacing, 0.0))
        .collect();
    Layout::new(panels)
}
