use egui::{Pos2, Rect, Vec2};

use crate::models::settings::GridConfig;

fn snap(value: f32, cell: f32) -> f32 {
    (value / cell).round() * cell
}

/// Snap a drag transform to whole cells and keep the dragged block on the grid.
///
/// The lower bound keeps the block off the header row and row-label column;
/// the upper bound keeps it inside the container. When the bounds cross, the
/// upper bound wins.
pub fn snap_transform(
    grid: &GridConfig,
    transform: Vec2,
    container: Option<Rect>,
    dragged: Option<Rect>,
) -> Vec2 {
    let empty = Rect::from_min_max(Pos2::ZERO, Pos2::ZERO);
    let container = container.unwrap_or(empty);
    let dragged = dragged.unwrap_or(empty);

    let min_x = container.left() - dragged.left() + grid.header_width + grid.border;
    let min_y = container.top() - dragged.top() + grid.header_height + grid.border;
    let max_x = container.right() - dragged.right();
    let max_y = container.bottom() - dragged.bottom();

    Vec2::new(
        snap(transform.x, grid.cell_width).max(min_x).min(max_x),
        snap(transform.y, grid.cell_height).max(min_y).min(max_y),
    )
}

/// Whole cells crossed by a pixel delta, as `(days, slots)`.
pub fn cell_delta(grid: &GridConfig, delta: Vec2) -> (i64, i64) {
    (
        (delta.x / grid.cell_width).floor() as i64,
        (delta.y / grid.cell_height).floor() as i64,
    )
}
