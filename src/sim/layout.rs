//! Brick grid layout
//!
//! Bricks fill the arena width with equal gaps, rows stacked downward from a
//! fixed offset below the ceiling.

use super::rect::Rect;
use super::state::Brick;
use crate::consts::MAX_BRICKS;
use crate::settings::GridSettings;

/// Width of one brick so `cols` bricks and `cols + 1` gaps span `arena_width`
pub fn brick_width(arena_width: f32, grid: &GridSettings) -> f32 {
    let cols = grid.cols as f32;
    (arena_width - grid.padding * (cols + 1.0)) / cols
}

/// Lay out the full grid for an arena of the given size
///
/// Row 0 is the top row; bricks are returned row-major with ids in that order.
/// Returns `None` when the size is not usable yet (non-positive height, or too
/// narrow for positive-width bricks), so the caller can retry on a later resize.
pub fn build_brick_grid(
    arena_width: f32,
    arena_height: f32,
    grid: &GridSettings,
) -> Option<Vec<Brick>> {
    let width = brick_width(arena_width, grid);
    if width.is_nan() || width <= 0.0 || arena_height.is_nan() || arena_height <= 0.0 {
        log::warn!(
            "Arena {:.1}x{:.1} too small for {} columns, grid deferred",
            arena_width,
            arena_height,
            grid.cols
        );
        return None;
    }

    let start_y = arena_height - grid.top_offset;
    let mut bricks = Vec::with_capacity(grid.brick_count().min(MAX_BRICKS as usize));
    let mut next_id = 0;

    for row in 0..grid.rows {
        // validate() guarantees a non-empty palette; fall back to white otherwise
        let color = grid
            .palette
            .get(row as usize % grid.palette.len().max(1))
            .copied()
            .unwrap_or([1.0, 1.0, 1.0]);
        let y = start_y - row as f32 * (grid.brick_height + grid.padding);

        for col in 0..grid.cols {
            let x = grid.padding + col as f32 * (width + grid.padding);
            bricks.push(Brick {
                id: next_id,
                rect: Rect::new(x, y, width, grid.brick_height),
                color,
            });
            next_id += 1;
        }
    }

    Some(bricks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ROW_PALETTE;
    use crate::sim::collision::overlaps;

    #[test]
    fn test_reference_grid() {
        let grid = GridSettings::default();
        let bricks = build_brick_grid(400.0, 600.0, &grid).unwrap();
        assert_eq!(bricks.len(), 30);

        // (400 - 10 * 7) / 6 = 55
        assert_eq!(brick_width(400.0, &grid), 55.0);

        let first = &bricks[0];
        assert_eq!(first.rect, Rect::new(10.0, 500.0, 55.0, 20.0));
        assert_eq!(first.color, ROW_PALETTE[0]);

        let end_of_row = &bricks[5];
        assert_eq!(end_of_row.rect.x(), 10.0 + 5.0 * 65.0);
        assert_eq!(end_of_row.rect.right(), 390.0);

        let second_row = &bricks[6];
        assert_eq!(second_row.rect.pos.y, 470.0);
        assert_eq!(second_row.color, ROW_PALETTE[1]);

        let last = bricks.last().unwrap();
        assert_eq!(last.id, 29);
        assert_eq!(last.rect.pos.y, 500.0 - 4.0 * 30.0);
        assert_eq!(last.color, ROW_PALETTE[4]);
    }

    #[test]
    fn test_palette_cycles() {
        let grid = GridSettings {
            rows: 7,
            ..Default::default()
        };
        let bricks = build_brick_grid(400.0, 600.0, &grid).unwrap();
        let row5 = &bricks[5 * grid.cols as usize];
        let row6 = &bricks[6 * grid.cols as usize];
        assert_eq!(row5.color, ROW_PALETTE[0]);
        assert_eq!(row6.color, ROW_PALETTE[1]);
    }

    #[test]
    fn test_bricks_do_not_overlap() {
        let bricks = build_brick_grid(400.0, 600.0, &GridSettings::default()).unwrap();
        for (i, a) in bricks.iter().enumerate() {
            for b in &bricks[i + 1..] {
                assert!(!overlaps(&a.rect, &b.rect), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_unusable_size_defers_grid() {
        let grid = GridSettings::default();
        assert!(build_brick_grid(70.0, 600.0, &grid).is_none());
        assert!(build_brick_grid(0.0, 0.0, &grid).is_none());
        assert!(build_brick_grid(400.0, 0.0, &grid).is_none());
        assert!(build_brick_grid(f32::NAN, 600.0, &grid).is_none());
    }
}
