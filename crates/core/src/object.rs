//! Game-object model - positions, velocities, shapes, and grid geometry.
//!
//! A [`GameObject`] is a set of grid cells that move together: a paddle, a
//! ball, a bullet, or a multi-glyph shape like the player avatar. This module
//! is pure geometry; game rules live in the per-game engines.

use crate::types::Point;

/// A discrete game object on the play field.
///
/// `points` and `symbols` are parallel: `symbols[i]` is the glyph drawn at
/// `points[i]`. The constructors keep the two in sync. All points move
/// together by `(vel_row, vel_col)` each tick unless a rule engine overrides
/// per-part behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameObject {
    pub points: Vec<Point>,
    pub symbols: Vec<char>,
    pub vel_row: i32,
    pub vel_col: i32,
}

impl GameObject {
    /// A single-cell object, e.g. a ball or a bullet.
    pub fn cell(row: i32, col: i32, symbol: char, vel_row: i32, vel_col: i32) -> Self {
        Self {
            points: vec![Point::new(row, col)],
            symbols: vec![symbol],
            vel_row,
            vel_col,
        }
    }

    /// A static filled rectangle of one glyph, e.g. a paddle.
    ///
    /// Cells are laid out row-major, so `points[0]` is the top-left cell.
    pub fn rect(row: i32, col: i32, width: i32, height: i32, symbol: char) -> Self {
        let mut points = Vec::with_capacity((width * height) as usize);
        for r in 0..height {
            for c in 0..width {
                points.push(Point::new(row + r, col + c));
            }
        }
        let symbols = vec![symbol; points.len()];
        Self {
            points,
            symbols,
            vel_row: 0,
            vel_col: 0,
        }
    }

    /// A multi-glyph shape from `(row offset, col offset, glyph)` cells.
    ///
    /// Cell order is preserved; `points[0]` is the shape's reference cell.
    pub fn shape(
        row: i32,
        col: i32,
        cells: &[(i32, i32, char)],
        vel_row: i32,
        vel_col: i32,
    ) -> Self {
        let points = cells
            .iter()
            .map(|&(dr, dc, _)| Point::new(row + dr, col + dc))
            .collect();
        let symbols = cells.iter().map(|&(_, _, ch)| ch).collect();
        Self {
            points,
            symbols,
            vel_row,
            vel_col,
        }
    }

    /// Move every point by the delta.
    pub fn translate(&mut self, dr: i32, dc: i32) {
        for p in &mut self.points {
            p.row += dr;
            p.col += dc;
        }
    }

    /// Move every point by the object's own velocity.
    pub fn step(&mut self) {
        self.translate(self.vel_row, self.vel_col);
    }

    /// True if any point, after applying the delta, would leave the frame.
    ///
    /// A zero delta doubles as a current-occupancy wall check.
    pub fn would_exit_bounds(&self, dr: i32, dc: i32, frame_w: i32, frame_h: i32) -> bool {
        self.points.iter().any(|p| {
            let row = p.row + dr;
            let col = p.col + dc;
            row < 0 || row >= frame_h || col < 0 || col >= frame_w
        })
    }

    /// True if any point pair shares a row with columns within `radius`.
    ///
    /// Rows are compared exactly; only columns get tolerance. Radius 0 is an
    /// exact cell match, radius 1 is the shooter's hit box.
    pub fn intersects(&self, other: &GameObject, radius: i32) -> bool {
        self.points.iter().any(|a| {
            other
                .points
                .iter()
                .any(|b| a.row == b.row && (a.col - b.col).abs() <= radius)
        })
    }

    /// The glyphs of this object with their positions, for rendering.
    pub fn glyphs(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.points.iter().copied().zip(self.symbols.iter().copied())
    }
}
