//! Static obstacle grid shared by every implementation.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors raised while loading a world-grid file.
#[derive(Error, Debug)]
pub enum WorldGridError {
    #[error("failed to read world grid '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("world grid row width mismatch at y={y}: expected {expected}, got {actual}")]
    RowWidth { y: usize, expected: usize, actual: usize },

    #[error("world grid row count mismatch: expected {expected}, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("invalid world grid char at ({x},{y}): {ch:?}")]
    BadChar { x: usize, y: usize, ch: char },
}

/// Fixed obstacle map.
///
/// Out-of-bounds cells read as obstacles, so beams and motion stop at the
/// world edge without a separate boundary check.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    width: i32,
    height: i32,
    obstacles: Vec<u8>,
}

impl WorldGrid {
    /// All-free world of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            obstacles: vec![0; width * height],
        }
    }

    /// Empty world enclosed by one-cell-thick walls.
    pub fn with_border_walls(width: usize, height: usize) -> Self {
        let mut world = Self::new(width, height);
        for x in 0..world.width {
            world.set_obstacle(x, 0);
            world.set_obstacle(x, world.height - 1);
        }
        for y in 0..world.height {
            world.set_obstacle(0, y);
            world.set_obstacle(world.width - 1, y);
        }
        world
    }

    /// Load a grid of the given dimensions from a text file.
    ///
    /// One row per non-blank line; `.`/`0` free, `#`/`1` obstacle. Any
    /// other character or dimension mismatch is a descriptive error.
    pub fn from_grid_file(path: &Path, width: usize, height: usize) -> Result<Self, WorldGridError> {
        let text = fs::read_to_string(path).map_err(|source| WorldGridError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let rows: Vec<&str> = text.lines().map(str::trim).filter(|row| !row.is_empty()).collect();
        if rows.len() != height {
            return Err(WorldGridError::RowCount { expected: height, actual: rows.len() });
        }

        let mut world = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(WorldGridError::RowWidth {
                    y,
                    expected: width,
                    actual: row.chars().count(),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '#' | '1' => world.set_obstacle(x as i32, y as i32),
                    '.' | '0' => {}
                    _ => return Err(WorldGridError::BadChar { x, y, ch }),
                }
            }
        }
        Ok(world)
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Mark one cell as an obstacle. Out-of-bounds is a silent no-op.
    pub fn set_obstacle(&mut self, x: i32, y: i32) {
        if !self.in_bounds(x, y) {
            return;
        }
        self.obstacles[(y * self.width + x) as usize] = 1;
    }

    /// Mark a rectangular block of cells, clipped to the grid.
    pub fn add_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = (x + width).min(self.width);
        let y_end = (y + height).min(self.height);
        for row in y_start..y_end {
            for col in x_start..x_end {
                self.set_obstacle(col, row);
            }
        }
    }

    /// True when the cell is an obstacle. Out-of-bounds reads as obstacle.
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return true;
        }
        self.obstacles[(y * self.width + x) as usize] != 0
    }
}
