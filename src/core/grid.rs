use crate::core::{CellKind, Coord, LevelError};

/// Static terrain for one level. Built once by `load`, read-only after.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Vec<CellKind>>,
    width: i32,
}

impl Grid {
    /// Parses a rectangular block of glyphs into terrain. `@` (player start)
    /// and `*` (crate start) mark dynamic entities and are stored as plain
    /// floor; the loader picks their coordinates up separately.
    pub fn load(text: &str) -> Result<Grid, LevelError> {
        let mut cells: Vec<Vec<CellKind>> = Vec::new();

        for line in text.trim_matches('\n').lines() {
            let mut row = Vec::new();
            for ch in line.chars() {
                let kind = match ch {
                    'X' => CellKind::Wall,
                    ' ' => CellKind::Floor,
                    '.' => CellKind::Target,
                    '@' | '*' => CellKind::Floor,
                    other => {
                        return Err(LevelError::MalformedLevel(format!(
                            "unrecognized glyph '{}'",
                            other
                        )));
                    }
                };
                row.push(kind);
            }
            cells.push(row);
        }

        if cells.is_empty() || cells[0].is_empty() {
            return Err(LevelError::MalformedLevel("level text is empty".to_string()));
        }

        let width = cells[0].len();
        if cells.iter().any(|row| row.len() != width) {
            return Err(LevelError::MalformedLevel(
                "rows have unequal length".to_string(),
            ));
        }

        Ok(Grid {
            cells,
            width: width as i32,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.cells.len() as i32
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width() && coord.y < self.height()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    pub fn kind_at(&self, coord: Coord) -> Result<CellKind, LevelError> {
        if !self.in_bounds(coord) {
            return Err(LevelError::OutOfBounds(coord));
        }
        Ok(self.cells[coord.y as usize][coord.x as usize])
    }
}
