#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellKind {
    Wall,
    Floor,
    Target,
}

/// Column/row position on the board. Bounds are the grid's business,
/// not the coordinate's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    pub fn translated(self, direction: Direction) -> Coord {
        let (dx, dy) = direction.delta();
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Result of one attempted move. `Blocked` means nothing changed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveOutcome {
    Blocked,
    PlayerMoved,
    PlayerMovedAndCratePushed,
}
