use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board size and positions.
pub type Coord = u8;

/// Count type used for cell totals and obstacle quotas.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Absolute travel direction of the road head.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    South,
    East,
    North,
    West,
}

impl Direction {
    pub const fn turned_left(self) -> Self {
        use Direction::*;
        match self {
            South => West,
            West => North,
            North => East,
            East => South,
        }
    }

    pub const fn turned_right(self) -> Self {
        use Direction::*;
        match self {
            South => East,
            East => North,
            North => West,
            West => South,
        }
    }

    const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            South => (1, 0),
            East => (0, 1),
            North => (-1, 0),
            West => (0, -1),
        }
    }

    /// Moves one cell in this direction, returning a value only when it
    /// remains in bounds.
    pub fn step(self, from: Coord2, bounds: Coord2) -> Option<Coord2> {
        apply_delta(from, self.delta(), bounds)
    }
}

fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    const ALL: [Direction; 4] = [South, East, North, West];

    #[test]
    fn left_turn_table() {
        assert_eq!(South.turned_left(), West);
        assert_eq!(West.turned_left(), North);
        assert_eq!(North.turned_left(), East);
        assert_eq!(East.turned_left(), South);
    }

    #[test]
    fn right_turn_table() {
        assert_eq!(South.turned_right(), East);
        assert_eq!(East.turned_right(), North);
        assert_eq!(North.turned_right(), West);
        assert_eq!(West.turned_right(), South);
    }

    #[test]
    fn left_then_right_restores_direction() {
        for dir in ALL {
            assert_eq!(dir.turned_left().turned_right(), dir);
            assert_eq!(dir.turned_right().turned_left(), dir);
        }
    }

    #[test]
    fn step_stays_in_bounds() {
        let bounds = (3, 3);
        assert_eq!(South.step((0, 0), bounds), Some((1, 0)));
        assert_eq!(East.step((0, 0), bounds), Some((0, 1)));
        assert_eq!(North.step((0, 0), bounds), None);
        assert_eq!(West.step((0, 0), bounds), None);
        assert_eq!(South.step((2, 0), bounds), None);
        assert_eq!(East.step((0, 2), bounds), None);
    }
}
