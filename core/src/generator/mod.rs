use crate::*;
pub use random::*;

mod random;

/// Strategy for seeding obstacle cells at round start. Implementations must
/// never yield the start corner `(0, 0)`, an out-of-bounds cell, or the same
/// cell twice.
pub trait ObstacleGenerator {
    fn generate(self, size: Coord, count: CellCount) -> Vec<Coord2>;
}

/// Fixed obstacle layout for deterministic setups. Coordinates outside the
/// board or on the start corner are dropped with a warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetObstacleGenerator {
    coords: Vec<Coord2>,
}

impl PresetObstacleGenerator {
    pub fn new(coords: Vec<Coord2>) -> Self {
        Self { coords }
    }
}

impl ObstacleGenerator for PresetObstacleGenerator {
    fn generate(self, size: Coord, _count: CellCount) -> Vec<Coord2> {
        let mut taken: Vec<Coord2> = Vec::with_capacity(self.coords.len());
        for pos in self.coords {
            if pos.0 >= size || pos.1 >= size || pos == (0, 0) || taken.contains(&pos) {
                log::warn!("dropping preset obstacle at {pos:?}");
                continue;
            }
            taken.push(pos);
        }
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_drops_invalid_coordinates() {
        let generator =
            PresetObstacleGenerator::new(vec![(0, 0), (1, 1), (5, 1), (1, 5), (1, 1), (2, 2)]);

        assert_eq!(generator.generate(3, 0), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn preset_ignores_requested_count() {
        let generator = PresetObstacleGenerator::new(vec![]);
        assert!(generator.generate(9, 10).is_empty());
    }
}
