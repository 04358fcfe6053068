use rand::prelude::*;

use super::*;

/// Uniform seeding over the interior band `[1, size-2]²`, which keeps the rim
/// and the start corner clear. Collisions are redrawn so the requested count
/// is exact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomObstacleGenerator {
    seed: u64,
}

impl RandomObstacleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ObstacleGenerator for RandomObstacleGenerator {
    fn generate(self, size: Coord, count: CellCount) -> Vec<Coord2> {
        let interior = size.saturating_sub(2) as CellCount;
        let capacity = interior * interior;
        if capacity == 0 {
            log::warn!("board of size {size} has no interior, seeding no obstacles");
            return Vec::new();
        }
        let count = if count > capacity {
            log::warn!("requested {count} obstacles but only {capacity} interior cells fit");
            capacity
        } else {
            count
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut taken: Vec<Coord2> = Vec::with_capacity(count as usize);
        while taken.len() < count as usize {
            let pos = (
                rng.random_range(1..=size - 2),
                rng.random_range(1..=size - 2),
            );
            if !taken.contains(&pos) {
                taken.push(pos);
            }
        }
        taken
    }
}
