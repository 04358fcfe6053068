use serde::{Deserialize, Serialize};

use crate::*;

/// Per-seat win counters. Scores persist across rounds within one session
/// and reset only when the session is constructed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    player: u32,
    computer: u32,
}

impl Score {
    pub const fn of(self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub(crate) fn credit(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameOptions {
    pub size: Option<Coord>,
}

/// Top-level orchestration: owns the engine for the current round, the undo
/// history, and the session score. One instance per game; instances do not
/// share any state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    engine: PlayEngine,
    score: Score,
    history: History,
    size: Coord,
    starting_side: Side,
    seed: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut session = Self {
            engine: PlayEngine::new(Board::new(config.size)?, Side::Player),
            score: Score::default(),
            history: History::default(),
            size: config.size,
            // the first new_game flips this, so the first round opens on Player
            starting_side: Side::Computer,
            seed: config.seed,
        };
        session.new_game(NewGameOptions::default());
        Ok(session)
    }

    /// Starts a fresh round. An invalid requested size is warned about and
    /// ignored, retaining the current one. The score carries over; the
    /// starting seat alternates every round.
    pub fn new_game(&mut self, options: NewGameOptions) {
        let generator = RandomObstacleGenerator::new(self.next_round_seed());
        self.new_game_with(options, generator);
    }

    /// `new_game` with an explicit obstacle layout strategy, for hosts that
    /// need reproducible rounds.
    pub fn new_game_with<G: ObstacleGenerator>(&mut self, options: NewGameOptions, generator: G) {
        if let Some(size) = options.size {
            match Board::validate_size(size) {
                Ok(size) => self.size = size,
                Err(_) => log::warn!("ignoring board size {size}, keeping {}", self.size),
            }
        }

        let mut board = Board::new(self.size).expect("session size is validated");
        for pos in generator.generate(self.size, obstacle_quota(self.size)) {
            board.place_obstacle(pos);
        }

        self.starting_side = self.starting_side.other();
        self.engine = PlayEngine::new(board, self.starting_side);
        self.history.reset(self.snapshot());
    }

    /// Applies a move for the active seat. Returns `NoChange` once the round
    /// has ended; a new round or an undo re-enables play.
    pub fn play(&mut self, code: u8) -> Result<PlayOutcome> {
        let piece = Piece::from_code(code)?;
        if self.engine.is_ended() {
            return Ok(PlayOutcome::NoChange);
        }

        let mover = self.engine.turn();
        let outcome = self.engine.advance(piece)?;
        if outcome == PlayOutcome::Collision {
            // the seat that caused the collision takes the point
            self.score.credit(mover);
        }

        self.history.push(self.snapshot());
        Ok(outcome)
    }

    /// Reverts to the previous snapshot; a no-op at the round's initial
    /// snapshot. Undoing the ending move re-enables play.
    pub fn undo(&mut self) -> UndoOutcome {
        match self.history.undo() {
            Ok(snapshot) => {
                self.engine = snapshot.engine;
                self.score = snapshot.score;
                UndoOutcome::Restored
            }
            Err(_) => UndoOutcome::NoChange,
        }
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn cursor(&self) -> Coord2 {
        self.engine.cursor()
    }

    pub fn direction(&self) -> Direction {
        self.engine.direction()
    }

    pub fn next_preview(&self) -> Option<Coord2> {
        self.engine.next_preview()
    }

    pub fn active_side(&self) -> Side {
        self.engine.turn()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn free_cell_count(&self) -> CellCount {
        self.engine.board().free_cell_count()
    }

    pub fn is_ended(&self) -> bool {
        self.engine.is_ended()
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            engine: self.engine.clone(),
            score: self.score,
        }
    }

    /// LCG step over the session seed; rounds are reproducible from the
    /// construction seed alone.
    fn next_round_seed(&mut self) -> u64 {
        let seed = self.seed;
        self.seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        seed
    }
}
