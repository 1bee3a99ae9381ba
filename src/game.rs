use crate::{
    ai,
    board::Board,
    common::{BoardError, Coord, GameStatus, Mark, Outcome},
    outcome,
};
use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Snapshot of one game: the board and, once the game has concluded, its
/// outcome. `outcome` is `Some` exactly when a line is complete or the board
/// is full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SavedGame", into = "SavedGame")
)]
pub struct GameState {
    board: Board,
    outcome: Option<Outcome>,
}

/// Wire form of [`GameState`]. The recorded outcome must be the one the
/// board actually evaluates to.
#[cfg(feature = "std")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SavedGame {
    board: Board,
    outcome: Option<Outcome>,
}

#[cfg(feature = "std")]
impl TryFrom<SavedGame> for GameState {
    type Error = BoardError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let state = GameState::from_board(saved.board);
        if state.outcome != saved.outcome {
            return Err(BoardError::InvalidState);
        }
        Ok(state)
    }
}

#[cfg(feature = "std")]
impl From<GameState> for SavedGame {
    fn from(state: GameState) -> Self {
        SavedGame {
            board: state.board,
            outcome: state.outcome,
        }
    }
}

/// Result of applying a human move to a [`GameState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// The state after the human move and any reply.
    pub state: GameState,
    /// Square taken by the opponent, if it moved.
    pub reply: Option<Coord>,
}

impl GameState {
    /// Fresh game: empty board, no outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from an arbitrary board, deriving its outcome.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            outcome: outcome::evaluate(&board),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.outcome)
    }

    /// Check that the human may play at `coord`.
    pub fn validate_move(&self, coord: Coord) -> Result<(), BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        if self.board.get(coord).is_some() {
            return Err(BoardError::Occupied(coord));
        }
        Ok(())
    }

    /// Play `X` at `coord`, then let the opponent answer unless the game has
    /// just concluded.
    ///
    /// `self` is left untouched; the new state is returned in the [`Turn`].
    pub fn apply_human_move<R: Rng + ?Sized>(
        &self,
        coord: Coord,
        rng: &mut R,
    ) -> Result<Turn, BoardError> {
        self.validate_move(coord)?;

        let mut next = *self;
        next.board.set(coord, Mark::X)?;
        next.outcome = outcome::evaluate(&next.board);
        if next.is_over() {
            return Ok(Turn {
                state: next,
                reply: None,
            });
        }

        // Not concluded, so at least one square is still empty.
        let reply = ai::play_random_move(&mut next.board, Mark::O, rng)?;
        next.outcome = outcome::evaluate(&next.board);
        Ok(Turn { state: next, reply })
    }
}

/// Core game logic holding the published state and the opponent's RNG.
pub struct GameEngine {
    state: GameState,
    rng: SmallRng,
    last_reply: Option<Coord>,
    moves: usize,
}

impl GameEngine {
    /// Create a new engine with an empty board.
    pub fn new(rng: SmallRng) -> Self {
        Self::from_state(GameState::new(), rng)
    }

    /// Engine whose opponent replays the same moves for the same seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Resume from a previously saved state.
    pub fn from_state(state: GameState, rng: SmallRng) -> Self {
        let moves = state.board().count(Mark::X);
        Self {
            state,
            rng,
            last_reply: None,
            moves,
        }
    }

    /// The currently published state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Square the opponent took in answer to the last accepted move.
    pub fn last_reply(&self) -> Option<Coord> {
        self.last_reply
    }

    /// Number of human moves accepted in the current game.
    pub fn moves_played(&self) -> usize {
        self.moves
    }

    /// Apply a human move and publish the resulting state.
    ///
    /// Moves on an occupied square or after the game has concluded are
    /// ignored and the current state is returned unchanged.
    pub fn apply_human_move(&mut self, coord: Coord) -> &GameState {
        if let Err(e) = self.try_apply_human_move(coord) {
            debug!("ignoring move {}: {}", coord, e);
        }
        &self.state
    }

    /// Like [`GameEngine::apply_human_move`], but reports why a move was
    /// rejected. The published state is unchanged on error.
    pub fn try_apply_human_move(&mut self, coord: Coord) -> Result<&GameState, BoardError> {
        let turn = self.state.apply_human_move(coord, &mut self.rng)?;
        debug!("human played {}, opponent replied {:?}", coord, turn.reply);
        self.state = turn.state;
        self.last_reply = turn.reply;
        self.moves += 1;
        if let Some(message) = self.state.status().message() {
            info!("game over after {} moves: {}", self.moves, message);
        }
        Ok(&self.state)
    }

    /// Discard the current game and start a fresh one.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.state = GameState::new();
        self.last_reply = None;
        self.moves = 0;
    }
}
