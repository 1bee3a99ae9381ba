use crate::{
    board::Board,
    common::{Coord, GameStatus},
    game::GameEngine,
};
use log::debug;
use rand::rngs::SmallRng;

/// Interface implemented by the different sources of human-side moves.
pub trait Player {
    /// Choose the next square to play given the current board. `None` means
    /// the player has no move to offer (no empty square, or input closed).
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord>;

    /// Inform the player of the square the opponent answered with.
    fn handle_reply(&mut self, _coord: Coord) {}

    /// Inform the player that the game has concluded.
    fn handle_game_over(&mut self, _status: GameStatus, _board: &Board) {}
}

/// Drive one game from the current state of `engine` until it concludes or
/// the player stops offering moves. Returns the final status.
pub fn play_game(
    engine: &mut GameEngine,
    player: &mut dyn Player,
    rng: &mut SmallRng,
) -> GameStatus {
    while !engine.state().is_over() {
        let Some(coord) = player.select_move(rng, engine.state().board()) else {
            debug!("player offered no move, leaving game unfinished");
            break;
        };
        let accepted = engine.try_apply_human_move(coord).map(|_| ());
        match accepted {
            Ok(()) => {
                if let Some(reply) = engine.last_reply() {
                    player.handle_reply(reply);
                }
            }
            Err(e) => debug!("ignoring move {}: {}", coord, e),
        }
    }
    let status = engine.status();
    if status != GameStatus::InProgress {
        player.handle_game_over(status, engine.state().board());
    }
    status
}
