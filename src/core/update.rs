use crate::core::models::Tile::{Ball, Full, Goal, Road, Wall};
use crate::core::models::{Direction, GameError, MoveOutcome, PuzzleState, UserAction, Vec2};

/// Resolve one move against the current state, mutating it in place.
///
/// Every grid read happens before any write, so a returned error leaves the
/// state untouched. Rejected pushes are the `Blocked` outcome, not errors;
/// out-of-bounds positions are errors, since valid stage content keeps every
/// push target inside the grid.
pub fn step(state: &mut PuzzleState, action: UserAction) -> Result<MoveOutcome, GameError> {
    let UserAction::Move(direction) = action;

    // A cleared stage accepts no further moves until a fresh load.
    if state.is_cleared() {
        return Ok(MoveOutcome::Blocked);
    }

    let dir = vec_from_dir(direction);
    let next = state.player + dir;

    match state.grid.get(&next)? {
        Wall => Ok(MoveOutcome::Blocked),
        Road | Goal => {
            // The player is not a tile; walking mutates nothing but its
            // position.
            state.player = next;
            Ok(MoveOutcome::PlayerMove)
        }
        Ball => {
            let beyond = next + dir;
            match state.grid.get(&beyond)? {
                Road => {
                    state.grid.set(&next, Road)?;
                    state.grid.set(&beyond, Ball)?;
                    state.player = next;
                    Ok(MoveOutcome::PlayerAndBallMove)
                }
                Goal => {
                    state.grid.set(&next, Road)?;
                    state.grid.set(&beyond, Full)?;
                    state.balls -= 1;
                    state.player = next;
                    Ok(MoveOutcome::PlayerAndBallMove)
                }
                Ball | Full | Wall => Ok(MoveOutcome::Blocked),
            }
        }
        Full => {
            let beyond = next + dir;
            match state.grid.get(&beyond)? {
                Road => {
                    // The vacated cell was a goal underneath the parked ball,
                    // and the ball leaving it is un-parked again.
                    state.grid.set(&next, Goal)?;
                    state.grid.set(&beyond, Ball)?;
                    state.balls += 1;
                    state.player = next;
                    Ok(MoveOutcome::PlayerAndBallMove)
                }
                Goal => {
                    state.grid.set(&next, Goal)?;
                    state.grid.set(&beyond, Full)?;
                    state.player = next;
                    Ok(MoveOutcome::PlayerAndBallMove)
                }
                Ball | Full | Wall => Ok(MoveOutcome::Blocked),
            }
        }
    }
}

fn vec_from_dir(dir: Direction) -> Vec2 {
    match dir {
        Direction::Up => Vec2 { x: 0, y: -1 },
        Direction::Down => Vec2 { x: 0, y: 1 },
        Direction::Left => Vec2 { x: -1, y: 0 },
        Direction::Right => Vec2 { x: 1, y: 0 },
    }
}
