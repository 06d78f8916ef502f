pub use dissimilar::diff as __diff;

use crate::console_interface::render_game_to_string;
use crate::core::{
    Direction, GameError, MoveOutcome, PuzzleState, StageCatalog, StageId, Tile, UserAction,
    parse_stage, step,
};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub state: PuzzleState,
}

impl GameTestState {
    /// Ad-hoc level, parsed but not run through catalog validation, so tiny
    /// borderless layouts are usable.
    pub fn new(level: &str) -> Self {
        let definition = parse_stage(0, level).expect("test level should parse");
        Self {
            state: definition.instantiate(),
        }
    }

    pub fn from_catalog(catalog: &StageCatalog, stage: StageId) -> Self {
        Self {
            state: PuzzleState::load(catalog, stage).expect("stage should exist"),
        }
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.state)
            .expect("render stays in bounds")
            .trim_matches('\n')
            .into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        self.assert_step(UserAction::Move(direction))
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn assert_step(&mut self, action: UserAction) -> MoveOutcome {
        let outcome = self.try_step(action);
        if outcome == MoveOutcome::Blocked {
            panic!(
                "Expected the move to land, got {:?}, in map\n{}",
                outcome,
                self.game_to_string()
            );
        }
        outcome
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        self.try_step(UserAction::Move(direction))
    }

    pub fn try_step(&mut self, action: UserAction) -> MoveOutcome {
        match step(&mut self.state, action) {
            Ok(outcome) => outcome,
            Err(err) => panic!("step failed: {}, in map\n{}", err, self.game_to_string()),
        }
    }

    /// Like `try_move` but surfacing errors, for out-of-bounds cases.
    pub fn raw_move(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        step(&mut self.state, UserAction::Move(direction))
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }

    /// Cells holding a ball, parked or not.
    pub fn pushable_cells(&self) -> u32 {
        self.state
            .count_tiles(|tile| matches!(tile, Tile::Ball | Tile::Full))
    }

    pub fn assert_counter_consistent(&self) {
        assert_eq!(
            self.state.balls(),
            self.state.count_tiles(|tile| tile == Tile::Ball),
            "ball counter drifted from the grid\n{}",
            self.game_to_string()
        );
    }
}
