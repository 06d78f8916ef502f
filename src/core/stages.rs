use crate::core::grid::Grid;
use crate::core::models::Tile::{Ball, Full, Goal, Road, Wall};
use crate::core::models::{GameError, PuzzleState, StageId, Tile, Vec2};

/// Immutable template a stage attempt is built from. The catalog hands out
/// references; run-time state deep-copies the grid on load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageDefinition {
    stage: StageId,
    grid: Grid,
    player: Vec2,
    balls: u32,
}

impl StageDefinition {
    pub fn stage(&self) -> StageId {
        self.stage
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn balls(&self) -> u32 {
        self.balls
    }

    /// Fresh run-time state from this template, deep-copying the grid.
    pub fn instantiate(&self) -> PuzzleState {
        PuzzleState {
            stage: self.stage,
            grid: self.grid.clone(),
            player: self.player,
            balls: self.balls,
        }
    }
}

/// The compiled-in set of stages. Construction parses and validates every
/// layout; lookup is by id, never by position in the table.
#[derive(Debug)]
pub struct StageCatalog {
    stages: Vec<(StageId, StageDefinition)>,
}

impl StageCatalog {
    pub fn builtin() -> Result<StageCatalog, GameError> {
        StageCatalog::from_layouts(BUILTIN_STAGES)
    }

    pub fn from_layouts(layouts: &[(StageId, &str)]) -> Result<StageCatalog, GameError> {
        let mut stages = Vec::new();
        for &(id, text) in layouts {
            let definition = parse_stage(id, text)?;
            validate_stage(&definition)?;
            stages.push((id, definition));
        }
        Ok(StageCatalog { stages })
    }

    pub fn get(&self, stage: StageId) -> Result<&StageDefinition, GameError> {
        self.stages
            .iter()
            .find(|(id, _)| *id == stage)
            .map(|(_, definition)| definition)
            .ok_or(GameError::UnknownStage(stage))
    }

    pub fn stage_ids(&self) -> impl Iterator<Item = StageId> + '_ {
        self.stages.iter().map(|(id, _)| *id)
    }

    pub fn entries(&self) -> impl Iterator<Item = (StageId, &StageDefinition)> {
        self.stages.iter().map(|(id, definition)| (*id, definition))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl PuzzleState {
    /// Build a fresh attempt from the catalog entry for `stage`.
    pub fn load(catalog: &StageCatalog, stage: StageId) -> Result<PuzzleState, GameError> {
        Ok(catalog.get(stage)?.instantiate())
    }

    /// Reload the stage this state came from, discarding all progress.
    pub fn reset(&self, catalog: &StageCatalog) -> Result<PuzzleState, GameError> {
        PuzzleState::load(catalog, self.stage)
    }
}

/// Parse a stage layout in the conventional character set: `#` wall, space
/// road, `.` goal, `$` ball, `*` ball parked on a goal, `@` player on road,
/// `+` player on a goal. Short rows are padded with road to the widest row.
pub fn parse_stage(stage: StageId, text: &str) -> Result<StageDefinition, GameError> {
    let max_width = text.lines().map(|line| line.len()).max().unwrap_or(0);
    let mut rows: Vec<Vec<Tile>> = Vec::new();
    let mut player = None;

    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        let y = rows.len() as i32;
        let mut row = Vec::with_capacity(max_width);
        for (x, ch) in line.chars().enumerate() {
            let tile = match ch {
                '#' => Wall,
                ' ' => Road,
                '.' => Goal,
                '$' => Ball,
                '*' => Full,
                '@' | '+' => {
                    let pos = Vec2 { x: x as i32, y };
                    if player.replace(pos).is_some() {
                        return Err(invalid(stage, "more than one player start"));
                    }
                    if ch == '@' { Road } else { Goal }
                }
                other => {
                    return Err(invalid(
                        stage,
                        &format!("unrecognized tile character {other:?}"),
                    ));
                }
            };
            row.push(tile);
        }
        while row.len() < max_width {
            row.push(Road);
        }
        rows.push(row);
    }

    let Some(player) = player else {
        return Err(invalid(stage, "no player start"));
    };
    let grid = Grid::from_rows(rows);
    let balls = grid.count(|tile| tile == Ball);

    Ok(StageDefinition {
        stage,
        grid,
        player,
        balls,
    })
}

/// Content validity checks the move resolver relies on. Not a solvability
/// proof: a ball walled into a corner still passes.
fn validate_stage(definition: &StageDefinition) -> Result<(), GameError> {
    let stage = definition.stage;
    let grid = &definition.grid;

    let balls = grid.count(|tile| tile == Ball);
    let goals = grid.count(|tile| tile == Goal);
    if balls == 0 {
        return Err(invalid(stage, "no balls to push"));
    }
    if balls != goals {
        return Err(invalid(
            stage,
            &format!("{balls} balls but {goals} open goals"),
        ));
    }

    match grid.get(&definition.player) {
        Ok(Road) | Ok(Goal) => {}
        _ => return Err(invalid(stage, "player start is not on a walkable tile")),
    }

    // Balls, goals, and parked balls must keep clear of the outer ring so
    // that a push target computed from them always lies inside the grid.
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Vec2 { x, y };
            let tile = grid.get(&pos)?;
            let on_rim = x == 0 || y == 0 || x == grid.width() - 1 || y == grid.height() - 1;
            if on_rim && matches!(tile, Ball | Full | Goal) {
                return Err(invalid(
                    stage,
                    &format!("{tile:?} at ({x}, {y}) touches the grid rim"),
                ));
            }
        }
    }

    Ok(())
}

fn invalid(stage: StageId, reason: &str) -> GameError {
    GameError::InvalidStage {
        stage,
        reason: reason.to_string(),
    }
}

const BUILTIN_STAGES: &[(StageId, &str)] = &[(1, STAGE_1), (2, STAGE_2), (3, STAGE_3)];

const STAGE_1: &str = r#"
  ###
  #.#
  # ####
###$ $.#
#. $@###
####$#
   #.#
   # #
   ###
"#;

const STAGE_2: &str = r#"
#####
#@  #
# $$# ###
# $ # #.#
### ###.#
 ##    .#
 #   #  #
 #   ####
 #####
 
"#;

const STAGE_3: &str = r#"
  #####
###   #
#.@$  #
### $.#
#.##$ #
# # . ##
#$ *$$.#
#   .  #
########
"#;
