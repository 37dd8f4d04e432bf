//! Fixed timestep driver
//!
//! Turns variable wall-clock frame times into whole `SIM_DT` simulation
//! steps. All actor updates for a frame finish before `snapshot` is read.

use crate::consts::*;
use crate::error::Result;
use crate::settings::Settings;
use crate::sim::{FrameInput, FrameSnapshot, GameState, TileGrid, tick};

/// Game instance holding the simulation and frame clock state
pub struct Game {
    pub state: GameState,
    /// Input applied to every step until changed
    pub input: FrameInput,
    accumulator: f32,
}

impl Game {
    /// Start a game in `grid` with the default actor layout
    pub fn new(grid: TileGrid, settings: &Settings) -> Result<Self> {
        Ok(Self::from_state(GameState::new(grid, settings)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            input: FrameInput::default(),
            accumulator: 0.0,
        }
    }

    /// Run simulation steps for `frame_dt` seconds of wall-clock time
    ///
    /// Returns the number of steps taken. Time beyond `MAX_SUBSTEPS` steps
    /// is dropped rather than carried into the next frame.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::warn!(
                "Frame hit {} substeps, dropping {:.3}s",
                MAX_SUBSTEPS,
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Change rooms between frames, respawning the actors
    ///
    /// Leftover accumulated time is discarded so the new room starts clean.
    pub fn load_room(&mut self, grid: TileGrid, settings: &Settings) -> Result<()> {
        self.state.load_room(grid, settings)?;
        self.accumulator = 0.0;
        Ok(())
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn game() -> Game {
        let grid = TileGrid::new(32, vec![vec![0; 20]; 15]).unwrap();
        Game::new(grid, &Settings::default()).unwrap()
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut game = game();
        assert_eq!(game.advance(SIM_DT * 0.5), 0);
        assert_eq!(game.advance(SIM_DT * 0.6), 1);
        assert_eq!(game.state.frame, 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game = game();
        assert!(MAX_FRAME_DT / SIM_DT > MAX_SUBSTEPS as f32);

        assert_eq!(game.advance(10.0), MAX_SUBSTEPS);
        assert_eq!(game.state.frame, u64::from(MAX_SUBSTEPS));
        // Nothing left over to replay next frame
        assert_eq!(game.advance(0.0), 0);
        assert_eq!(game.state.frame, u64::from(MAX_SUBSTEPS));
    }

    #[test]
    fn test_negative_frame_time_is_ignored() {
        let mut game = game();
        assert_eq!(game.advance(-1.0), 0);
        assert_eq!(game.advance(SIM_DT), 1);
    }

    #[test]
    fn test_load_room_resets_clock_and_actors() {
        let mut game = game();
        game.input.intent = Vec2::X;
        game.advance(SIM_DT * 1.5);

        let grid = TileGrid::new(32, vec![vec![0; 10]; 10]).unwrap();
        game.load_room(grid, &Settings::default()).unwrap();
        assert_eq!(game.snapshot().player_position, Vec2::new(64.0, 64.0));
        assert_eq!(game.advance(SIM_DT * 0.6), 0);
    }

    #[test]
    fn test_input_moves_player() {
        let mut game = game();
        let start = game.snapshot().player_position;
        game.input.intent = Vec2::X;
        game.advance(0.05);
        assert!(game.snapshot().player_position.x > start.x);
    }
}
