//! Flappy-owl simulation
//!
//! Fixed-timestep state machine and geometry constants. Rendering lives in
//! `hoot-cli` and is a pure function of this state.

mod state;

pub use state::{
    GameEvent, GameState, Phase, BIRD_SIZE, BIRD_X, GAP_HEIGHT, GROUND_STRIP_H, GROUND_Y,
    OBSTACLE_W, PLAYFIELD_H, PLAYFIELD_W, TICK_INTERVAL,
};
