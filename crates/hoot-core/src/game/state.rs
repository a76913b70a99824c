//! Game state and tick logic
//!
//! One bird at a fixed horizontal position, one obstacle sweeping right to
//! left, a randomized gap, and a score. All transitions are total functions
//! over numeric state; there is no failure path in here.

use std::time::Duration;

use rand::Rng;

// ============================================================================
// CONSTANTS & CONFIGURATION
// ============================================================================

/// Play-field size in game units
pub const PLAYFIELD_W: f32 = 400.0;
pub const PLAYFIELD_H: f32 = 600.0;

/// Bird geometry; the horizontal position never changes
pub const BIRD_SIZE: f32 = 40.0;
pub const BIRD_X: f32 = 50.0;
const BIRD_START_Y: f32 = 250.0;

/// The bird's bottom edge rests on this line when it hits the ground
pub const GROUND_Y: f32 = PLAYFIELD_H - BIRD_SIZE;
/// Height of the drawn ground strip at the bottom of the field
pub const GROUND_STRIP_H: f32 = 40.0;

/// Obstacle geometry
pub const OBSTACLE_W: f32 = 60.0;
pub const GAP_HEIGHT: f32 = 200.0;

/// Range the gap's top edge is drawn from on every spawn.
/// Independent of the play-field height; the bottom segment can degenerate
/// to a sliver near the top of the range.
const GAP_TOP_MIN: f32 = 100.0;
const GAP_TOP_MAX: f32 = 400.0;
const INITIAL_GAP_TOP: f32 = 200.0;

/// Per-tick movement steps
const GRAVITY_STEP: f32 = 5.0;
const OBSTACLE_STEP: f32 = 5.0;
const FLAP_STEP: f32 = 60.0;

/// Horizontal window around the bird that counts as obstacle overlap
const COLLIDE_LEFT: f32 = BIRD_X;
const COLLIDE_RIGHT: f32 = 100.0;

/// Fixed tick cadence while Running
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

// ============================================================================
// GAME STATE
// ============================================================================

/// Current mode of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

/// Cues produced by the simulation; the UI maps them to sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    Scored,
    Died,
}

/// The whole game in five fields
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    /// Top edge of the bird; invariant `0 <= bird_y <= GROUND_Y`
    pub bird_y: f32,
    /// Left edge of the obstacle; `>= -OBSTACLE_W` before wraparound
    pub obstacle_x: f32,
    /// Top edge of the gap
    pub gap_top: f32,
    /// Obstacles fully passed this run
    pub score: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            bird_y: BIRD_START_Y,
            obstacle_x: PLAYFIELD_W,
            gap_top: INITIAL_GAP_TOP,
            score: 0,
        }
    }

    /// Start or restart the run. Returns true if the phase changed.
    ///
    /// From NotStarted or Over this resets everything and draws a fresh
    /// gap; while Running it does nothing.
    pub fn activate(&mut self, rng: &mut impl Rng) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        *self = Self {
            phase: Phase::Running,
            bird_y: BIRD_START_Y,
            obstacle_x: PLAYFIELD_W,
            gap_top: Self::draw_gap_top(rng),
            score: 0,
        };
        true
    }

    /// Jump. Only meaningful while Running; floored at the top of the field.
    pub fn flap(&mut self) -> Option<GameEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        self.bird_y = (self.bird_y - FLAP_STEP).max(0.0);
        Some(GameEvent::Flapped)
    }

    /// Advance one fixed tick. No-op unless Running.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running {
            return events;
        }

        // Gravity, then the ground line. Hitting it ends the run and the
        // bird stops moving for the rest of the tick.
        self.bird_y += GRAVITY_STEP;
        if self.bird_y >= GROUND_Y {
            self.bird_y = GROUND_Y;
            self.phase = Phase::Over;
            events.push(GameEvent::Died);
        }

        // Obstacle sweep and wraparound. The sweep is independent of the
        // bird and still applies on the death tick.
        self.obstacle_x -= OBSTACLE_STEP;
        if self.obstacle_x <= -OBSTACLE_W {
            self.obstacle_x = PLAYFIELD_W;
            self.gap_top = Self::draw_gap_top(rng);
            self.score += 1;
            events.push(GameEvent::Scored);
        }

        // Obstacle collision, unless the ground already ended the run.
        if self.phase == Phase::Running && self.overlaps_bird_window() && self.outside_gap() {
            self.phase = Phase::Over;
            events.push(GameEvent::Died);
        }

        events
    }

    fn draw_gap_top(rng: &mut impl Rng) -> f32 {
        rng.gen_range(GAP_TOP_MIN..GAP_TOP_MAX)
    }

    fn overlaps_bird_window(&self) -> bool {
        self.obstacle_x < COLLIDE_RIGHT && self.obstacle_x + OBSTACLE_W > COLLIDE_LEFT
    }

    fn outside_gap(&self) -> bool {
        self.bird_y < self.gap_top || self.bird_y + BIRD_SIZE > self.gap_top + GAP_HEIGHT
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// A Running state with the obstacle far from the bird window
    fn running() -> GameState {
        let mut state = GameState::new();
        state.activate(&mut rng());
        state
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new();
        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.bird_y, 250.0);
        assert_eq!(state.obstacle_x, 400.0);
        assert_eq!(state.gap_top, 200.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_activate_resets_and_runs() {
        let mut state = GameState::new();
        assert!(state.activate(&mut rng()));
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird_y, 250.0);
        assert_eq!(state.obstacle_x, 400.0);
        assert!((100.0..400.0).contains(&state.gap_top));
    }

    #[test]
    fn test_activate_while_running_is_a_noop() {
        let mut state = running();
        state.bird_y = 123.0;
        state.score = 4;
        assert!(!state.activate(&mut rng()));
        assert_eq!(state.bird_y, 123.0);
        assert_eq!(state.score, 4);
    }

    #[test]
    fn test_activate_from_over_restarts() {
        let mut state = running();
        state.phase = Phase::Over;
        state.score = 9;
        assert!(state.activate(&mut rng()));
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird_y, 250.0);
    }

    #[test]
    fn test_gravity_accumulates_per_tick() {
        let mut state = running();
        state.gap_top = 100.0; // keep the gap wide open at the fall path
        let mut r = rng();
        for n in 1..=10 {
            state.tick(&mut r);
            assert_eq!(state.bird_y, 250.0 + 5.0 * n as f32);
        }
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_ground_collision_ends_run_on_exact_tick() {
        let mut state = running();
        // Parked far enough right that the sweep never reaches the bird
        // window during the fall; only the ground can end the run.
        state.obstacle_x = 410.0;
        let mut r = rng();

        // From 250, the ground line at 560 is reached on tick 62.
        for _ in 0..61 {
            let events = state.tick(&mut r);
            assert!(!events.contains(&GameEvent::Died));
        }
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.bird_y, 555.0);

        let events = state.tick(&mut r);
        assert!(events.contains(&GameEvent::Died));
        assert_eq!(state.phase, Phase::Over);
        assert_eq!(state.bird_y, GROUND_Y);
    }

    #[test]
    fn test_ticks_do_nothing_unless_running() {
        let mut r = rng();
        let mut fresh = GameState::new();
        assert!(fresh.tick(&mut r).is_empty());
        assert_eq!(fresh, GameState::new());

        let mut over = running();
        over.phase = Phase::Over;
        let snapshot = over.clone();
        assert!(over.tick(&mut r).is_empty());
        assert_eq!(over, snapshot);
    }

    #[test]
    fn test_wrap_scores_and_respawns_gap() {
        let mut state = running();
        state.bird_y = 100.0;
        state.obstacle_x = -55.0; // one step from the wrap threshold
        let mut r = rng();

        let events = state.tick(&mut r);
        assert!(events.contains(&GameEvent::Scored));
        assert_eq!(state.score, 1);
        assert_eq!(state.obstacle_x, PLAYFIELD_W);
        assert!((100.0..400.0).contains(&state.gap_top));
    }

    #[test]
    fn test_wrap_increments_score_by_exactly_one() {
        let mut state = running();
        state.bird_y = 100.0;
        state.obstacle_x = -55.0;
        state.score = 3;
        state.tick(&mut rng());
        assert_eq!(state.score, 4);
    }

    #[test]
    fn test_bird_inside_gap_survives_overlap() {
        let mut state = running();
        state.gap_top = 150.0;
        state.bird_y = 250.0; // extent [255, 295] after gravity, inside [150, 350]
        state.obstacle_x = 60.0; // overlaps the [50, 100) window
        let events = state.tick(&mut rng());
        assert!(!events.contains(&GameEvent::Died));
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_bird_above_gap_collides() {
        let mut state = running();
        state.gap_top = 150.0;
        state.bird_y = 60.0; // 65 < 150 after gravity, above the gap
        state.obstacle_x = 60.0;
        let events = state.tick(&mut rng());
        assert!(events.contains(&GameEvent::Died));
        assert_eq!(state.phase, Phase::Over);
    }

    #[test]
    fn test_bird_below_gap_collides() {
        let mut state = running();
        state.gap_top = 150.0;
        state.bird_y = 330.0; // extent [335, 375] after gravity, past 350
        state.obstacle_x = 60.0;
        let events = state.tick(&mut rng());
        assert!(events.contains(&GameEvent::Died));
        assert_eq!(state.phase, Phase::Over);
    }

    #[test]
    fn test_obstacle_outside_window_never_collides() {
        let mut state = running();
        state.gap_top = 150.0;
        state.bird_y = 60.0; // would collide under overlap
        state.obstacle_x = 120.0; // right of the window
        let events = state.tick(&mut rng());
        assert!(!events.contains(&GameEvent::Died));
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_flap_lifts_and_floors_at_zero() {
        let mut state = running();
        state.bird_y = 100.0;
        assert_eq!(state.flap(), Some(GameEvent::Flapped));
        assert_eq!(state.bird_y, 40.0);
        assert_eq!(state.flap(), Some(GameEvent::Flapped));
        assert_eq!(state.bird_y, 0.0);
    }

    #[test]
    fn test_flap_outside_running_is_a_noop() {
        let mut state = GameState::new();
        assert_eq!(state.flap(), None);
        assert_eq!(state.bird_y, 250.0);

        state.phase = Phase::Over;
        assert_eq!(state.flap(), None);
    }

    #[test]
    fn test_death_tick_still_moves_obstacle() {
        let mut state = running();
        state.bird_y = 556.0; // gravity pushes past the ground line
        state.obstacle_x = 300.0;
        let events = state.tick(&mut rng());
        assert!(events.contains(&GameEvent::Died));
        assert_eq!(state.obstacle_x, 295.0);
    }
}
