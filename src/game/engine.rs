use super::{
    action::{Action, Direction},
    config::GameConfig,
    food::{Food, FoodType},
    state::{GameOverReason, GameState, Position, Snake},
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub final_score: u32,
    pub level: u32,
    pub reason: GameOverReason,
}

/// Result of advancing the game clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake moved (false while paused)
    pub advanced: bool,
    /// Food eaten this tick, if any
    pub ate: Option<FoodType>,
    /// Whether the level went up this tick
    pub leveled_up: bool,
    /// Set when the session ended; the state has already been reset
    pub game_over: Option<GameOver>,
}

/// The game engine that handles all game logic
///
/// The engine owns the configuration and the random source; all session data
/// lives in [`GameState`], which the engine mutates in place.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine, seeded from the config when it carries a seed
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the state for a fresh session
    pub fn new_game(&mut self) -> GameState {
        let origin = self.config.origin;
        let (width, height) = self.config.grid_size_for_level(1);
        let mut state = GameState::new(
            Snake::new(origin, Direction::Right, 1),
            Food::new(origin, FoodType::Normal),
            width,
            height,
        );
        self.reset(&mut state);
        state
    }

    /// Reinitialize every field of the session in place
    pub fn reset(&mut self, state: &mut GameState) {
        let (width, height) = self.config.grid_size_for_level(1);

        state.snake = Snake::new(self.config.origin, Direction::Right, 1);
        state.grid_width = width;
        state.grid_height = height;
        state.score = 0;
        state.level = 1;
        state.tick_interval_ms = self.config.initial_tick_ms;
        state.remaining_time_secs = self.config.remaining_time_secs;
        state.paused = false;
        state.queued_direction = None;
        state.ticks = 0;
        state.obstacles.clear();
        state.traps.clear();
        state.food = Food::new(self.config.origin, FoodType::Normal);

        if let Err(reason) = self.populate_board(state) {
            warn!("Base grid could not be populated: {}", reason);
        }
    }

    /// Feed an input request into the session
    pub fn apply_action(&self, state: &mut GameState, action: Action) {
        match action {
            Action::Move(direction) => {
                self.request_direction(state, direction);
            }
            Action::TogglePause => self.toggle_pause(state),
        }
    }

    /// Queue a steering request for the next tick
    ///
    /// Returns false when the request was dropped: the game is paused or the
    /// direction is the exact reverse of the last move.
    pub fn request_direction(&self, state: &mut GameState, direction: Direction) -> bool {
        if state.paused || state.snake.direction.is_opposite(direction) {
            return false;
        }
        state.queued_direction = Some(direction);
        true
    }

    pub fn toggle_pause(&self, state: &mut GameState) {
        state.paused = !state.paused;
        info!("Game {}", if state.paused { "paused" } else { "resumed" });
    }

    /// Execute one tick of the game
    pub fn advance_tick(&mut self, state: &mut GameState) -> TickResult {
        if state.paused {
            return TickResult::default();
        }

        if let Some(direction) = state.queued_direction.take() {
            if !state.snake.direction.is_opposite(direction) {
                state.snake.direction = direction;
            }
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);

        if let Some(reason) = self.check_collision(state, new_head) {
            return self.game_over(state, reason);
        }

        let ate_food = new_head == state.food.position;
        state.snake.advance_to(new_head, ate_food);
        state.ticks += 1;

        let mut result = TickResult {
            advanced: true,
            ..Default::default()
        };

        if ate_food {
            let kind = state.food.kind;
            self.apply_food_effect(state, kind);
            debug!(
                "Ate {:?} at ({}, {}). Score: {}",
                kind, new_head.x, new_head.y, state.score
            );
            result.ate = Some(kind);

            match self.spawn_food(state) {
                Some(food) => state.food = food,
                None => return self.game_over(state, GameOverReason::NoSpace),
            }
        }

        match self.check_level_progression(state) {
            Ok(leveled_up) => result.leveled_up = leveled_up,
            Err(reason) => return self.game_over(state, reason),
        }

        result
    }

    /// Count the challenge timer down by one second
    ///
    /// Inert unless the time challenge is enabled.
    pub fn countdown(&mut self, state: &mut GameState) -> TickResult {
        if !self.config.time_challenge || state.paused {
            return TickResult::default();
        }

        state.remaining_time_secs = state.remaining_time_secs.saturating_sub(1);
        if state.remaining_time_secs == 0 {
            return self.game_over(state, GameOverReason::TimeUp);
        }

        TickResult::default()
    }

    /// Check if the new head position causes a collision
    pub fn check_collision(&self, state: &GameState, pos: Position) -> Option<GameOverReason> {
        if !state.is_in_bounds(pos) {
            return Some(GameOverReason::Wall);
        }

        if state.obstacles.contains(&pos) {
            return Some(GameOverReason::Obstacle);
        }

        if state.traps.contains(&pos) {
            return Some(GameOverReason::Trap);
        }

        if state.snake.occupies(pos) {
            return Some(GameOverReason::SelfCollision);
        }

        None
    }

    pub fn apply_food_effect(&self, state: &mut GameState, kind: FoodType) {
        match kind {
            FoodType::Normal => state.score += self.config.normal_points,
            FoodType::DoublePoints => state.score += self.config.double_points,
            FoodType::SlowTimer => state.tick_interval_ms += self.config.slow_timer_step_ms,
            FoodType::SpeedUp => {
                state.tick_interval_ms = state
                    .tick_interval_ms
                    .saturating_sub(self.config.speed_up_step_ms)
                    .max(self.config.min_tick_ms);
            }
            FoodType::ReverseControls => {
                state.snake.direction = state.snake.direction.opposite();
            }
        }
    }

    /// Advance at most one level if the score has reached the threshold
    fn check_level_progression(&mut self, state: &mut GameState) -> Result<bool, GameOverReason> {
        if state.score < self.config.level_threshold(state.level) {
            return Ok(false);
        }

        state.level += 1;
        let (width, height) = self.config.grid_size_for_level(state.level);
        state.grid_width = width;
        state.grid_height = height;
        self.populate_board(state)?;

        info!(
            "Level up: level {} ({}x{}), score {}",
            state.level, width, height, state.score
        );
        Ok(true)
    }

    fn game_over(&mut self, state: &mut GameState, reason: GameOverReason) -> TickResult {
        let over = GameOver {
            final_score: state.score,
            level: state.level,
            reason,
        };
        info!(
            "Game over: snake {} at level {} with score {}",
            reason, over.level, over.final_score
        );

        self.reset(state);

        TickResult {
            game_over: Some(over),
            ..Default::default()
        }
    }

    /// Regenerate obstacles, traps and food for the current level and grid
    fn populate_board(&mut self, state: &mut GameState) -> Result<(), GameOverReason> {
        self.spawn_obstacles(state);
        self.spawn_traps(state);
        state.food = self.spawn_food(state).ok_or(GameOverReason::NoSpace)?;
        Ok(())
    }

    /// Place the level's obstacles away from the snake and the food
    pub fn spawn_obstacles(&mut self, state: &mut GameState) {
        let count = self.config.obstacle_count(state.level);
        let mut placed = HashSet::with_capacity(count);

        for _ in 0..count {
            let cell = self.random_free_cell(state.grid_width, state.grid_height, |pos| {
                state.snake.occupies(pos) || pos == state.food.position || placed.contains(&pos)
            });
            match cell {
                Some(pos) => {
                    placed.insert(pos);
                }
                None => {
                    warn!("Placed only {} of {} obstacles", placed.len(), count);
                    break;
                }
            }
        }

        state.obstacles = placed;
    }

    /// Place the level's traps on cells nothing else occupies
    pub fn spawn_traps(&mut self, state: &mut GameState) {
        let count = self.config.trap_count(state.level);
        let mut placed = HashSet::with_capacity(count);
        state.traps.clear();

        for _ in 0..count {
            let cell = self.random_free_cell(state.grid_width, state.grid_height, |pos| {
                state.is_occupied(pos) || placed.contains(&pos)
            });
            match cell {
                Some(pos) => {
                    placed.insert(pos);
                }
                None => {
                    warn!("Placed only {} of {} traps", placed.len(), count);
                    break;
                }
            }
        }

        state.traps = placed;
    }

    /// Pick a food cell clear of the snake, obstacles and traps
    pub fn spawn_food(&mut self, state: &GameState) -> Option<Food> {
        let position = self.random_free_cell(state.grid_width, state.grid_height, |pos| {
            state.snake.occupies(pos)
                || state.obstacles.contains(&pos)
                || state.traps.contains(&pos)
        })?;
        let kind = FoodType::random(&mut self.rng);
        debug!("Food spawned at ({}, {}): {:?}", position.x, position.y, kind);
        Some(Food::new(position, kind))
    }

    /// Rejection-sample a cell, then fall back to scanning for free cells
    fn random_free_cell<F>(&mut self, width: usize, height: usize, is_blocked: F) -> Option<Position>
    where
        F: Fn(Position) -> bool,
    {
        if width == 0 || height == 0 {
            return None;
        }

        for _ in 0..self.config.max_spawn_attempts {
            let x = self.rng.gen_range(0..width) as i32;
            let y = self.rng.gen_range(0..height) as i32;
            let pos = Position::new(x, y);

            if !is_blocked(pos) {
                return Some(pos);
            }
        }

        debug!(
            "No free cell after {} draws, scanning the grid",
            self.config.max_spawn_attempts
        );
        let free: Vec<Position> = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
            .filter(|&pos| !is_blocked(pos))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_engine(seed: u64) -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }

    /// A level 1 game with nothing on the board except food far away
    fn open_game(engine: &mut GameEngine) -> GameState {
        let mut state = engine.new_game();
        state.obstacles.clear();
        state.traps.clear();
        state.food = Food::new(Position::new(15, 15), FoodType::Normal);
        state
    }

    fn food_ahead(state: &mut GameState, kind: FoodType) {
        let ahead = state.snake.head().moved_in_direction(state.snake.direction);
        state.food = Food::new(ahead, kind);
    }

    fn assert_board_clear_of_snake(state: &GameState) {
        for segment in &state.snake.body {
            assert!(!state.obstacles.contains(segment));
            assert!(!state.traps.contains(segment));
            assert_ne!(state.food.position, *segment);
        }
    }

    #[test]
    fn test_new_game() {
        let mut engine = seeded_engine(1);
        let state = engine.new_game();

        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.snake.body, vec![Position::new(5, 5)]);
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.tick_interval_ms, 200);
        assert_eq!(state.remaining_time_secs, 60);
        assert_eq!((state.grid_width, state.grid_height), (20, 20));
        assert_eq!(state.obstacles.len(), 5);
        assert_eq!(state.traps.len(), 3);
        assert!(state.is_in_bounds(state.food.position));
        assert!(!state.obstacles.contains(&state.food.position));
        assert!(!state.traps.contains(&state.food.position));
        assert_board_clear_of_snake(&state);
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut a = seeded_engine(42);
        let mut b = seeded_engine(42);
        assert_eq!(a.new_game(), b.new_game());
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = seeded_engine(2);
        let mut state = open_game(&mut engine);

        let result = engine.advance_tick(&mut state);

        assert!(result.advanced);
        assert!(result.game_over.is_none());
        assert_eq!(state.snake.body, vec![Position::new(6, 5)]);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = seeded_engine(3);
        let mut state = open_game(&mut engine);

        assert!(!engine.request_direction(&mut state, Direction::Left));
        engine.advance_tick(&mut state);

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_quick_turns_cannot_reverse() {
        let mut engine = seeded_engine(4);
        let mut state = open_game(&mut engine);

        // Up then Left before the tick: Left is checked against Right and dropped
        assert!(engine.request_direction(&mut state, Direction::Up));
        assert!(!engine.request_direction(&mut state, Direction::Left));
        engine.advance_tick(&mut state);

        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.snake.head(), Position::new(5, 4));
    }

    #[test]
    fn test_pause_freezes_snake() {
        let mut engine = seeded_engine(5);
        let mut state = open_game(&mut engine);

        engine.apply_action(&mut state, Action::TogglePause);
        for _ in 0..10 {
            let result = engine.advance_tick(&mut state);
            assert!(!result.advanced);
        }
        assert_eq!(state.snake.head(), Position::new(5, 5));

        // Steering is ignored while paused
        assert!(!engine.request_direction(&mut state, Direction::Down));

        engine.apply_action(&mut state, Action::TogglePause);
        engine.advance_tick(&mut state);
        assert_eq!(state.snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = seeded_engine(6);
        let mut state = open_game(&mut engine);
        food_ahead(&mut state, FoodType::Normal);

        let result = engine.advance_tick(&mut state);

        assert_eq!(result.ate, Some(FoodType::Normal));
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 2);
        assert_ne!(state.food.position, Position::new(6, 5));
        assert_board_clear_of_snake(&state);
    }

    #[test]
    fn test_double_points_triggers_level_up() {
        let mut engine = seeded_engine(7);
        let mut state = open_game(&mut engine);
        state.score = 80;
        food_ahead(&mut state, FoodType::DoublePoints);

        let result = engine.advance_tick(&mut state);

        assert_eq!(state.score, 100);
        assert!(result.leveled_up);
        assert_eq!(state.level, 2);
        assert_eq!((state.grid_width, state.grid_height), (25, 25));
        assert_eq!(state.obstacles.len(), 10);
        assert_eq!(state.traps.len(), 6);
        assert_board_clear_of_snake(&state);
        assert!(state.is_in_bounds(state.food.position));
        assert!(!state.obstacles.contains(&state.food.position));
        assert!(!state.traps.contains(&state.food.position));
        assert!(state.obstacles.is_disjoint(&state.traps));
    }

    #[test]
    fn test_level_up_board_is_disjoint_across_seeds() {
        for seed in 0..200 {
            let mut engine = seeded_engine(seed);
            let mut state = open_game(&mut engine);
            state.score = 80;
            food_ahead(&mut state, FoodType::DoublePoints);

            assert!(engine.advance_tick(&mut state).leveled_up, "seed {seed}");

            let food = state.food.position;
            assert!(state.is_in_bounds(food), "seed {seed}");
            assert!(!state.obstacles.contains(&food), "seed {seed}");
            assert!(!state.traps.contains(&food), "seed {seed}");
            assert!(state.obstacles.is_disjoint(&state.traps), "seed {seed}");
            assert_board_clear_of_snake(&state);
        }
    }

    #[test]
    fn test_one_level_per_tick() {
        let mut engine = seeded_engine(8);
        let mut state = open_game(&mut engine);
        state.score = 390;

        engine.advance_tick(&mut state);

        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut engine = seeded_engine(9);
        let mut state = open_game(&mut engine);
        state.score = 99;

        let result = engine.advance_tick(&mut state);

        assert!(!result.leveled_up);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_timer_effects() {
        let mut engine = seeded_engine(10);
        let mut state = engine.new_game();

        engine.apply_food_effect(&mut state, FoodType::SlowTimer);
        assert_eq!(state.tick_interval_ms, 250);

        engine.apply_food_effect(&mut state, FoodType::SpeedUp);
        assert_eq!(state.tick_interval_ms, 230);

        state.tick_interval_ms = 60;
        engine.apply_food_effect(&mut state, FoodType::SpeedUp);
        assert_eq!(state.tick_interval_ms, 50);

        engine.apply_food_effect(&mut state, FoodType::SpeedUp);
        assert_eq!(state.tick_interval_ms, 50);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reverse_controls_flips_direction() {
        let mut engine = seeded_engine(11);
        let mut state = engine.new_game();

        engine.apply_food_effect(&mut state, FoodType::ReverseControls);
        assert_eq!(state.snake.direction, Direction::Left);

        engine.apply_food_effect(&mut state, FoodType::ReverseControls);
        assert_eq!(state.snake.direction, Direction::Right);
    }

    #[test]
    fn test_wall_collision_resets_session() {
        let mut engine = seeded_engine(12);
        let mut state = open_game(&mut engine);
        state.snake = Snake::new(Position::new(0, 5), Direction::Left, 1);
        state.score = 70;
        state.tick_interval_ms = 90;

        let result = engine.advance_tick(&mut state);

        let over = result.game_over.unwrap();
        assert_eq!(over.reason, GameOverReason::Wall);
        assert_eq!(over.final_score, 70);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.snake.body, vec![Position::new(5, 5)]);
        assert_eq!(state.tick_interval_ms, 200);
        assert_eq!((state.grid_width, state.grid_height), (20, 20));
    }

    #[test]
    fn test_reset_after_level_up_restores_base_grid() {
        let mut engine = seeded_engine(13);
        let mut state = open_game(&mut engine);
        state.score = 100;
        engine.advance_tick(&mut state);
        assert_eq!(state.level, 2);

        engine.reset(&mut state);

        assert_eq!(state.level, 1);
        assert_eq!((state.grid_width, state.grid_height), (20, 20));
        assert_eq!(state.obstacles.len(), 5);
        assert_eq!(state.traps.len(), 3);
    }

    #[test]
    fn test_obstacle_and_trap_collisions() {
        let mut engine = seeded_engine(14);

        let mut state = open_game(&mut engine);
        state.obstacles.insert(Position::new(6, 5));
        let result = engine.advance_tick(&mut state);
        assert_eq!(result.game_over.unwrap().reason, GameOverReason::Obstacle);

        let mut state = open_game(&mut engine);
        state.traps.insert(Position::new(6, 5));
        let result = engine.advance_tick(&mut state);
        assert_eq!(result.game_over.unwrap().reason, GameOverReason::Trap);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = seeded_engine(15);
        let mut state = open_game(&mut engine);
        // Body: (5,5), (4,5), (3,5), (2,5), (1,5)
        state.snake = Snake::new(Position::new(5, 5), Direction::Right, 5);

        engine.request_direction(&mut state, Direction::Down);
        assert!(engine.advance_tick(&mut state).game_over.is_none());
        engine.request_direction(&mut state, Direction::Left);
        assert!(engine.advance_tick(&mut state).game_over.is_none());
        // Up from (4,6) lands on (4,5), still part of the body
        engine.request_direction(&mut state, Direction::Up);
        let result = engine.advance_tick(&mut state);

        assert_eq!(
            result.game_over.unwrap().reason,
            GameOverReason::SelfCollision
        );
    }

    #[test]
    fn test_collision_iff_blocked() {
        for seed in 0..40 {
            let mut engine = seeded_engine(seed);
            let mut rng = StdRng::seed_from_u64(seed + 1000);
            let mut state = engine.new_game();

            for _ in 0..200 {
                state.snake.direction = *Direction::ALL.choose(&mut rng).unwrap();
                let next = state.snake.head().moved_in_direction(state.snake.direction);
                let expected = !state.is_in_bounds(next)
                    || state.obstacles.contains(&next)
                    || state.traps.contains(&next)
                    || state.snake.body.contains(&next);

                let result = engine.advance_tick(&mut state);
                assert_eq!(result.game_over.is_some(), expected, "seed {seed}");
            }
        }
    }

    #[test]
    fn test_length_and_uniqueness_invariants() {
        for seed in 0..40 {
            let mut engine = seeded_engine(seed);
            let mut rng = StdRng::seed_from_u64(seed + 2000);
            let mut state = engine.new_game();

            for _ in 0..300 {
                let dir = *Direction::ALL.choose(&mut rng).unwrap();
                engine.request_direction(&mut state, dir);
                let before = state.snake.len();

                let result = engine.advance_tick(&mut state);

                if result.game_over.is_some() {
                    assert_eq!(state.snake.len(), 1);
                } else {
                    let after = state.snake.len();
                    assert!(after == before || after == before + 1);
                    let head = state.snake.head();
                    assert!(state.is_in_bounds(head));
                    assert!(!state.obstacles.contains(&head));
                    assert!(!state.traps.contains(&head));
                }
                let unique: HashSet<Position> = state.snake.body.iter().copied().collect();
                assert_eq!(unique.len(), state.snake.len());
            }
        }
    }

    #[test]
    fn test_spawns_never_overlap_snake() {
        for seed in 0..100 {
            let mut engine = seeded_engine(seed);
            let mut state = engine.new_game();
            state.snake = Snake::new(Position::new(10, 10), Direction::Right, 8);

            engine.spawn_obstacles(&mut state);
            engine.spawn_traps(&mut state);
            state.food = engine.spawn_food(&state).unwrap();

            assert_board_clear_of_snake(&state);
            assert!(state.obstacles.is_disjoint(&state.traps));
            assert!(!state.obstacles.contains(&state.food.position));
        }
    }

    #[test]
    fn test_spawn_falls_back_to_scan() {
        let config = GameConfig {
            max_spawn_attempts: 1,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(16),
            ..config
        });
        // 3x1 grid, two cells taken by the snake
        let mut state = GameState::new(
            Snake::new(Position::new(1, 0), Direction::Right, 2),
            Food::new(Position::new(1, 0), FoodType::Normal),
            3,
            1,
        );

        for _ in 0..20 {
            let food = engine.spawn_food(&state).unwrap();
            assert_eq!(food.position, Position::new(2, 0));
        }

        state.obstacles.insert(Position::new(2, 0));
        assert!(engine.spawn_food(&state).is_none());
    }

    #[test]
    fn test_full_board_ends_session() {
        let mut engine = seeded_engine(17);
        let mut state = open_game(&mut engine);
        // Fill every cell except the one in front of the head, which holds the food
        for y in 0..20 {
            for x in 0..20 {
                let pos = Position::new(x, y);
                if pos != Position::new(5, 5) && pos != Position::new(6, 5) {
                    state.obstacles.insert(pos);
                }
            }
        }
        food_ahead(&mut state, FoodType::Normal);

        let result = engine.advance_tick(&mut state);

        assert_eq!(result.game_over.unwrap().reason, GameOverReason::NoSpace);
        assert_eq!(state.obstacles.len(), 5);
    }

    #[test]
    fn test_countdown() {
        let mut engine = seeded_engine(18);
        let mut state = engine.new_game();
        engine.countdown(&mut state);
        assert_eq!(state.remaining_time_secs, 60);

        let config = GameConfig {
            time_challenge: true,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(18),
            ..config
        });
        let mut state = engine.new_game();
        engine.countdown(&mut state);
        assert_eq!(state.remaining_time_secs, 59);

        state.remaining_time_secs = 1;
        state.score = 30;
        let result = engine.countdown(&mut state);
        let over = result.game_over.unwrap();
        assert_eq!(over.reason, GameOverReason::TimeUp);
        assert_eq!(over.final_score, 30);
        assert_eq!(state.remaining_time_secs, 60);
    }
}
