//! Interactive play in the terminal
//!
//! Input, the game clock, the countdown and rendering all run on one task and
//! are serialized by `tokio::select!`, so the game state is never touched
//! concurrently.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, Write, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::game::{GameConfig, GameEngine, GameOver, GameState, TickResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::scores::ScoreLog;

const BELL: &str = "\x07";

/// Audible feedback for a game event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SoundCue {
    Food,
    GameOver,
}

impl SoundCue {
    fn bells(self) -> usize {
        match self {
            SoundCue::Food => 1,
            SoundCue::GameOver => 2,
        }
    }
}

/// Clock that fires every `period_ms`, starting one period from now
fn game_clock(period_ms: u64) -> Interval {
    let period = Duration::from_millis(period_ms);
    let mut clock = interval_at(Instant::now() + period, period);
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    clock
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    score_log: ScoreLog,
    should_quit: bool,
    /// Session that just ended; the clock stays stopped while it is shown
    game_over: Option<GameOver>,
    /// Cues raised since the last frame
    pending_sounds: Vec<SoundCue>,
}

impl HumanMode {
    pub fn new(config: GameConfig, score_log: ScoreLog) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_game();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            score_log,
            should_quit: false,
            game_over: None,
            pending_sounds: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "Game started on a {}x{} grid",
            self.state.grid_width, self.state.grid_height
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_ms = self.state.tick_interval_ms;
        let mut tick_timer = game_clock(tick_ms);
        let mut countdown_timer = game_clock(1000);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            let clock_was_running = self.clock_running();

            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick(), if self.clock_running() => {
                    self.on_tick();
                }

                _ = countdown_timer.tick(), if self.clock_running() => {
                    self.on_countdown();
                }

                _ = render_timer.tick() => {
                    self.play_sounds(terminal)?;
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, self.game_over.as_ref());
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            // Food effects change the period; a resumed clock starts a fresh period
            let resumed = !clock_was_running && self.clock_running();
            if resumed || self.state.tick_interval_ms != tick_ms {
                tick_ms = self.state.tick_interval_ms;
                tick_timer = game_clock(tick_ms);
            }
            if resumed {
                countdown_timer = game_clock(1000);
            }
        }

        Ok(())
    }

    fn clock_running(&self) -> bool {
        self.game_over.is_none()
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_key_action(action);
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::GameAction(action) => {
                if self.game_over.is_none() {
                    self.engine.apply_action(&mut self.state, action);
                }
            }
            KeyAction::Acknowledge => {
                if self.game_over.take().is_some() {
                    self.metrics.on_game_start();
                    info!("New game started");
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn on_tick(&mut self) {
        let result = self.engine.advance_tick(&mut self.state);
        self.after_step(result);
    }

    fn on_countdown(&mut self) {
        let result = self.engine.countdown(&mut self.state);
        self.after_step(result);
    }

    fn after_step(&mut self, result: TickResult) {
        if result.ate.is_some() {
            self.cue(SoundCue::Food);
        }
        if let Some(over) = result.game_over {
            self.cue(SoundCue::GameOver);
            self.record_game_over(over);
        }
    }

    fn cue(&mut self, sound: SoundCue) {
        if !self.engine.config().mute {
            self.pending_sounds.push(sound);
        }
    }

    /// Ring the terminal bell for every pending cue
    fn play_sounds(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        if self.pending_sounds.is_empty() {
            return Ok(());
        }
        let out = terminal.backend_mut();
        for sound in self.pending_sounds.drain(..) {
            for _ in 0..sound.bells() {
                queue!(out, Print(BELL)).context("Failed to queue bell")?;
            }
        }
        out.flush().context("Failed to ring bell")?;
        Ok(())
    }

    /// Stop the clock, keep the final score, and append it to the score log
    fn record_game_over(&mut self, over: GameOver) {
        self.game_over = Some(over);
        self.metrics.on_game_over(over);

        if let Err(err) = self.score_log.append(over.final_score) {
            warn!("Could not save score {}: {:#}", over.final_score, err);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
