use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{FoodType, GameOver, GameState, Position};
use crate::metrics::GameMetrics;

/// Window-title style status line
pub fn status_title(state: &GameState) -> String {
    if state.paused {
        return format!(
            "Snake Game - Paused - Level: {} - Score: {}",
            state.level, state.score
        );
    }
    format!(
        "Snake Game - Level: {} - Score: {} - Time Left: {}s",
        state.level, state.score, state.remaining_time_secs
    )
}

pub fn food_color(kind: FoodType) -> Color {
    match kind {
        FoodType::Normal => Color::Cyan,
        FoodType::DoublePoints => Color::Yellow,
        FoodType::SlowTimer => Color::Blue,
        FoodType::SpeedUp => Color::Magenta,
        FoodType::ReverseControls => Color::LightRed,
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame; `game_over` holds the banner of a session that just ended
    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        game_over: Option<&GameOver>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(2), // Legend and controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);
        frame.render_widget(self.render_grid(state), chunks[1]);
        frame.render_widget(self.render_footer(), chunks[2]);

        if let Some(over) = game_over {
            let banner_area = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(30),
                    Constraint::Length(9),
                    Constraint::Min(0),
                ])
                .split(chunks[1])[1];
            let banner_area = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(25),
                    Constraint::Percentage(50),
                    Constraint::Percentage(25),
                ])
                .split(banner_area)[1];

            frame.render_widget(Clear, banner_area);
            frame.render_widget(self.render_game_over(over), banner_area);
        }
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid_height);

        for y in 0..state.grid_height {
            let mut spans = Vec::with_capacity(state.grid_width);

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    Span::styled(
                        "██",
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("██", Style::default().fg(Color::Green))
                } else if pos == state.food.position {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(food_color(state.food.kind))
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.obstacles.contains(&pos) {
                    Span::styled("▓▓", Style::default().fg(Color::Gray))
                } else if state.traps.contains(&pos) {
                    Span::styled("▓▓", Style::default().fg(Color::Red))
                } else {
                    // Cell boundary marker
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let border_color = if state.paused {
            Color::Yellow
        } else {
            Color::White
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(format!(" {} ", status_title(state))),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Level: ", label),
            Span::styled(
                state.level.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Score: ", label),
            Span::styled(
                state.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", state.tick_interval_ms), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(
                format!("{} (L{})", metrics.high_score, metrics.best_level),
                value,
            ),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ];

        if state.paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, over: &GameOver) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(format!("The snake {} on level {}", over.reason, over.level)),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    over.final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_footer(&self) -> Paragraph<'_> {
        let mut legend = vec![Span::raw("Food: ")];
        for kind in FoodType::ALL {
            legend.push(Span::styled("● ", Style::default().fg(food_color(kind))));
            legend.push(Span::raw(format!("{}  ", kind.label())));
        }
        legend.push(Span::styled("▓▓", Style::default().fg(Color::Gray)));
        legend.push(Span::raw(" wall  "));
        legend.push(Span::styled("▓▓", Style::default().fg(Color::Red)));
        legend.push(Span::raw(" trap"));

        let controls = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(vec![Line::from(legend), controls]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
