//! Game pane
//!
//! Half-block pixel rendering of the play-field plus the phase overlays.
//! Each terminal cell carries two vertical "pixels": the upper one in the
//! foreground of a `▀`, the lower one in the background.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use hoot_core::game::{
    GameState, Phase, BIRD_SIZE, BIRD_X, GAP_HEIGHT, GROUND_STRIP_H, OBSTACLE_W, PLAYFIELD_H,
    PLAYFIELD_W,
};

use super::super::app::{App, Focus};
use super::border_style;

// Palette
const SKY_TOP: (u8, u8, u8) = (70, 180, 200);
const SKY_BOTTOM: (u8, u8, u8) = (190, 232, 245);
const PIPE: Color = Color::Rgb(100, 170, 40);
const GROUND: Color = Color::Rgb(180, 120, 60);
const BIRD: Color = Color::Rgb(245, 200, 66);

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Flappy Owl ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(app.focus == Focus::Game));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    paint_playfield(frame, inner, &app.game);
    if inner.height > 2 {
        paint_score(frame, inner, &app.game);
    }

    match app.game.phase {
        Phase::NotStarted => overlay(frame, inner, "Flappy Owl", None, "space to start"),
        Phase::Over => overlay(frame, inner, "Game Over", Some(app.game.score), "space to play again"),
        Phase::Running => {}
    }
}

fn paint_playfield(frame: &mut Frame, area: Rect, state: &GameState) {
    let buf = frame.buffer_mut();
    for row in 0..area.height {
        for col in 0..area.width {
            let top = sample(state, area, col, row, false);
            let bottom = sample(state, area, col, row, true);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol("▀");
                cell.set_fg(top);
                cell.set_bg(bottom);
            }
        }
    }
}

/// Color of one half-block pixel, sampled at its center
fn sample(state: &GameState, area: Rect, col: u16, row: u16, lower: bool) -> Color {
    let x = (col as f32 + 0.5) * PLAYFIELD_W / area.width as f32;
    let half = row as f32 * 2.0 + if lower { 1.5 } else { 0.5 };
    let y = half * PLAYFIELD_H / (area.height as f32 * 2.0);
    color_at(state, x, y)
}

/// Painter's order: sky, obstacle, ground strip, bird on top
fn color_at(state: &GameState, x: f32, y: f32) -> Color {
    if x >= BIRD_X && x < BIRD_X + BIRD_SIZE && y >= state.bird_y && y < state.bird_y + BIRD_SIZE {
        return BIRD;
    }
    if y >= PLAYFIELD_H - GROUND_STRIP_H {
        return GROUND;
    }
    if x >= state.obstacle_x
        && x < state.obstacle_x + OBSTACLE_W
        && (y < state.gap_top || y >= state.gap_top + GAP_HEIGHT)
    {
        return PIPE;
    }
    sky(y)
}

fn sky(y: f32) -> Color {
    let t = (y / PLAYFIELD_H).clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color::Rgb(
        mix(SKY_TOP.0, SKY_BOTTOM.0),
        mix(SKY_TOP.1, SKY_BOTTOM.1),
        mix(SKY_TOP.2, SKY_BOTTOM.2),
    )
}

fn paint_score(frame: &mut Frame, area: Rect, state: &GameState) {
    let text = state.score.to_string();
    let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
    frame.buffer_mut().set_string(
        x,
        area.y + 1,
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );
}

fn overlay(frame: &mut Frame, area: Rect, title: &str, score: Option<u32>, hint: &str) {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    if let Some(score) = score {
        lines.push(Line::from(format!("Score: {score}")));
    }
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::Gray),
    )));

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = area.width.saturating_sub(4).min(28).max(1);
    let panel = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, panel);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(paragraph, panel);
}
