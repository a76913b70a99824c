//! Rendering
//!
//! Pure functions of app state; no game or chat logic in here.

mod chat;
mod game;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::Frame;

use super::app::App;

/// Width of the game pane, borders included
const GAME_PANE_W: u16 = 46;

pub fn draw(frame: &mut Frame, app: &App) {
    let [game_area, chat_area] =
        Layout::horizontal([Constraint::Length(GAME_PANE_W), Constraint::Min(30)])
            .areas(frame.area());
    game::render(frame, game_area, app);
    chat::render(frame, chat_area, app);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
