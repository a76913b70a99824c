//! Application state and event loop
//!
//! One synchronous loop drives everything: draw, poll the terminal with a
//! timeout derived from the tick timer, apply key events, advance the game
//! when a tick is due, and drain completed chat requests. Completion calls
//! themselves run as spawned tokio tasks and report back over a channel.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;

use hoot_core::ai::{AiError, CompletionClient};
use hoot_core::chat::{ChatCancellation, ChatSession, OutboundRequest};
use hoot_core::config::ChatConfig;
use hoot_core::game::{GameEvent, GameState, Phase, TICK_INTERVAL};

use super::input::{InputAction, InputEditor};
use super::render;
use super::sound::{Cue, SoundBank};
use super::ticker::TickTimer;

/// Poll cadence while no game tick is pending, keeps the loading dots moving
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chat,
    Game,
}

/// Result of one spawned completion request
struct CompletionOutcome {
    generation: u64,
    result: Result<String, AiError>,
}

pub struct App {
    pub chat: ChatSession,
    pub input: InputEditor,
    pub game: GameState,
    pub focus: Focus,
    /// Redraw counter, drives the loading animation
    pub frame: u64,
    ticker: TickTimer,
    sounds: SoundBank,
    client: Arc<CompletionClient>,
    cancel: ChatCancellation,
    completion_tx: mpsc::UnboundedSender<CompletionOutcome>,
    completion_rx: mpsc::UnboundedReceiver<CompletionOutcome>,
    should_quit: bool,
}

impl App {
    pub fn new(config: ChatConfig, muted: bool) -> Result<Self> {
        let client = Arc::new(CompletionClient::from_config(&config)?);
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        Ok(Self {
            chat: ChatSession::new(),
            input: InputEditor::new(),
            game: GameState::new(),
            focus: Focus::Chat,
            frame: 0,
            ticker: TickTimer::new(TICK_INTERVAL),
            sounds: SoundBank::new(muted),
            client,
            cancel: ChatCancellation::new(),
            completion_tx,
            completion_rx,
            should_quit: false,
        })
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| render::draw(frame, self))?;
            self.frame = self.frame.wrapping_add(1);

            let timeout = self.ticker.poll_timeout().unwrap_or(IDLE_POLL);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.ticker.consume_due() {
                self.advance_game_tick();
            }
            self.poll_completions();
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Game => Focus::Chat,
                Focus::Chat => Focus::Game,
            };
            return;
        }

        match self.focus {
            Focus::Game => self.handle_game_key(key),
            Focus::Chat => self.handle_chat_key(key),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => self.game_action(),
            _ => {}
        }
    }

    /// One key covers both verbs: activate when NotStarted/Over, flap
    /// while Running.
    fn game_action(&mut self) {
        if self.game.phase == Phase::Running {
            if let Some(event) = self.game.flap() {
                self.apply_game_events(&[event]);
            }
        } else {
            let mut rng = rand::thread_rng();
            if self.game.activate(&mut rng) {
                self.ticker.arm();
            }
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }
        if self.chat.is_loading() {
            // Input line is disabled while a request is in flight.
            return;
        }
        match self.input.handle_key(key.code, key.modifiers) {
            InputAction::Submit => self.submit_chat(),
            InputAction::Continue => {}
        }
    }

    fn submit_chat(&mut self) {
        let Some(request) = self.chat.submit(self.input.buffer()) else {
            return;
        };
        self.input.clear();
        self.spawn_completion(request);
    }

    fn spawn_completion(&self, request: OutboundRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.completion_tx.clone();
        let token = self.cancel.child_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                result = client.complete(&request.messages) => {
                    // A closed receiver means the app is shutting down.
                    let _ = tx.send(CompletionOutcome {
                        generation: request.generation,
                        result,
                    });
                }
            }
        });
    }

    fn poll_completions(&mut self) {
        while let Ok(outcome) = self.completion_rx.try_recv() {
            self.chat.apply_completion(outcome.generation, outcome.result);
        }
    }

    fn advance_game_tick(&mut self) {
        let mut rng = rand::thread_rng();
        let events = self.game.tick(&mut rng);
        self.apply_game_events(&events);
        if self.game.phase != Phase::Running {
            self.ticker.disarm();
        }
    }

    fn apply_game_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Flapped => self.sounds.play(Cue::Flap),
                GameEvent::Died => self.sounds.play(Cue::Death),
                GameEvent::Scored => debug!(score = self.game.score, "obstacle passed"),
            }
        }
    }

    /// Release scoped resources; safe to call more than once.
    fn shutdown(&mut self) {
        self.cancel.cancel();
        self.ticker.disarm();
    }
}

/// Set up the terminal, run the app, and always restore the terminal.
pub async fn run(mut app: App) -> Result<()> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), terminal::EnterAlternateScreen)?;
    scopeguard::defer! {
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = app.event_loop(&mut terminal);
    app.shutdown();
    result
}
