//! Full-screen player
//!
//! Shows the typewriter banner centered on an alternate screen with a
//! footer of key hints. Keys: `q`/`Esc`/`Ctrl-C` quit, `r` restarts the
//! phrase cycle.

use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};

use super::app::App;
use super::footer::render_footer;
use super::settings::PlaySettings;
use crate::render::Banner;
use crate::typewriter::{Subscription, Typewriter};

/// Longest time between input polls; also bounds update latency.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const FOOTER_KEYS: &[(&str, &str)] = &[("q", "quit"), ("r", "restart")];

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Restart the phrase cycle
    Restart,
    /// Exit the player
    Quit,
}

/// Map a key press to a control flow decision.
pub fn handle_key(key: KeyEvent) -> InputResult {
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char('r') => InputResult::Restart,
        _ => InputResult::Continue,
    }
}

/// Full-screen player state.
pub struct PlayApp {
    app: App,
    typewriter: Typewriter,
    updates: Subscription,
    settings: PlaySettings,
    text: String,
}

impl PlayApp {
    /// Take over the terminal and start watching `typewriter`.
    pub fn new(typewriter: Typewriter, settings: PlaySettings) -> Result<Self> {
        let app = App::new()?;
        let updates = typewriter.subscribe();
        Ok(Self {
            app,
            typewriter,
            updates,
            settings,
            text: String::new(),
        })
    }

    /// Run until the user quits or the configured duration passes.
    ///
    /// The typewriter is disposed before returning.
    pub fn run(mut self) -> Result<()> {
        let started = Instant::now();
        let mut needs_render = true;
        let mut caret_visible = true;

        loop {
            let elapsed = started.elapsed();
            if self.settings.expired(elapsed) {
                break;
            }

            // One read per frame: the subscription always yields the latest text
            match self.updates.try_recv() {
                Ok(text) => {
                    self.text = text;
                    needs_render = true;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("typewriter stopped unexpectedly");
                    return Ok(());
                }
            }

            let visible = self.settings.caret_blink.visible(elapsed);
            if visible != caret_visible {
                caret_visible = visible;
                needs_render = true;
            }

            if needs_render {
                self.draw(caret_visible)?;
                needs_render = false;
            }

            let timeout = self.settings.wait_budget(elapsed, FRAME_INTERVAL);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => match handle_key(key) {
                        InputResult::Quit => break,
                        InputResult::Restart => {
                            tracing::debug!("restart requested");
                            self.typewriter.restart();
                        }
                        InputResult::Continue => {}
                    },
                    Event::Resize(_, _) => needs_render = true,
                    _ => {}
                }
            }
        }

        self.typewriter.dispose();
        Ok(())
    }

    fn draw(&mut self, caret_visible: bool) -> Result<()> {
        let settings = &self.settings;
        let text = &self.text;

        self.app.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            let banner = Banner::new(text, &settings.theme)
                .prefix(&settings.prefix)
                .caret(&settings.caret)
                .caret_visible(caret_visible);
            frame.render_widget(banner, chunks[0]);

            render_footer(frame, chunks[1], FOOTER_KEYS, &settings.theme);
        })
    }
}
