//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{FRAME_POLL_MS, SPLASH_DURATION_MS};
use crate::events::Event as PageEvent;
use crate::overlay::ModalAction;
use crate::ui::page::components::overlays::modal_area;
use crate::ui::page::{PageState, Trigger, body_rows, render_page};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The page itself.
    Page,
}

/// Charity keys carried by the vote controls, in hotkey order.
const VOTE_KEYS: [&str; 3] = ["unicef", "doctors", "environment"];

/// What a key press asks the app to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Trigger(Trigger),
    /// Vote with the charity key of the pressed vote control.
    Vote(&'static str),
    /// Move the sticker hover left or right.
    CycleSticker { forward: bool },
    Quit,
    Ignore,
}

/// Map a key press on the page to an action. The trade modal captures input
/// while it is open.
pub fn key_action(state: &PageState, code: KeyCode) -> KeyAction {
    if state.modal.is_some() {
        return match code {
            KeyCode::Char('c') => KeyAction::Trigger(Trigger::Modal(ModalAction::ConnectWallet)),
            KeyCode::Char('l') => KeyAction::Trigger(Trigger::Modal(ModalAction::LearnMore)),
            KeyCode::Char('x') | KeyCode::Esc => KeyAction::Trigger(Trigger::Modal(ModalAction::Close)),
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('t') => KeyAction::Trigger(Trigger::OpenTradeModal),
        KeyCode::Char('f') => KeyAction::Trigger(Trigger::ScrollToFeed),
        KeyCode::Char('r') => KeyAction::Trigger(Trigger::RefreshFeed),
        KeyCode::Char('p') => KeyAction::Trigger(Trigger::TogglePause),
        KeyCode::Char(c @ '1'..='3') => KeyAction::Vote(VOTE_KEYS[c as usize - '1' as usize]),
        KeyCode::Left => KeyAction::CycleSticker { forward: false },
        KeyCode::Right => KeyAction::CycleSticker { forward: true },
        KeyCode::Char('s') => KeyAction::Trigger(Trigger::StickerClick(
            state.effects.hovered_sticker().unwrap_or(0),
        )),
        KeyCode::Char('m') => {
            if state.effects.card_hovered() {
                KeyAction::Trigger(Trigger::CardLeave)
            } else {
                KeyAction::Trigger(Trigger::CardEnter)
            }
        }
        KeyCode::Up => KeyAction::Trigger(Trigger::ScrollUp),
        KeyCode::Down => KeyAction::Trigger(Trigger::ScrollDown),
        _ => KeyAction::Ignore,
    }
}

/// Map a mouse event inside a terminal of size `area` to a trigger.
pub fn mouse_trigger(state: &PageState, mouse: MouseEvent, area: Rect) -> Option<Trigger> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if state.modal.is_some() => {
            let modal = modal_area(area);
            let inside = mouse.column >= modal.x
                && mouse.column < modal.x + modal.width
                && mouse.row >= modal.y
                && mouse.row < modal.y + modal.height;
            (!inside).then_some(Trigger::Modal(ModalAction::Backdrop))
        }
        MouseEventKind::ScrollUp if state.modal.is_none() => Some(Trigger::ScrollUp),
        MouseEventKind::ScrollDown if state.modal.is_none() => Some(Trigger::ScrollDown),
        _ => None,
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// The page, loaded when the splash screen ends.
    state: Box<PageState>,

    /// Receives feed timer events.
    event_receiver: mpsc::Receiver<PageEvent>,

    /// Broadcasts shutdown signal to background tasks.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        state: Box<PageState>,
        event_receiver: mpsc::Receiver<PageEvent>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state,
            event_receiver,
            shutdown_sender,
        }
    }

    fn show_page(&mut self, now: Instant) {
        self.state.load(now);
        self.current_screen = Screen::Page;
    }

    /// Handle a key press; returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        if self.current_screen == Screen::Splash {
            // Any key press will skip the splash screen
            if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
                return true;
            }
            self.show_page(now);
            return false;
        }

        let result = match key_action(&self.state, code) {
            KeyAction::Quit => return true,
            KeyAction::Ignore => Ok(()),
            KeyAction::Trigger(trigger) => self.state.dispatch(trigger, now),
            KeyAction::Vote(key) => self.state.cast_vote_by_key(key, now),
            KeyAction::CycleSticker { forward } => self.state.cycle_sticker_hover(forward, now),
        };
        if let Err(e) = result {
            log::debug!("Key {:?} not handled: {}", code, e);
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, now: Instant) {
        if self.current_screen == Screen::Splash {
            return;
        }
        if let Some(trigger) = mouse_trigger(&self.state, mouse, area) {
            let _ = self.state.dispatch(trigger, now);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            // Ticks fired during the splash are dropped, though they still
            // count toward --max-ticks
            if app.current_screen == Screen::Page {
                app.state.add_event(event);
            }
        }

        let now = Instant::now();
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        // Handle splash-to-page transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.show_page(now);
        }
        if app.current_screen == Screen::Page {
            app.state.resize(body_rows(area.height), now);
            app.state.update(now);
        }
        terminal.draw(|f| render(f, &app, now))?;

        // Poll for input events
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }
                    if app.handle_key(key.code, now) {
                        // Send shutdown signal to background tasks
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, area, now),
                _ => {}
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App, now: Instant) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Page => render_page(f, &app.state, now),
    }
}
