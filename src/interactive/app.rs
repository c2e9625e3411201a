//! TUI application state and logic
//!
//! The drag-and-drop variant: letters are picked up from the scramble tray
//! with the mouse and dropped into the drop zone. The drop position maps the
//! pointer column onto the zone width, so releasing further right inserts
//! further into the word. Typing a letter places its first free token at the
//! end of the word as a keyboard fallback.

use super::TOKEN_WIDTH;
use crate::game::{Feedback, Game, GameEvent};
use crate::store::Store;
use crate::words::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Synthetic drop coordinates that always append at the end of the word
const APPEND_DROP: (u16, u16) = (99, 100);

/// Application state
pub struct App<W: WordSource, S: Store> {
    pub game: Game<W, S>,
    pub messages: Vec<Feedback>,
    pub should_quit: bool,
    /// Scramble slot currently being dragged, for highlighting
    pub dragging: Option<usize>,
    /// Inner rect of the tray, recorded at render time for hit-testing
    pub tray_area: Option<Rect>,
    /// Inner rect of the drop zone, recorded at render time for hit-testing
    pub zone_area: Option<Rect>,
}

impl<W: WordSource, S: Store> App<W, S> {
    #[must_use]
    pub fn new(game: Game<W, S>) -> Self {
        Self {
            game,
            messages: vec![
                Feedback::info("Welcome! Drag the letters into the box to spell the word."),
                Feedback::info("Enter submits, 'p' passes, 'n' starts over, 'q' quits."),
            ],
            should_quit: false,
            dragging: None,
            tray_area: None,
            zone_area: None,
        }
    }

    /// Run an event through the game and keep its feedback for display
    fn dispatch(&mut self, event: GameEvent) {
        for feedback in self.game.apply(event) {
            self.add_message(feedback);
        }
    }

    pub fn add_message(&mut self, feedback: Feedback) {
        self.messages.push(feedback);

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.state().is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.dispatch(GameEvent::Reset),
                _ => {
                    // In the terminal state, ignore other keys
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.dispatch(GameEvent::Reset),
            KeyCode::Char('p') => self.dispatch(GameEvent::Pass),
            KeyCode::Enter => self.dispatch(GameEvent::Submit),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.place_by_letter(c),
            _ => {}
        }
    }

    /// Keyboard fallback: place the first free token of this letter at the
    /// end of the word
    fn place_by_letter(&mut self, c: char) {
        let letter = c.to_ascii_lowercase();
        let state = self.game.state();
        let slot = state
            .scrambled
            .chars()
            .enumerate()
            .find(|&(slot, ch)| ch == letter && !state.arrangement.is_placed(slot))
            .map(|(slot, _)| slot);

        if let Some(slot) = slot {
            self.dispatch(GameEvent::PickUp { slot });
            let (x, zone_width) = APPEND_DROP;
            self.dispatch(GameEvent::Drop { x, zone_width });
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.game.state().is_over() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start_drag(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.finish_drag(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// A press over a tray token or a placed letter starts a drag
    fn start_drag(&mut self, col: u16, row: u16) {
        if let Some(slot) = self.tray_slot_at(col, row) {
            if !self.game.state().arrangement.is_placed(slot) {
                self.dragging = Some(slot);
                self.dispatch(GameEvent::PickUp { slot });
            }
        } else if let Some(slot) = self.zone_slot_at(col, row) {
            // Re-drag an already-placed letter to reorder it
            self.dragging = Some(slot);
            self.dispatch(GameEvent::PickUp { slot });
        }
    }

    /// A release finishes the drag; outside the zone the drop is invalid
    fn finish_drag(&mut self, col: u16, row: u16) {
        if self.dragging.take().is_none() {
            return;
        }

        let drop = match self.zone_area {
            Some(zone) if contains(zone, col, row) => GameEvent::Drop {
                x: col - zone.x,
                zone_width: zone.width,
            },
            _ => GameEvent::Drop {
                x: 0,
                zone_width: 0,
            },
        };
        self.dispatch(drop);
    }

    /// Map a pointer position to a scramble tray slot
    fn tray_slot_at(&self, col: u16, row: u16) -> Option<usize> {
        let tray = self.tray_area?;
        if !contains(tray, col, row) {
            return None;
        }

        let slot = usize::from((col - tray.x) / TOKEN_WIDTH);
        (slot < self.game.state().scrambled.len()).then_some(slot)
    }

    /// Map a pointer position to the origin slot of a placed letter
    fn zone_slot_at(&self, col: u16, row: u16) -> Option<usize> {
        let zone = self.zone_area?;
        if !contains(zone, col, row) {
            return None;
        }

        let index = usize::from((col - zone.x) / TOKEN_WIDTH);
        self.game
            .state()
            .arrangement
            .placed()
            .get(index)
            .map(|p| p.origin_slot)
    }
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, S: Store>(app: App<W, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource, S: Store>(
    terminal: &mut Terminal<B>,
    mut app: App<W, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &mut app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
