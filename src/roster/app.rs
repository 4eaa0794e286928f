use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::models::User;
use super::session::{ManagerSession, ModalState};
use super::store::{UserStore, filter_users};
use super::view;

const POLL_TIMEOUT: Duration = Duration::from_millis(200);

enum KeyOutcome {
    Redraw,
    Exit,
    Ignored,
}

/// Full-screen manager: owns the terminal, the store, and the UI session.
///
/// Reads store/session state, dispatches key events to their operations,
/// and never mutates the collection directly.
pub struct ManagerApp {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    store: UserStore,
    session: ManagerSession,
    selected: usize,
    dirty: bool,
    cleaned_up: bool,
}

impl ManagerApp {
    pub fn new(store: UserStore) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            store,
            session: ManagerSession::new(),
            selected: 0,
            dirty: false,
            cleaned_up: false,
        })
    }

    /// Run the event loop until the user exits, returning the final roster
    /// and whether it changed during the session.
    pub fn run(mut self) -> Result<(UserStore, bool)> {
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                self.draw()?;
                needs_redraw = false;
            }

            if !event::poll(POLL_TIMEOUT)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c'))
                    {
                        break;
                    }

                    let outcome = if self.session.is_modal_open() {
                        self.handle_modal_key(key)
                    } else {
                        self.handle_list_key(key)
                    };

                    match outcome {
                        KeyOutcome::Redraw => needs_redraw = true,
                        KeyOutcome::Exit => break,
                        KeyOutcome::Ignored => {}
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        self.cleanup()?;
        Ok((std::mem::take(&mut self.store), self.dirty))
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                if self.session.search().is_empty() {
                    return KeyOutcome::Exit;
                }
                self.session.set_search("");
                self.clamp_selection();
                KeyOutcome::Redraw
            }
            KeyCode::Tab => {
                self.session
                    .set_status_filter(self.session.status_filter().cycle());
                self.clamp_selection();
                KeyOutcome::Redraw
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                KeyOutcome::Redraw
            }
            KeyCode::Down => {
                if self.selected + 1 < self.visible_len() {
                    self.selected += 1;
                }
                KeyOutcome::Redraw
            }
            KeyCode::Enter => {
                if let Some(user) = self.selected_user() {
                    self.session.open_edit(&user);
                    return KeyOutcome::Redraw;
                }
                KeyOutcome::Ignored
            }
            KeyCode::Char('a') if ctrl => {
                self.session.open_add();
                KeyOutcome::Redraw
            }
            KeyCode::Char('d') if ctrl => {
                if let Some(user) = self.selected_user() {
                    self.dirty |= self.store.delete_user(user.id);
                    self.clamp_selection();
                    return KeyOutcome::Redraw;
                }
                KeyOutcome::Ignored
            }
            KeyCode::Char('t') if ctrl => {
                if let Some(user) = self.selected_user() {
                    self.dirty |= self.store.toggle_status(user.id);
                    // The toggled user may drop out of the filtered view.
                    self.clamp_selection();
                    return KeyOutcome::Redraw;
                }
                KeyOutcome::Ignored
            }
            KeyCode::Backspace => {
                self.session.pop_search();
                self.clamp_selection();
                KeyOutcome::Redraw
            }
            KeyCode::Char(ch) if !ctrl => {
                self.session.push_search(ch);
                self.clamp_selection();
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.session.cancel();
                KeyOutcome::Redraw
            }
            KeyCode::Enter => {
                self.dirty |= self.session.save(&mut self.store);
                self.clamp_selection();
                KeyOutcome::Redraw
            }
            KeyCode::Char('t') if ctrl => {
                // New users always start inactive; the status is only
                // editable for an existing user.
                if self.session.modal() == ModalState::OpenForEdit {
                    self.session.toggle_draft_status();
                    return KeyOutcome::Redraw;
                }
                KeyOutcome::Ignored
            }
            KeyCode::Backspace => {
                self.session.pop_draft_name();
                KeyOutcome::Redraw
            }
            KeyCode::Char(ch) if !ctrl => {
                self.session.push_draft_name(ch);
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn visible_len(&self) -> usize {
        filter_users(
            self.store.users(),
            self.session.search(),
            self.session.status_filter(),
        )
        .len()
    }

    fn selected_user(&self) -> Option<User> {
        filter_users(
            self.store.users(),
            self.session.search(),
            self.session.status_filter(),
        )
        .get(self.selected)
        .map(|user| (*user).clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            store,
            session,
            selected,
            ..
        } = self;
        terminal.draw(|frame| view::draw(frame, store, session, *selected))?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }

        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        self.cleaned_up = true;
        Ok(())
    }
}

impl Drop for ManagerApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
