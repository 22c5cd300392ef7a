use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::clipboard;
use crate::palette::Palette;
use crate::theme::ThemeTable;

use super::AppEvent;

/// How long a status message (e.g. the copy confirmation) stays visible.
const STATUS_TTL: Duration = Duration::from_millis(1500);

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub palette: Palette,
    pub table: ThemeTable,
    pub hint: String,
    pub hint_active: bool,
    pub selected: usize,
    pub status: Option<String>,
    status_since: Option<Instant>,
    pub show_help: bool,
}

impl App {
    pub fn new(swatches: usize, hint: Option<String>) -> Self {
        let mut rng = rand::rng();
        let mut app = Self {
            running: true,
            palette: Palette::new(swatches, &mut rng),
            table: ThemeTable::builtin(),
            hint: hint.unwrap_or_default(),
            hint_active: false,
            selected: 0,
            status: None,
            status_since: None,
            show_help: false,
        };
        // initial run, mirroring a page-load refresh
        app.refresh_palette();
        app
    }

    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.expire_status(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    pub fn refresh_palette(&mut self) {
        let mut rng = rand::rng();
        let hint = self.hint.clone();
        self.palette.refresh(Some(&hint), &self.table, &mut rng);
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            match key {
                KeyCode::Char('q') => self.running = false,
                _ => self.show_help = false,
            }
            return;
        }
        if self.hint_active {
            self.handle_hint_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char(' ') => self.refresh_palette(),
            KeyCode::Left => self.select_prev(),
            KeyCode::Right => self.select_next(),
            KeyCode::Char('l') | KeyCode::Enter => self.palette.toggle_lock(self.selected),
            KeyCode::Char('c') => self.copy_selected(),
            KeyCode::Char('/') | KeyCode::Char('t') => self.hint_active = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Esc => self.clear_status(),
            _ => {}
        }
    }

    fn handle_hint_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.hint_active = false,
            KeyCode::Enter => {
                self.hint_active = false;
                self.refresh_palette();
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.hint.pop();
            }
            KeyCode::Char(ch) => self.hint.push(ch),
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        if self.palette.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.palette.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.palette.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.palette.len();
    }

    fn copy_selected(&mut self) {
        let Some(swatch) = self.palette.get(self.selected) else {
            return;
        };
        let hex = swatch.color.to_string();
        match clipboard::copy(&hex) {
            Ok(()) => self.set_status(format!("Copied {hex}")),
            // report only; the palette flow is never interrupted
            Err(err) => self.set_status(format!("Copy failed: {err}")),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status = Some(message);
        // re-arming the deadline means last-clear-wins on rapid re-copy
        self.status_since = Some(Instant::now());
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_since = None;
    }

    fn expire_status(&mut self) {
        self.expire_status_at(Instant::now());
    }

    // split out so tests can fabricate the clock
    fn expire_status_at(&mut self, now: Instant) {
        if let Some(since) = self.status_since {
            if now.duration_since(since) >= STATUS_TTL {
                self.clear_status();
            }
        }
    }
}
