// src/cli/browser.rs
// Interactive catalog browser: a raw-mode select loop over example cards.
// One record may be expanded at a time; `c` copies the selected snippet.

use std::io::Write;

use anyhow::Result;
use console::{style, Term};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use tracing::debug;

use crate::catalog::CatalogView;
use crate::clipboard::{Clipboard, NullClipboard, SystemClipboard};

use super::display::{render_catalog, CardLimits, ColorTheme};

const HELP_LINE: &str = "↑/↓ select · enter expand · c copy · q quit";

/// Interactive catalog browser
pub struct CatalogBrowser {
    view: CatalogView,
    selected: usize,
    scroll: usize,
    clipboard: Box<dyn Clipboard>,
    theme: ColorTheme,
    limits: CardLimits,
    term: Term,
}

impl CatalogBrowser {
    /// Browser over the system clipboard, falling back to a sink when the
    /// host has none (copies are then dropped, matching the no-feedback
    /// behavior of the copy action itself).
    pub fn new(view: CatalogView) -> Self {
        let clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(e) => {
                debug!("system clipboard unavailable, copies will be dropped: {e}");
                Box::new(NullClipboard)
            }
        };
        Self::with_clipboard(view, clipboard)
    }

    pub fn with_clipboard(view: CatalogView, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            view,
            selected: 0,
            scroll: 0,
            clipboard,
            theme: ColorTheme::default(),
            limits: CardLimits::from_config(),
            term: Term::stdout(),
        }
    }

    /// Run the browser until the user quits.
    pub fn run(&mut self) -> Result<()> {
        if self.view.is_empty() {
            println!("{}", style("No examples found.").dim());
            return Ok(());
        }

        crossterm::terminal::enable_raw_mode()?;
        self.term.hide_cursor()?;

        let result = self.event_loop();

        crossterm::terminal::disable_raw_mode()?;
        self.term.show_cursor()?;
        self.term.clear_screen()?;

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.render()?;

            if let Event::Key(key) = event::read()? {
                if self.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }

    /// Apply one key press. Returns true when the browser should quit.
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Esc | KeyCode::Char('q') => return true,

            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < self.view.len() - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Char('g') => self.selected = 0,
            KeyCode::Char('G') => self.selected = self.view.len() - 1,

            KeyCode::Enter | KeyCode::Char(' ') => self.view.toggle_expand(self.selected),
            KeyCode::Char('c') => self.view.copy_code(self.selected, self.clipboard.as_mut()),

            _ => {}
        }
        false
    }

    fn render(&mut self) -> Result<()> {
        let (rows, _cols) = self.term.size();
        let max_lines = (rows as usize).saturating_sub(4).max(1);
        let cards = render_catalog(&self.view, self.selected, &self.theme, &self.limits);

        // Keep the selected card inside the visible window.
        if self.selected < self.scroll {
            self.scroll = self.selected;
        }
        while self.scroll < self.selected {
            let needed: usize = cards[self.scroll..=self.selected]
                .iter()
                .map(|c| c.len())
                .sum();
            if needed <= max_lines {
                break;
            }
            self.scroll += 1;
        }

        // Raw mode needs explicit carriage returns.
        let mut frame = String::new();
        frame.push_str(&format!("{}\r\n\r\n", style(HELP_LINE).cyan()));
        let mut used = 0;
        for (i, card) in cards.iter().enumerate().skip(self.scroll) {
            if i > self.scroll && used + card.len() > max_lines {
                break;
            }
            for line in card {
                frame.push_str(line);
                frame.push_str("\r\n");
            }
            used += card.len();
        }
        frame.push_str(
            &style(format!("example {}/{}", self.selected + 1, self.view.len()))
                .dim()
                .to_string(),
        );
        frame.push_str("\r\n");

        self.term.clear_screen()?;
        self.term.write_all(frame.as_bytes())?;
        self.term.flush()?;
        Ok(())
    }
}
