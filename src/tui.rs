use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::Frame;

use crate::error::Result;
use crate::fmt::cop;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Rgb(249, 191, 32))
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const VALUE_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

/// Format a COP amount as a colored Span.
pub fn value_span(value: u64) -> Span<'static> {
    Span::styled(cop(value), VALUE_STYLE)
}

/// Wraps to `width` columns and reports how many terminal rows the result
/// needs (at least one, so empty strings still occupy a row).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let rows = wrapped.lines().count().max(1) as u16;
    (wrapped, rows)
}

// ---------------------------------------------------------------------------
// Interactive view infrastructure
// ---------------------------------------------------------------------------

pub enum ViewAction {
    Continue,
    Close,
}

pub trait InteractiveView {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> ViewAction;
}

/// Reads one terminal event. Key presses come back as Some; anything else
/// (resize, focus, key release) is None so the caller redraws.
fn poll_key_press() -> Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Run an interactive ratatui view. Sets up the terminal, event loop and
/// panic hook, then restores the terminal on exit.
pub fn run_view(view: &mut dyn InteractiveView) -> Result<()> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| view.draw(frame)) {
            break Err(e.into());
        }
        let key = match poll_key_press() {
            Err(e) => break Err(e),
            Ok(None) => continue,
            Ok(Some(key)) => key,
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            break Ok(());
        }
        if let ViewAction::Close = view.handle_key(key.code) {
            break Ok(());
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}
