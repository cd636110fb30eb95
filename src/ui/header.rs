use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::deck::DeckState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SAVE_BUTTON};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, deck: &DeckState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let status = match deck.position() {
            Some((_, total)) => Span::styled(format!("🟢 {total} recipes"), text_style.fg(SAVE_BUTTON)),
            None => Span::styled("loading…".to_string(), text_style),
        };

        let line = Line::from(vec![
            Span::styled("  🍽  ", text_style),
            Span::styled("MealDeck", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("themealdb.com", text_style),
            Span::styled("  │  ", separator_style),
            status,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
