use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::fetch::Recipe;
use crate::ui::deck::SwipeDirection;
use crate::ui::theme::{
    BUTTON_TEXT, CARD_BORDER, CARD_LABEL, CARD_TITLE, CATEGORY_TAG, CATEGORY_TAG_BG, CUISINE_TAG,
    CUISINE_TAG_BG, SAVE_BUTTON, SKIP_BUTTON,
};

const SKIP_LABEL: &str = "[ Skip ]";
const SAVE_LABEL: &str = "[ Save ]";

/// One recipe rendered as a swipeable card.
pub struct CardView<'a> {
    recipe: &'a Recipe,
    in_flight: bool,
}

impl<'a> CardView<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self {
            recipe,
            in_flight: false,
        }
    }

    /// Dim the card while it slides (the fade of the original transition).
    pub fn in_flight(mut self, in_flight: bool) -> Self {
        self.in_flight = in_flight;
        self
    }

    fn base_style(&self) -> Style {
        if self.in_flight {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        }
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = self.base_style();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(CARD_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 2 {
            return;
        }

        let label_style = base.fg(CARD_LABEL);
        let mut lines = vec![
            Line::from(Span::styled(
                "· · · · · · · · · · · ·",
                label_style.add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(self.recipe.thumbnail.clone(), label_style)),
            Line::from(Span::styled(
                "· · · · · · · · · · · ·",
                label_style.add_modifier(Modifier::DIM),
            )),
            Line::default(),
            Line::from(Span::styled(
                self.recipe.name.clone(),
                base.fg(CARD_TITLE).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Category: ", label_style),
                Span::styled(
                    format!(" {} ", self.recipe.category),
                    base.fg(CATEGORY_TAG).bg(CATEGORY_TAG_BG),
                ),
            ]),
            Line::from(vec![
                Span::styled("Cuisine:  ", label_style),
                Span::styled(
                    format!(" {} ", self.recipe.area),
                    base.fg(CUISINE_TAG).bg(CUISINE_TAG_BG),
                ),
            ]),
        ];
        lines.truncate(inner.height.saturating_sub(2) as usize);

        let body = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(lines)
            .style(base)
            .alignment(Alignment::Left)
            .render(body, buf);

        let Some((skip, save)) = button_rects(area) else {
            return;
        };
        Paragraph::new(Span::styled(SKIP_LABEL, base.fg(BUTTON_TEXT).bg(SKIP_BUTTON)))
            .alignment(Alignment::Center)
            .render(skip, buf);
        Paragraph::new(Span::styled(SAVE_LABEL, base.fg(BUTTON_TEXT).bg(SAVE_BUTTON)))
            .alignment(Alignment::Center)
            .render(save, buf);
    }
}

/// Rects of the Skip and Save buttons inside a card rect, when it is tall
/// and wide enough to carry them.
pub fn button_rects(card: Rect) -> Option<(Rect, Rect)> {
    if card.height < 5 || card.width < 12 {
        return None;
    }
    let inner_x = card.x + 1;
    let inner_width = card.width - 2;
    let gap = 2;
    let button_width = (inner_width - gap) / 2;
    let y = card.y + card.height - 2;

    let skip = Rect {
        x: inner_x,
        y,
        width: button_width,
        height: 1,
    };
    let save = Rect {
        x: inner_x + inner_width - button_width,
        y,
        width: button_width,
        height: 1,
    };
    Some((skip, save))
}

/// Map a click position to the button it lands on.
pub fn button_hit(card: Rect, column: u16, row: u16) -> Option<SwipeDirection> {
    let (skip, save) = button_rects(card)?;
    let position = Position::new(column, row);
    if skip.contains(position) {
        Some(SwipeDirection::Backward)
    } else if save.contains(position) {
        Some(SwipeDirection::Forward)
    } else {
        None
    }
}
