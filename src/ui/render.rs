use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::card::CardView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rect, layout_regions, position_rect};
use crate::ui::theme::HEADER_TEXT;

/// Minimum card width the slide may shrink to, the original's scale 0.8.
const MIN_SCALE: f32 = 0.8;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.deck()), header);
    frame.render_widget(Clear, body);

    match app.deck().current_recipe() {
        Some(recipe) => {
            let (offset, scale, in_flight) = match app.animation() {
                Some(animation) => (
                    animation.offset(),
                    MIN_SCALE + (1.0 - MIN_SCALE) * animation.progress(),
                    true,
                ),
                None => (0, 1.0, false),
            };
            let card = card_rect(body, offset, scale);
            frame.render_widget(CardView::new(recipe).in_flight(in_flight), card);

            if let Some((position, total)) = app.deck().position() {
                let indicator = Paragraph::new(Line::from(format!(
                    "Recipe {position} of {total}"
                )))
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
                .alignment(Alignment::Center);
                frame.render_widget(indicator, position_rect(body));
            }
        }
        None => {
            let placeholder = Paragraph::new(Line::from("Loading recipes…"))
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
                .alignment(Alignment::Center);
            let mut line = body;
            line.y = body.y + body.height / 2;
            line.height = 1.min(body.height);
            frame.render_widget(placeholder, line);
        }
    }

    frame.render_widget(Footer::new().widget(footer.width), footer);
}
