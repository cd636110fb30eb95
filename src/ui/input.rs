use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::ui::app::App;
use crate::ui::card::button_hit;
use crate::ui::deck::SwipeDirection;
use crate::ui::layout::{card_rect, layout_regions};

/// Route a key event into the app.
///
/// ArrowLeft/ArrowRight are the swipe bindings; the quit chords end the
/// session; everything else is ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Left => app.swipe(SwipeDirection::Backward),
        KeyCode::Right => app.swipe(SwipeDirection::Forward),
        _ => {}
    }
}

/// Route a mouse event into the app: a left click on the Skip or Save
/// button swipes in that button's direction.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some(direction) = button_under(app, mouse.column, mouse.row) else {
        return;
    };
    app.swipe(direction);
}

/// Hit-test a screen position against the settled card's buttons.
fn button_under(app: &App, column: u16, row: u16) -> Option<SwipeDirection> {
    if !app.deck().is_ready() {
        return None;
    }
    let (cols, rows) = app.size();
    let area = Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    };
    let (_, body, _) = layout_regions(area);
    let card = card_rect(body, 0, 1.0);
    button_hit(card, column, row)
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char(ch) => {
            ch.eq_ignore_ascii_case(&'q') && key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}
