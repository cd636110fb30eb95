use ratatui::layout::Rect;

pub const CARD_MAX_WIDTH: u16 = 48;
pub const CARD_HEIGHT: u16 = 16;

/// Split the frame into header, body, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Width the card renders at inside a frame `frame_width` cells wide.
pub fn card_width(frame_width: u16) -> u16 {
    frame_width.saturating_sub(4).min(CARD_MAX_WIDTH).max(1)
}

/// Centered card rect, shifted by the animation's horizontal `offset` and
/// narrowed to `scale` of its settled width while in flight. The rect is
/// clipped to `body` so a mid-flight card never paints outside the frame.
pub fn card_rect(body: Rect, offset: i32, scale: f32) -> Rect {
    let full_width = card_width(body.width);
    let width = ((full_width as f32 * scale).round() as u16).clamp(1, full_width);
    let height = body.height.min(CARD_HEIGHT);

    let centered_x = body.x as i32 + (body.width.saturating_sub(width) / 2) as i32;
    let x = centered_x + offset;
    let y = body.y + body.height.saturating_sub(height) / 2;

    let left = x.clamp(body.x as i32, (body.x + body.width) as i32);
    let right = (x + width as i32).clamp(body.x as i32, (body.x + body.width) as i32);

    Rect {
        x: left as u16,
        y,
        width: (right - left) as u16,
        height,
    }
}

/// The line directly under the card, for the "Recipe N of M" indicator.
pub fn position_rect(body: Rect) -> Rect {
    let height = body.height.min(CARD_HEIGHT);
    let card_bottom = body.y + body.height.saturating_sub(height) / 2 + height;
    Rect {
        x: body.x,
        y: card_bottom.min(body.y + body.height.saturating_sub(1)),
        width: body.width,
        height: 1.min(body.height),
    }
}
