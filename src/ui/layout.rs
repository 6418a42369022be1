use ratatui::layout::Rect;

/// Width of the scrubber column, in cells.
pub const SCRUBBER_WIDTH: u16 = 3;

const ERROR_PANEL_WIDTH: u16 = 52;
const ERROR_PANEL_HEIGHT: u16 = 8;
const RETRY_LABEL: &str = " Retry ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub list: Rect,
    pub scrubber: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    /// Vertical pointer offset from the scrubber top, at the cell center.
    pub fn scrubber_y(&self, row: u16) -> f32 {
        (row as f32 - self.scrubber.y as f32) + 0.5
    }
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let header_height = area.height.min(1);
    let footer_height = 1.min(area.height.saturating_sub(header_height));
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

    let scrubber_width = SCRUBBER_WIDTH.min(body.width);
    let list = Rect {
        width: body.width - scrubber_width,
        ..body
    };
    let scrubber = Rect {
        x: body.x + list.width,
        width: scrubber_width,
        ..body
    };

    ScreenLayout {
        header,
        body,
        list,
        scrubber,
        footer,
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The error surface, centered in the body.
pub fn error_panel_rect(body: Rect) -> Rect {
    centered_rect_by_size(body, ERROR_PANEL_WIDTH, ERROR_PANEL_HEIGHT)
}

/// The Retry button, on the last inner line of the error panel.
pub fn retry_button_rect(body: Rect) -> Rect {
    let panel = error_panel_rect(body);
    let width = (RETRY_LABEL.len() as u16).min(panel.width.saturating_sub(2));
    Rect {
        x: panel.x + (panel.width.saturating_sub(width)) / 2,
        y: (panel.y + panel.height).saturating_sub(2),
        width,
        height: 1.min(panel.height),
    }
}

pub fn retry_label() -> &'static str {
    RETRY_LABEL
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
