use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::contacts::GroupKey;
use crate::ui::app::App;
use crate::ui::controller::ContactListView;
use crate::ui::layout::{contains, retry_button_rect};

/// Lines moved per wheel notch.
const WHEEL_STEP: isize = 3;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('r') if is_error_view(app) => app.retry(),
        KeyCode::Char('R') => app.refresh(),
        KeyCode::Up => app.controller_mut().list_mut().scroll_by(-1),
        KeyCode::Down => app.controller_mut().list_mut().scroll_by(1),
        KeyCode::PageUp => app.controller_mut().list_mut().page(false),
        KeyCode::PageDown => app.controller_mut().list_mut().page(true),
        KeyCode::Home => app.controller_mut().list_mut().scroll_to_top(),
        KeyCode::End => app.controller_mut().list_mut().scroll_to_bottom(),
        KeyCode::Char('#') => app.jump_to(GroupKey::unknown()),
        KeyCode::Char(ch)
            if ch.is_alphabetic()
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.jump_to(GroupKey::for_name(&ch.to_string()))
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let layout = app.layout();
    let (column, row) = (mouse.column, mouse.row);
    let dragging = app.controller().scrubber().is_dragging();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // The release of the previous press never arrived.
            if dragging {
                app.scrubber_pointer_up();
            }
            if contains(layout.scrubber, column, row) {
                app.scrubber_pointer_down(row);
            } else if is_error_view(app) && contains(retry_button_rect(layout.body), column, row) {
                app.retry();
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if dragging => app.scrubber_pointer_move(row),
        MouseEventKind::Up(MouseButton::Left) if dragging => app.scrubber_pointer_up(),
        MouseEventKind::ScrollDown if contains(layout.list, column, row) => {
            app.controller_mut().list_mut().scroll_by(WHEEL_STEP)
        }
        MouseEventKind::ScrollUp if contains(layout.list, column, row) => {
            app.controller_mut().list_mut().scroll_by(-WHEEL_STEP)
        }
        _ => {}
    }
}

fn is_error_view(app: &App) -> bool {
    matches!(app.controller().view(), ContactListView::Error(_))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
