use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::contacts::FetchError;
use crate::ui::app::App;
use crate::ui::controller::ContactListView;
use crate::ui::layout::{error_panel_rect, retry_button_rect, retry_label, ScreenLayout};
use crate::ui::scrubber::{render_bubble, ScrubberWidget};
use crate::ui::section_list::SectionListWidget;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK,
};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = app.layout();
    let controller = app.controller();
    let count: usize = controller
        .groups()
        .iter()
        .map(|group| group.contacts.len())
        .sum();

    render_header(frame, layout.header, count);
    frame.render_widget(Clear, layout.body);

    let view = controller.view();
    match view {
        ContactListView::Blank => {}
        ContactListView::Spinner => {
            render_spinner(frame, layout.body, "Loading contacts...", app.animation_tick());
        }
        ContactListView::Sections {
            list,
            scrubber,
            refreshing,
        } => {
            if list.rows().is_empty() {
                let empty = Paragraph::new("No contacts")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(HEADER_SEPARATOR));
                frame.render_widget(empty, centered_line(layout.list));
            } else {
                frame.render_widget(SectionListWidget::new(list), layout.list);
            }
            frame.render_widget(ScrubberWidget::new(scrubber), layout.scrubber);
            render_bubble(frame, scrubber, layout.scrubber);
            if refreshing {
                render_refresh_badge(frame, &layout, app.animation_tick());
            }
        }
        ContactListView::Error(error) => render_error(frame, layout.body, error),
    }

    render_footer(frame, layout.footer, &view);
}

fn render_header(frame: &mut Frame, area: Rect, count: usize) {
    let line = Line::from(vec![
        Span::styled(
            " Contacts",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(count.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &ContactListView<'_>) {
    let hints = match view {
        ContactListView::Error(_) => "r: Retry  q: Quit",
        ContactListView::Sections { .. } => {
            "Drag the index or type a letter to jump  ↑/↓: Scroll  R: Refresh  q: Quit"
        }
        ContactListView::Blank | ContactListView::Spinner => "q: Quit",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", hints),
        Style::default().fg(HEADER_SEPARATOR),
    )))
    .style(Style::default().bg(ACTIVE_HIGHLIGHT));
    frame.render_widget(footer, area);
}

fn spinner_frame(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// Render the full-body loading indicator.
fn render_spinner(frame: &mut Frame, area: Rect, message: &str, animation_tick: u8) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(animation_tick)),
            Style::default().fg(STATUS_OK),
        ),
        Span::styled(message, Style::default().fg(HEADER_TEXT)),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_line(area));
}

/// Loading indicator overlaid on the list while stale data stays visible.
fn render_refresh_badge(frame: &mut Frame, layout: &ScreenLayout, animation_tick: u8) {
    let text = format!(" {} Refreshing ", spinner_frame(animation_tick));
    let width = (text.chars().count() as u16).min(layout.list.width);
    if width == 0 || layout.list.height == 0 {
        return;
    }
    let area = Rect {
        x: layout.list.x + layout.list.width - width,
        y: layout.list.y,
        width,
        height: 1,
    };
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default().fg(STATUS_OK).bg(ACTIVE_HIGHLIGHT),
        )),
        area,
    );
}

/// Render the error surface with its Retry button.
fn render_error(frame: &mut Frame, body: Rect, error: &FetchError) {
    let panel = error_panel_rect(body);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Contacts ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let detail_width = inner.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", error.user_message()),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", truncate_error(&error.to_string(), detail_width)),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let button = retry_button_rect(body);
    let button_style = Style::default()
        .fg(HEADER_TEXT)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(retry_label(), button_style)), button);
}

/// Truncate error message to fit in the panel.
fn truncate_error(error: &str, max_len: usize) -> String {
    if error.chars().count() <= max_len {
        error.to_string()
    } else {
        let kept: String = error.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One-line rect at the vertical middle of `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    }
}
