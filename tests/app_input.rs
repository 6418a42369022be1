//! Key, mouse and render behavior of the terminal shell.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use rolodex::config::Config;
use rolodex::contacts::{
    Contact, ContactStore, FetchError, FetchOutcome, FetchRequest, GroupKey, SampleContactStore,
};
use rolodex::ui::app::App;
use rolodex::ui::controller::ContactListView;
use rolodex::ui::events::AppEvent;
use rolodex::ui::input::{handle_key, handle_mouse};
use rolodex::ui::layout::retry_button_rect;
use rolodex::ui::render::draw;
use rolodex::ui::scrubber::HitTest;
use rolodex::ui::theme::INDEX_SELECTED_BG;
use std::sync::mpsc;
use std::time::Duration;
use tokio::sync::mpsc as async_mpsc;

struct Harness {
    app: App,
    requests: async_mpsc::UnboundedReceiver<FetchRequest>,
    events: mpsc::Receiver<AppEvent>,
    runtime: tokio::runtime::Runtime,
}

fn harness() -> Harness {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let mut config = Config::default();
    config.scrubber.haptics = false;
    config.scrubber.bubble_hide_delay_ms = 10;

    let (fetch_tx, requests) = async_mpsc::unbounded_channel();
    let (event_tx, events) = mpsc::channel();
    let mut app = App::new(&config, fetch_tx, event_tx, runtime.handle().clone());
    app.on_resize(40, 12);
    app.on_appear();
    Harness {
        app,
        requests,
        events,
        runtime,
    }
}

fn loaded(names: &[&str]) -> Harness {
    let mut h = harness();
    h.app.on_fetch_outcome(FetchOutcome {
        generation: 1,
        result: Ok(names.iter().map(|n| Contact::named(*n)).collect()),
    });
    h
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    handle_mouse(
        app,
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

/// Full-screen harness fed with the bundled sample contacts.
fn sample_loaded() -> Harness {
    let mut h = harness();
    let store = SampleContactStore::new(Duration::ZERO, false);
    let contacts = h.runtime.block_on(store.fetch_contacts()).unwrap();
    h.app.on_fetch_outcome(FetchOutcome {
        generation: 1,
        result: Ok(contacts),
    });
    h.app.on_resize(80, 24);
    h
}

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Labels drawn in the scrubber column, one per cell.
fn index_labels(app: &App) -> Vec<String> {
    let area = app.layout().scrubber;
    let buffer = render(app, 80, 24);
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim()
                .to_string()
        })
        .collect()
}

fn screen(app: &App) -> String {
    let buffer = render(app, 40, 12);
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut h = harness();
        press(&mut h.app, code);
        assert!(h.app.should_quit());
    }

    let mut h = harness();
    handle_key(
        &mut h.app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(h.app.should_quit());
}

#[test]
fn letter_jumps_to_section() {
    let mut h = loaded(&["Ann", "Bob", "Cat", "Dan", "Eve", "Fay", "Gus"]);
    press(&mut h.app, KeyCode::Char('b'));

    let controller = h.app.controller();
    assert_eq!(controller.scrubber().active_key(), Some(&GroupKey::from("B")));
    assert_eq!(controller.list().offset(), 2);
    assert_eq!(controller.list().top_section(), Some(&GroupKey::from("B")));
    assert!(controller.scrubber().bubble_visible());
}

#[test]
fn bubble_timer_event_hides_bubble() {
    let mut h = loaded(&["Ann", "Bob"]);
    press(&mut h.app, KeyCode::Char('b'));
    assert!(h.app.controller().scrubber().bubble_visible());

    let event = h
        .events
        .recv_timeout(Duration::from_secs(5))
        .expect("bubble timer never fired");
    let AppEvent::BubbleTimer { token } = event else {
        panic!("expected BubbleTimer");
    };
    h.app.on_bubble_timer(token);
    assert!(!h.app.controller().scrubber().bubble_visible());
}

#[test]
fn scrubber_drag_with_mouse() {
    let mut h = loaded(&["Ann", "Bob", "Cat"]);
    let scrubber = h.app.layout().scrubber;
    let layout = h.app.controller().scrubber().layout();
    let row_of = |index: usize| scrubber.y + layout.row_top(index).unwrap().floor() as u16;

    mouse(
        &mut h.app,
        MouseEventKind::Down(MouseButton::Left),
        scrubber.x + 1,
        row_of(0),
    );
    assert!(h.app.controller().scrubber().is_dragging());

    // Horizontal drift off the column keeps tracking by row.
    mouse(
        &mut h.app,
        MouseEventKind::Drag(MouseButton::Left),
        0,
        row_of(2),
    );
    assert_eq!(
        h.app.controller().scrubber().active_key(),
        Some(&GroupKey::from("C"))
    );

    mouse(&mut h.app, MouseEventKind::Up(MouseButton::Left), 0, row_of(2));
    assert!(!h.app.controller().scrubber().is_dragging());
    assert!(h.app.controller().scrubber().bubble_visible());
}

#[test]
fn press_after_lost_release_ends_the_drag() {
    let mut h = loaded(&["Ann", "Bob", "Cat"]);
    let scrubber = h.app.layout().scrubber;
    let list = h.app.layout().list;

    mouse(&mut h.app, MouseEventKind::Down(MouseButton::Left), scrubber.x + 1, scrubber.y + 4);
    assert!(h.app.controller().scrubber().is_dragging());

    // The button went up outside the terminal; the next press lands in the list.
    mouse(&mut h.app, MouseEventKind::Down(MouseButton::Left), list.x + 1, list.y + 1);
    let state = h.app.controller().scrubber();
    assert!(!state.is_dragging());
    assert!(state.bubble_visible());
    assert!(state.hide_timer().is_some());

    let event = h
        .events
        .recv_timeout(Duration::from_secs(5))
        .expect("bubble timer never fired");
    let AppEvent::BubbleTimer { token } = event else {
        panic!("expected BubbleTimer");
    };
    h.app.on_bubble_timer(token);
    assert!(!h.app.controller().scrubber().bubble_visible());
}

#[test]
fn retry_from_error_surface() {
    let mut h = harness();
    h.app.on_fetch_outcome(FetchOutcome {
        generation: 1,
        result: Err(FetchError::unavailable("offline")),
    });
    assert!(screen(&h.app).contains("Retry"));

    let button = retry_button_rect(h.app.layout().body);
    mouse(
        &mut h.app,
        MouseEventKind::Down(MouseButton::Left),
        button.x + 1,
        button.y,
    );
    assert!(matches!(h.app.controller().view(), ContactListView::Spinner));

    let _ = h.requests.try_recv();
    assert_eq!(h.requests.try_recv().ok(), Some(FetchRequest { generation: 2 }));
}

#[test]
fn r_key_retries_only_after_failure() {
    let mut h = loaded(&["Ann"]);
    press(&mut h.app, KeyCode::Char('r'));
    // Loaded: lowercase r is a letter jump, not a retry.
    assert!(matches!(
        h.app.controller().view(),
        ContactListView::Sections { refreshing: false, .. }
    ));

    press(&mut h.app, KeyCode::Char('R'));
    assert!(matches!(
        h.app.controller().view(),
        ContactListView::Sections { refreshing: true, .. }
    ));
}

#[test]
fn renders_sections_and_index() {
    let h = loaded(&["Ann", "bob", ""]);
    let text = screen(&h.app);
    assert!(text.contains("Contacts"));
    assert!(text.contains("Ann"));
    assert!(text.contains("bob"));
    assert!(text.contains("(no name)"));
    assert!(text.contains('#'));
}

#[test]
fn renders_spinner_while_loading() {
    let h = harness();
    assert!(screen(&h.app).contains("Loading contacts"));
}

#[test]
fn every_sample_key_keeps_a_target_in_a_short_column() {
    let mut h = sample_loaded();
    let scrubber = h.app.layout().scrubber;
    let keys = h.app.controller().scrubber().keys().to_vec();
    assert_eq!(keys.len(), 28);
    assert!(keys.len() > scrubber.height as usize);

    let layout = h.app.controller().scrubber().layout();
    for index in 0..keys.len() {
        let center = layout.row_center(index).unwrap();
        assert!(center < f32::from(scrubber.height));
        assert_eq!(layout.hit_test(center), HitTest::Row(index));
    }

    let bottom = scrubber.y + scrubber.height - 1;
    mouse(&mut h.app, MouseEventKind::Down(MouseButton::Left), scrubber.x + 1, scrubber.y);
    assert_eq!(h.app.controller().scrubber().active_key(), keys.first());
    mouse(&mut h.app, MouseEventKind::Drag(MouseButton::Left), scrubber.x + 1, bottom);
    assert_eq!(h.app.controller().scrubber().active_key(), keys.last());
    mouse(&mut h.app, MouseEventKind::Up(MouseButton::Left), scrubber.x + 1, bottom);
}

#[test]
fn pressing_a_drawn_index_label_selects_that_key() {
    let mut h = sample_loaded();
    let scrubber = h.app.layout().scrubber;

    let labels = index_labels(&h.app);
    assert_eq!(labels.first().map(String::as_str), Some("#"));
    assert_eq!(labels.last().map(String::as_str), Some("É"));
    assert!(labels.iter().all(|label| !label.is_empty()));

    for (offset, label) in labels.iter().enumerate() {
        let row = scrubber.y + offset as u16;
        mouse(&mut h.app, MouseEventKind::Down(MouseButton::Left), scrubber.x + 1, row);
        mouse(&mut h.app, MouseEventKind::Up(MouseButton::Left), scrubber.x + 1, row);
        let active = h.app.controller().scrubber().active_key().unwrap();
        assert_eq!(active.label(), label.as_str(), "cell {offset}");
        assert_eq!(&index_labels(&h.app)[offset], label);
    }
}

#[test]
fn jumping_to_a_key_without_its_own_cell_draws_it_selected() {
    let mut h = sample_loaded();
    // B's row lies between the centers of the first two cells.
    assert!(!index_labels(&h.app).iter().any(|label| label == "B"));

    press(&mut h.app, KeyCode::Char('b'));
    let offset = index_labels(&h.app)
        .iter()
        .position(|label| label == "B")
        .expect("B is not drawn after jumping to it");

    let scrubber = h.app.layout().scrubber;
    let buffer = render(&h.app, 80, 24);
    assert_eq!(buffer[(scrubber.x, scrubber.y + offset as u16)].bg, INDEX_SELECTED_BG);
}
