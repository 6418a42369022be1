use std::sync::mpsc::Sender;
use std::time::Instant;

use ratatui::layout::Rect;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::contacts::{FetchOutcome, FetchRequestSender, GroupKey};
use crate::ui::controller::{ContactListController, ContactListView};
use crate::ui::events::AppEvent;
use crate::ui::haptics::{Haptics, NoHaptics, TerminalBell};
use crate::ui::layout::{screen_layout, ScreenLayout};
use crate::ui::scrubber::HideTimer;

/// Terminal application shell around the contact list screen.
pub struct App {
    should_quit: bool,
    controller: ContactListController,
    layout: ScreenLayout,
    animation_tick: u8,
    events: Sender<AppEvent>,
    runtime: Handle,
}

impl App {
    pub fn new(
        config: &Config,
        fetch: FetchRequestSender,
        events: Sender<AppEvent>,
        runtime: Handle,
    ) -> Self {
        let haptics: Box<dyn Haptics> = if config.scrubber.haptics {
            Box::new(TerminalBell)
        } else {
            Box::new(NoHaptics)
        };
        Self {
            should_quit: false,
            controller: ContactListController::new(&config.scrubber, fetch, haptics),
            layout: ScreenLayout::default(),
            animation_tick: 0,
            events,
            runtime,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &ContactListController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ContactListController {
        &mut self.controller
    }

    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_appear(&mut self) {
        self.controller.on_appear();
    }

    pub fn on_tick(&mut self) {
        if self.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    fn is_loading(&self) -> bool {
        matches!(
            self.controller.view(),
            ContactListView::Spinner | ContactListView::Sections { refreshing: true, .. }
        )
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.layout = screen_layout(Rect::new(0, 0, cols, rows));
        self.controller
            .resize(self.layout.list.height, self.layout.scrubber.height);
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        self.controller.on_fetch_outcome(outcome);
    }

    pub fn retry(&mut self) {
        self.controller.retry();
    }

    pub fn refresh(&mut self) {
        self.controller.refresh();
    }

    pub fn scrubber_pointer_down(&mut self, row: u16) {
        let y = self.layout.scrubber_y(row);
        let armed = self.controller.pointer_down(y);
        self.arm(armed);
    }

    pub fn scrubber_pointer_move(&mut self, row: u16) {
        let y = self.layout.scrubber_y(row);
        let armed = self.controller.pointer_move(y);
        self.arm(armed);
    }

    pub fn scrubber_pointer_up(&mut self) {
        let armed = self.controller.pointer_up(Instant::now());
        self.arm(armed);
    }

    pub fn jump_to(&mut self, key: GroupKey) {
        let armed = self.controller.jump_to_key(&key, Instant::now());
        self.arm(armed);
    }

    pub fn on_bubble_timer(&mut self, token: u64) {
        self.controller.hide_timer_fired(token, Instant::now());
        // Fired a hair early: still pending under the same token, wait again.
        let pending = self
            .controller
            .scrubber()
            .hide_timer()
            .filter(|timer| timer.token == token);
        self.arm(pending);
    }

    /// Post `BubbleTimer` back to the event queue once the deadline passes.
    fn arm(&self, timer: Option<HideTimer>) {
        let Some(HideTimer { token, deadline }) = timer else {
            return;
        };
        let events = self.events.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
            if events.send(AppEvent::BubbleTimer { token }).is_err() {
                tracing::trace!(token, "Bubble timer dropped (event loop gone)");
            }
        });
    }
}
