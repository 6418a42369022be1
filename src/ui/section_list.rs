//! Sectioned contact list with named anchors.
//!
//! Groups are flattened into rows: one header row per group, followed by its
//! contacts. Each header row is the anchor for its group key.

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::contacts::{Contact, ContactGroup, GroupKey};
use crate::ui::theme::{HEADER_TEXT, HEADER_SEPARATOR, SECTION_HEADER_BG};

#[derive(Debug, Clone, PartialEq)]
pub enum SectionRow {
    Header(GroupKey),
    Contact(Contact),
}

#[derive(Debug, Clone, Default)]
pub struct SectionList {
    rows: Vec<SectionRow>,
    anchors: HashMap<GroupKey, usize>,
    offset: usize,
    viewport: usize,
}

impl SectionList {
    /// Replace the content, keeping the scroll offset where possible.
    pub fn set_groups(&mut self, groups: &[ContactGroup]) {
        self.rows.clear();
        self.anchors.clear();
        for group in groups {
            self.anchors.insert(group.key.clone(), self.rows.len());
            self.rows.push(SectionRow::Header(group.key.clone()));
            self.rows
                .extend(group.contacts.iter().cloned().map(SectionRow::Contact));
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn rows(&self) -> &[SectionRow] {
        &self.rows
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn anchor(&self, key: &GroupKey) -> Option<usize> {
        self.anchors.get(key).copied()
    }

    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.viewport.max(1))
    }

    /// Top-align the section for `key`. Returns false if there is no such
    /// section.
    pub fn scroll_to_anchor(&mut self, key: &GroupKey) -> bool {
        let Some(row) = self.anchor(key) else {
            tracing::debug!(key = %key, "No section anchor for key");
            return false;
        };
        self.offset = row.min(self.max_offset());
        true
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.offset.saturating_add_signed(delta);
        self.offset = target.min(self.max_offset());
    }

    pub fn page(&mut self, forward: bool) {
        let step = self.viewport.saturating_sub(1).max(1) as isize;
        self.scroll_by(if forward { step } else { -step });
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Key of the section whose rows are at the top of the viewport.
    pub fn top_section(&self) -> Option<&GroupKey> {
        self.rows[..self.rows.len().min(self.offset + 1)]
            .iter()
            .rev()
            .find_map(|row| match row {
                SectionRow::Header(key) => Some(key),
                SectionRow::Contact(_) => None,
            })
    }
}

/// Renders the visible slice of a [`SectionList`].
pub struct SectionListWidget<'a> {
    list: &'a SectionList,
}

impl<'a> SectionListWidget<'a> {
    pub fn new(list: &'a SectionList) -> Self {
        Self { list }
    }
}

impl Widget for SectionListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self
            .list
            .rows
            .iter()
            .skip(self.list.offset)
            .take(area.height as usize);

        for (line, row) in visible.enumerate() {
            let y = area.y + line as u16;
            match row {
                SectionRow::Header(key) => {
                    let style = Style::default()
                        .fg(HEADER_TEXT)
                        .bg(SECTION_HEADER_BG)
                        .add_modifier(Modifier::BOLD);
                    buf.set_string(area.x, y, " ".repeat(area.width as usize), style);
                    let width = area.width.saturating_sub(1) as usize;
                    buf.set_stringn(area.x + 1, y, key.label(), width, style);
                }
                SectionRow::Contact(contact) => {
                    let (text, style) = if contact.name.is_empty() {
                        ("(no name)", Style::default().fg(HEADER_SEPARATOR))
                    } else {
                        (contact.name.as_str(), Style::default().fg(HEADER_TEXT))
                    };
                    let width = area.width.saturating_sub(2) as usize;
                    buf.set_stringn(area.x + 2, y, text, width, style);
                }
            }
        }
    }
}
