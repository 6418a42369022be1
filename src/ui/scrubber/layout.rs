//! Scrubber geometry.
//!
//! All coordinates are relative to the top of the column, in the same unit
//! as `row_height` (terminal cells when hosted in the TUI). Rows are laid
//! out top to bottom at `index * (row_height + row_gap)` and the block of
//! rows is centered vertically inside the column.
//!
//! When the rows do not fit, gaps are dropped and every row shrinks to
//! `column_height / row_count`, so each key keeps a hit target.

/// Result of hit-testing a vertical pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTest {
    /// Above, below, or not a finite coordinate.
    Outside,
    /// Inside the column but not on a row (insets, gaps, rounding seams).
    Gap,
    /// On the row with this index.
    Row(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubberLayout {
    row_height: f32,
    row_gap: f32,
    column_height: f32,
    row_count: usize,
}

impl ScrubberLayout {
    pub fn new(row_height: f32, row_gap: f32, column_height: f32, row_count: usize) -> Self {
        let mut layout = Self {
            row_height: finite_or_zero(row_height),
            row_gap: finite_or_zero(row_gap),
            column_height: finite_or_zero(column_height),
            row_count,
        };
        if row_count > 0 && layout.column_height > 0.0 && layout.is_overflowing() {
            layout.row_height = layout.column_height / row_count as f32;
            layout.row_gap = 0.0;
        }
        layout
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn column_height(&self) -> f32 {
        self.column_height
    }

    /// Whether the configured rows are taller than the column.
    fn is_overflowing(&self) -> bool {
        self.content_height() > self.column_height
    }

    fn pitch(&self) -> f32 {
        self.row_height + self.row_gap
    }

    /// Height of the stacked rows, gaps included.
    pub fn content_height(&self) -> f32 {
        if self.row_count == 0 {
            return 0.0;
        }
        self.row_count as f32 * self.row_height + (self.row_count - 1) as f32 * self.row_gap
    }

    /// Distance from the column top to the first row.
    pub fn top_inset(&self) -> f32 {
        ((self.column_height - self.content_height()) / 2.0).max(0.0)
    }

    /// Top edge of row `index`.
    pub fn row_top(&self, index: usize) -> Option<f32> {
        (index < self.row_count).then(|| self.top_inset() + index as f32 * self.pitch())
    }

    /// Vertical center of row `index`.
    pub fn row_center(&self, index: usize) -> Option<f32> {
        self.row_top(index).map(|top| top + self.row_height / 2.0)
    }

    /// Map a pointer position to a row.
    ///
    /// Row bounds are half-open, `[top, top + row_height)`, and cover the
    /// whole row whether or not anything is drawn there.
    pub fn hit_test(&self, y: f32) -> HitTest {
        if !y.is_finite() || y < 0.0 || y >= self.column_height {
            return HitTest::Outside;
        }

        let pitch = self.pitch();
        let offset = y - self.top_inset();
        if offset < 0.0 || pitch <= 0.0 || self.row_height <= 0.0 {
            return HitTest::Gap;
        }

        let index = (offset / pitch).floor() as usize;
        if index >= self.row_count {
            return HitTest::Gap;
        }

        let within = offset - index as f32 * pitch;
        if within < self.row_height {
            HitTest::Row(index)
        } else {
            HitTest::Gap
        }
    }
}

impl Default for ScrubberLayout {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 0)
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
