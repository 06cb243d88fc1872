//! Cursor and scroll state for a list whose length can change.
//!
//! The cursor is retained when the list shrinks or grows and is only
//! clamped when it would point past the last item.

/// Cursor position and scroll offset within a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed).
    pub position: usize,
    /// Scroll offset for virtual scrolling (items scrolled from top).
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0,
            scroll_offset: 0,
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor and scroll are reset to 0. If the cursor
    /// exceeds the list length, it is set to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
        if self.scroll_offset > self.position {
            self.scroll_offset = self.position;
        }
    }

    /// Moves the cursor up by `step` items.
    pub const fn up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor down by `step` items without passing the last item.
    pub fn down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        self.position = self.position.saturating_add(step).min(max_index);
    }

    /// Moves the cursor to the first item.
    pub const fn home(&mut self) {
        self.position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, count: usize) {
        self.position = count.saturating_sub(1);
    }

    /// Adjusts the scroll offset so the cursor remains within the viewport.
    pub const fn ensure_visible(&mut self, visible_height: usize) {
        // If nothing is visible, keep the scroll offset unchanged.
        if visible_height == 0 {
            return;
        }

        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.position >= viewport_end {
            self.scroll_offset = self
                .position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
