//! Shared behaviour for scrollable browser panes

/// Trait for panes with scrollable content
pub trait Scrollable {
    /// Get current scroll offset
    fn get_scroll_offset(&self) -> usize;

    /// Set scroll offset with bounds checking
    fn set_scroll_offset(&mut self, offset: usize);

    /// Calculate maximum scroll offset
    fn calculate_max_scroll(&self) -> usize;

    /// Get page size for scrolling
    fn get_page_size(&self) -> usize {
        10
    }

    /// Scroll up by given amount
    fn scroll_up(&mut self, amount: usize) {
        let current = self.get_scroll_offset();
        self.set_scroll_offset(current.saturating_sub(amount));
    }

    /// Scroll down by given amount
    fn scroll_down(&mut self, amount: usize) {
        let current = self.get_scroll_offset();
        self.set_scroll_offset(current.saturating_add(amount));
    }

    /// Scroll to top
    fn scroll_to_top(&mut self) {
        self.set_scroll_offset(0);
    }

    /// Scroll to bottom
    fn scroll_to_bottom(&mut self) {
        let max_scroll = self.calculate_max_scroll();
        self.set_scroll_offset(max_scroll);
    }

    /// Page up (scroll up by page size)
    fn page_up(&mut self) {
        let page_size = self.get_page_size();
        self.scroll_up(page_size);
    }

    /// Page down (scroll down by page size)
    fn page_down(&mut self) {
        let page_size = self.get_page_size();
        self.scroll_down(page_size);
    }
}
