use content_store::NewsSource;
use shared::domain::{NewsId, Page, SearchPanel};

use crate::ViewError;

/// Session-local page state. Created with defaults on mount, mutated only by
/// discrete user events, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_page: Page,
    mobile_menu_open: bool,
    selected_news: Option<NewsId>,
}

impl ViewState {
    pub fn active_page(&self) -> Page {
        self.active_page
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn selected_news(&self) -> Option<NewsId> {
        self.selected_news
    }

    pub fn search_panel(&self) -> SearchPanel {
        SearchPanel::from(self.active_page)
    }

    /// Returns `false` when `page` was already active.
    pub fn set_active_page(&mut self, page: Page) -> bool {
        let changed = self.active_page != page;
        self.active_page = page;
        changed
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        self.mobile_menu_open = open;
    }

    /// Ids missing from `source` leave the selection untouched.
    pub fn set_selected_news(
        &mut self,
        selection: Option<NewsId>,
        source: &dyn NewsSource,
    ) -> Result<(), ViewError> {
        if let Some(id) = selection {
            if !source.contains(id) {
                return Err(ViewError::UnknownNews(id));
            }
        }
        self.selected_news = selection;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
