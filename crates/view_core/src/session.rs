use std::sync::Arc;

use content_store::NewsSource;
use shared::domain::{NewsId, NewsItem, Page};

use crate::{scene::Scene, state::ViewState, transition::PageTransition, ViewError};

/// One mounted newsroom page: the read port, the view state and the page
/// transition driven by it.
pub struct NewsroomSession {
    source: Arc<dyn NewsSource>,
    state: ViewState,
    transition: PageTransition,
}

impl NewsroomSession {
    /// Session already settled on the default page.
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        let state = ViewState::default();
        Self {
            transition: PageTransition::new(state.active_page()),
            source,
            state,
        }
    }

    /// Session whose first page plays its enter animation from `now`.
    pub fn mount(source: Arc<dyn NewsSource>, now: f64) -> Self {
        let state = ViewState::default();
        Self {
            transition: PageTransition::mounting(state.active_page(), now),
            source,
            state,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn source(&self) -> &dyn NewsSource {
        self.source.as_ref()
    }

    pub fn transition(&self) -> &PageTransition {
        &self.transition
    }

    /// Returns `false` when `page` is already active; no transition is replayed.
    pub fn navigate(&mut self, page: Page, now: f64) -> bool {
        if !self.state.set_active_page(page) {
            return false;
        }
        self.transition.request(page, now);
        true
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        self.state.set_mobile_menu_open(open);
    }

    pub fn open_mobile_menu(&mut self) {
        self.set_mobile_menu_open(true);
    }

    pub fn close_mobile_menu(&mut self) {
        self.set_mobile_menu_open(false);
    }

    pub fn select_news(&mut self, id: NewsId) -> Result<(), ViewError> {
        self.state.set_selected_news(Some(id), self.source.as_ref())
    }

    pub fn close_news(&mut self) {
        // clearing the selection cannot fail
        let _ = self.state.set_selected_news(None, self.source.as_ref());
    }

    pub fn selected_news(&self) -> Option<&NewsItem> {
        self.state
            .selected_news()
            .and_then(|id| self.source.find(id))
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transition.is_animating(now)
    }

    pub fn scene(&self, now: f64) -> Scene<'_> {
        Scene::compose(&self.state, self.transition.frame(now), self.source.as_ref())
    }
}
