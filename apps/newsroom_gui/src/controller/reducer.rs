//! View actions collected during a frame and applied to the session afterwards.

use shared::domain::{NewsId, Page};
use view_core::NewsroomSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSource {
    Header,
    MobileMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Navigate { page: Page, from: NavSource },
    OpenMobileMenu,
    CloseMobileMenu,
    SelectNews(NewsId),
    CloseNews,
}

pub fn reduce(session: &mut NewsroomSession, action: UiAction, now: f64) {
    match action {
        UiAction::Navigate { page, from } => {
            if session.navigate(page, now) {
                tracing::debug!(?page, ?from, "page transition started");
            }
            if from == NavSource::MobileMenu {
                session.close_mobile_menu();
            }
        }
        UiAction::OpenMobileMenu => session.open_mobile_menu(),
        UiAction::CloseMobileMenu => session.close_mobile_menu(),
        UiAction::SelectNews(id) => {
            if let Err(err) = session.select_news(id) {
                tracing::warn!(news_id = %id, "ignoring selection: {err}");
            }
        }
        UiAction::CloseNews => session.close_news(),
    }
}

pub fn reduce_all(
    session: &mut NewsroomSession,
    actions: impl IntoIterator<Item = UiAction>,
    now: f64,
) {
    for action in actions {
        reduce(session, action, now);
    }
}
