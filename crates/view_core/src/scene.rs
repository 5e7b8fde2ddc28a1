//! What the presentation layer mounts for a given state and instant.

use content_store::NewsSource;
use shared::domain::{NewsItem, Page, SearchPanel};

use crate::{state::ViewState, transition::PageFrame};

pub const BRAND: &str = "Ailancy";
pub const NEWS_HEADING: &str = "Actualités";
pub const NEWS_INTRO: &str = "Restez informé des dernières tendances et innovations.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

/// Inert search form copy; no handler reads the store from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchForm {
    pub panel: SearchPanel,
    pub heading: &'static str,
    pub intro: &'static str,
    pub field_id: &'static str,
    pub field_label: &'static str,
    pub placeholder: &'static str,
    pub button_label: &'static str,
}

impl SearchForm {
    pub fn for_panel(panel: SearchPanel) -> Option<Self> {
        match panel {
            SearchPanel::None => None,
            SearchPanel::Company => Some(Self {
                panel,
                heading: "Recherche Entreprise",
                intro: "Trouvez des informations détaillées sur les entreprises qui vous intéressent.",
                field_id: "company-search",
                field_label: "Nom de l'entreprise",
                placeholder: "Entrez le nom de l'entreprise",
                button_label: "Rechercher",
            }),
            SearchPanel::Project => Some(Self {
                panel,
                heading: "Recherche Projet",
                intro: "Explorez des projets similaires et trouvez de l'inspiration.",
                field_id: "project-search",
                field_label: "Nom du projet",
                placeholder: "Entrez le nom du projet",
                button_label: "Rechercher",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody<'a> {
    NewsGrid {
        heading: &'static str,
        intro: &'static str,
        items: &'a [NewsItem],
    },
    Search(SearchForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountedPage<'a> {
    pub frame: PageFrame,
    pub body: PageBody<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene<'a> {
    pub brand: &'static str,
    pub nav: [NavEntry; 3],
    pub mobile_menu_open: bool,
    pub page: MountedPage<'a>,
    pub detail: Option<&'a NewsItem>,
}

impl<'a> Scene<'a> {
    pub fn compose(state: &ViewState, frame: PageFrame, source: &'a dyn NewsSource) -> Self {
        let nav = Page::ALL.map(|page| NavEntry {
            page,
            label: page.nav_label(),
            active: page == state.active_page(),
        });

        let body = match SearchForm::for_panel(SearchPanel::from(frame.page)) {
            Some(form) => PageBody::Search(form),
            None => PageBody::NewsGrid {
                heading: NEWS_HEADING,
                intro: NEWS_INTRO,
                items: source.news(),
            },
        };

        Self {
            brand: BRAND,
            nav,
            mobile_menu_open: state.mobile_menu_open(),
            page: MountedPage { frame, body },
            detail: state.selected_news().and_then(|id| source.find(id)),
        }
    }

    pub fn mounted_page(&self) -> Page {
        self.page.frame.page
    }

    pub fn news_grid(&self) -> Option<&'a [NewsItem]> {
        match self.page.body {
            PageBody::NewsGrid { items, .. } => Some(items),
            PageBody::Search(_) => None,
        }
    }

    pub fn search_form(&self) -> Option<&SearchForm> {
        match &self.page.body {
            PageBody::Search(form) => Some(form),
            PageBody::NewsGrid { .. } => None,
        }
    }
}
