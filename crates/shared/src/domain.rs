use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(NewsId);

/// Top-level sections reachable from the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    News,
    Company,
    Project,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::News, Page::Company, Page::Project];

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::News => "Actualités",
            Page::Company => "Recherche Entreprise",
            Page::Project => "Recherche Projet",
        }
    }

    /// Sign of the horizontal offset the page slides in from.
    pub fn enter_direction(self) -> f32 {
        match self {
            Page::News => -1.0,
            Page::Company | Page::Project => 1.0,
        }
    }

    /// Sign of the horizontal offset the page slides out towards.
    pub fn exit_direction(self) -> f32 {
        -self.enter_direction()
    }
}

/// Which search form is visible. Derived from the active page, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPanel {
    None,
    Company,
    Project,
}

impl From<Page> for SearchPanel {
    fn from(page: Page) -> Self {
        match page {
            Page::News => SearchPanel::None,
            Page::Company => SearchPanel::Company,
            Page::Project => SearchPanel::Project,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl NewsItem {
    pub fn display_date(&self) -> String {
        format_date_fr(self.date)
    }
}

/// Short `fr-FR` date form, e.g. `05/04/2024`.
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
