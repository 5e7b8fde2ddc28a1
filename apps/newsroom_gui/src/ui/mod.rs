//! UI layer: app shell, page panels, overlay widgets, images and theme.

pub mod app;
pub mod images;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::NewsroomApp;
