//! Domain types shared by the content store, the view core and the apps.

pub mod domain;
pub mod error;
pub mod media;
