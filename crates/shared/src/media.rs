//! Image references as they appear in news records.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use url::Url;

use crate::error::ImageRefError;

/// Parsed image reference. Site-relative references (`/placeholder.jpg`) are
/// assets served from a local directory; absolute http(s) URLs are remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    Remote(Url),
    Asset(PathBuf),
}

impl ImageRef {
    pub fn parse(reference: &str) -> Result<Self, ImageRefError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ImageRefError::Empty);
        }

        match Url::parse(reference) {
            // single-letter schemes are windows drive letters, not urls
            Ok(url) if url.scheme().len() > 1 => match url.scheme() {
                "http" | "https" => Ok(Self::Remote(url)),
                scheme => Err(ImageRefError::UnsupportedScheme {
                    scheme: scheme.to_string(),
                    reference: reference.to_string(),
                }),
            },
            Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {
                Self::parse_asset(reference)
            }
            Err(err) => Err(ImageRefError::Malformed {
                reference: reference.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    fn parse_asset(reference: &str) -> Result<Self, ImageRefError> {
        let relative = reference.trim_start_matches(['/', '\\']);
        let relative = relative.split(['?', '#']).next().unwrap_or_default();
        if relative.is_empty() {
            return Err(ImageRefError::Empty);
        }

        let mut path = PathBuf::new();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ImageRefError::OutsideAssetRoot {
                        reference: reference.to_string(),
                    })
                }
            }
        }
        Ok(Self::Asset(path))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Location of an asset reference under `asset_root`; `None` for remote refs.
    pub fn resolve_asset(&self, asset_root: &Path) -> Option<PathBuf> {
        match self {
            Self::Asset(path) => Some(asset_root.join(path)),
            Self::Remote(_) => None,
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Asset(path) => write!(f, "/{}", path.to_string_lossy().replace('\\', "/")),
        }
    }
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
