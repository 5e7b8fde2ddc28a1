use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRefError {
    #[error("empty image reference")]
    Empty,
    #[error("unsupported image scheme '{scheme}' in '{reference}'")]
    UnsupportedScheme { scheme: String, reference: String },
    #[error("malformed image url '{reference}': {reason}")]
    Malformed { reference: String, reason: String },
    #[error("asset reference '{reference}' escapes the asset directory")]
    OutsideAssetRoot { reference: String },
}
