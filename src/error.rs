//! Error types for asset-stamp.

use thiserror::Error;

use crate::vcs::VcsKind;

/// Result type alias for asset-stamp operations
pub type StampResult<T> = Result<T, StampError>;

/// Validation errors surfaced to callers
#[derive(Error, Debug)]
pub enum StampError {
    #[error("unsupported VCS \"{0}\"; git is currently the only supported VCS")]
    UnsupportedVcs(VcsKind),

    #[error("unknown asset type \"{name}\"; should be one of: stylesheet, script")]
    UnknownAssetType { name: String },
}
