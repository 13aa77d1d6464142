//! Style installation errors.

/// Error returned when a style cannot be installed on a target.
///
/// This is a configuration error: the caller paired a style with a target
/// that can never accept it, so retrying will not help.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// The target does not provide the capability the style requires.
    #[error("cannot install {style} on {target}: target is not a view")]
    UnsupportedTarget {
        style: &'static str,
        target: &'static str,
    },
}
