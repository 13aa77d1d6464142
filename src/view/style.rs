//! The view style container.

use super::attribute::ViewAttribute;
use crate::attributed::Attributed;

crate::attributed! {
    /// An ordered collection of [`ViewAttribute`]s.
    ///
    /// Build one with [`view_style!`](crate::view_style), from a `Vec`, or by
    /// collecting an iterator; combine styles with the merge methods of
    /// [`Attributed`].
    pub struct ViewStyle(ViewAttribute);
}

/// Builds a [`ViewStyle`](crate::ViewStyle) from attribute literals.
///
/// Each entry is a [`ViewAttribute`](crate::ViewAttribute) variant name
/// followed by its payload.
///
/// ```rust
/// use composer::{view_style, Attributed, ViewAttributeKey};
/// use console::Color;
///
/// let style = view_style![BackgroundColor(Color::Red), CornerRadius(4.0)];
/// assert_eq!(style.len(), 2);
/// assert!(style.contains(ViewAttributeKey::CornerRadius));
/// ```
#[macro_export]
macro_rules! view_style {
    ($($variant:ident($payload:expr)),* $(,)?) => {
        <$crate::ViewStyle as ::std::convert::From<::std::vec::Vec<$crate::ViewAttribute>>>::from(
            ::std::vec![$($crate::ViewAttribute::$variant($payload)),*]
        )
    };
}

/// Merging directly on attribute lists.
pub trait AttributeVecExt {
    /// Merges `slave` under `self`; `self` wins on key conflicts.
    fn merge_slave(&self, slave: &[ViewAttribute]) -> Vec<ViewAttribute>;

    /// Merges `self` under `master`; `master` wins on key conflicts.
    fn merge_master(&self, master: &[ViewAttribute]) -> Vec<ViewAttribute>;
}

impl AttributeVecExt for [ViewAttribute] {
    fn merge_slave(&self, slave: &[ViewAttribute]) -> Vec<ViewAttribute> {
        ViewStyle::from(self.to_vec())
            .merge_slave_attributes(slave.iter().cloned())
            .into_iter()
            .collect()
    }

    fn merge_master(&self, master: &[ViewAttribute]) -> Vec<ViewAttribute> {
        ViewStyle::from(self.to_vec())
            .merge_master_attributes(master.iter().cloned())
            .into_iter()
            .collect()
    }
}
