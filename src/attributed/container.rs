//! The attribute container trait and its query surface.

use std::any::Any;

use super::attribute::{strip_all, Attribute};
use super::custom;
use super::error::AttributeError;
use super::merge;

/// Shorthand for the stripped key type of a container.
pub type Stripped<S> = <<S as Attributed>::Attribute as Attribute>::Stripped;

/// An ordered collection of attributes of one kind.
///
/// Containers are immutable values. Construction never deduplicates: a
/// container may hold several attributes with the same key until it is merged.
/// Queries resolve duplicates by taking the first occurrence, and every merge
/// returns a container with at most one attribute per key.
///
/// Implementors only provide storage. Use the [`attributed!`](crate::attributed)
/// macro to declare one.
pub trait Attributed: Clone + Sized {
    /// The attribute kind held by this container.
    type Attribute: Attribute;

    /// The attributes in order.
    fn attributes(&self) -> &[Self::Attribute];

    /// Builds a container from attributes, keeping duplicates.
    fn from_attributes(attributes: Vec<Self::Attribute>) -> Self;

    /// Creates an empty container.
    fn empty() -> Self {
        Self::from_attributes(Vec::new())
    }

    fn len(&self) -> usize {
        self.attributes().len()
    }

    fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }

    fn get(&self, index: usize) -> Option<&Self::Attribute> {
        self.attributes().get(index)
    }

    /// Returns the attribute at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::OutOfRange`] when `index >= len()`.
    fn at(&self, index: usize) -> Result<&Self::Attribute, AttributeError> {
        self.get(index).ok_or(AttributeError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    fn iter(&self) -> std::slice::Iter<'_, Self::Attribute> {
        self.attributes().iter()
    }

    /// The stripped key of every attribute, in order, duplicates included.
    fn stripped(&self) -> Vec<Stripped<Self>> {
        strip_all(self.attributes())
    }

    /// Returns the first attribute whose key is `key`.
    fn attribute(&self, key: Stripped<Self>) -> Option<&Self::Attribute> {
        self.iter().find(|attribute| attribute.stripped() == key)
    }

    /// Extracts the payload of the first attribute with `key`.
    ///
    /// Returns `None` when no attribute has that key, or when the payload is
    /// not a `V`.
    ///
    /// ```rust
    /// use composer::{Attributed, ViewAttribute, ViewAttributeKey, ViewStyle};
    ///
    /// let style = ViewStyle::from(vec![ViewAttribute::CornerRadius(4.0)]);
    /// assert_eq!(style.value::<f32>(ViewAttributeKey::CornerRadius), Some(&4.0));
    /// assert_eq!(style.value::<String>(ViewAttributeKey::CornerRadius), None);
    /// ```
    fn value<V: Any>(&self, key: Stripped<Self>) -> Option<&V> {
        self.attribute(key)?.payload().downcast_ref::<V>()
    }

    fn contains(&self, key: Stripped<Self>) -> bool {
        self.iter().any(|attribute| attribute.stripped() == key)
    }

    /// Merges `slave` into `self`; `self` wins on key conflicts.
    fn merge_slave(&self, slave: &Self) -> Self {
        merge::merge(self, slave)
    }

    /// Merges `self` into `master`; `master` wins on key conflicts.
    fn merge_master(&self, master: &Self) -> Self {
        merge::merge(master, self)
    }

    fn merge_slave_attributes(
        &self,
        slave: impl IntoIterator<Item = Self::Attribute>,
    ) -> Self {
        self.merge_slave(&Self::from_attributes(slave.into_iter().collect()))
    }

    fn merge_slave_attribute(&self, slave: Self::Attribute) -> Self {
        self.merge_slave(&Self::from_attributes(vec![slave]))
    }

    fn merge_master_attributes(
        &self,
        master: impl IntoIterator<Item = Self::Attribute>,
    ) -> Self {
        Self::from_attributes(master.into_iter().collect()).merge_slave(self)
    }

    fn merge_master_attribute(&self, master: Self::Attribute) -> Self {
        Self::from_attributes(vec![master]).merge_slave(self)
    }

    /// Merges with an optional slave; an absent slave leaves `self` unchanged.
    fn merge_slave_opt(&self, slave: Option<&Self>) -> Self {
        match slave {
            Some(slave) => self.merge_slave(slave),
            None => self.clone(),
        }
    }

    /// Like [`merge_slave`](Attributed::merge_slave), but also merges the
    /// nested custom styles of both sides instead of letting `self`'s replace
    /// the slave's wholesale.
    fn recursive_merge(&self, slave: &Self) -> Self {
        custom::recursive_merge(self, slave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ViewAttribute, ViewAttributeKey, ViewStyle};
    use console::Color;

    fn sample() -> ViewStyle {
        ViewStyle::from(vec![
            ViewAttribute::BackgroundColor(Color::Red),
            ViewAttribute::CornerRadius(4.0),
            ViewAttribute::BackgroundColor(Color::Blue),
        ])
    }

    #[test]
    fn test_construction_keeps_duplicates() {
        let style = sample();
        assert_eq!(style.len(), 3);
        assert!(!style.is_empty());
    }

    #[test]
    fn test_empty_container() {
        let style = ViewStyle::empty();
        assert!(style.is_empty());
        assert_eq!(style.len(), 0);
        assert!(style.stripped().is_empty());
    }

    #[test]
    fn test_at_in_range() {
        let style = sample();
        assert_eq!(style.at(1), Ok(&ViewAttribute::CornerRadius(4.0)));
    }

    #[test]
    fn test_at_out_of_range() {
        let style = sample();
        assert_eq!(
            style.at(3),
            Err(AttributeError::OutOfRange { index: 3, len: 3 })
        );
        assert!(style.get(3).is_none());
    }

    #[test]
    fn test_value_returns_first_occurrence() {
        let style = sample();
        assert_eq!(
            style.value::<Color>(ViewAttributeKey::BackgroundColor),
            Some(&Color::Red)
        );
    }

    #[test]
    fn test_value_type_mismatch_is_absent() {
        let style = sample();
        assert_eq!(style.value::<String>(ViewAttributeKey::BackgroundColor), None);
    }

    #[test]
    fn test_value_missing_key_is_absent() {
        let style = sample();
        assert_eq!(style.value::<String>(ViewAttributeKey::Text), None);
    }

    #[test]
    fn test_contains() {
        let style = sample();
        assert!(style.contains(ViewAttributeKey::CornerRadius));
        assert!(!style.contains(ViewAttributeKey::Text));
    }

    #[test]
    fn test_stripped_in_order() {
        assert_eq!(
            sample().stripped(),
            vec![
                ViewAttributeKey::BackgroundColor,
                ViewAttributeKey::CornerRadius,
                ViewAttributeKey::BackgroundColor,
            ]
        );
    }

    #[test]
    fn test_merge_slave_opt_with_none_is_identity() {
        let style = sample();
        assert_eq!(style.merge_slave_opt(None), style);
    }
}
