//! The attribute contract and stripped-key extraction.

use std::any::Any;
use std::fmt::Debug;
use std::hash::Hash;

use super::custom::CustomStyle;

/// One typed configuration fact, tagged with a case identity.
///
/// Implementors are enums whose variants carry the payload. Every variant maps
/// to exactly one [`Stripped`](Attribute::Stripped) key, which is used for
/// deduplication and override matching during merges. The payload never takes
/// part in that identity.
///
/// The key enum is usually derived with [`strum::EnumDiscriminants`], which
/// keeps the variant-to-key mapping exhaustive:
///
/// ```rust
/// use std::any::Any;
/// use composer::Attribute;
/// use strum::EnumDiscriminants;
///
/// #[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
/// #[strum_discriminants(name(BorderKey), derive(Hash))]
/// enum Border {
///     Width(f32),
///     Dashed(bool),
/// }
///
/// impl Attribute for Border {
///     type Stripped = BorderKey;
///
///     fn stripped(&self) -> BorderKey {
///         self.into()
///     }
///
///     fn payload(&self) -> &dyn Any {
///         match self {
///             Border::Width(width) => width,
///             Border::Dashed(dashed) => dashed,
///         }
///     }
/// }
///
/// assert_eq!(Border::Width(1.0).stripped(), Border::Width(3.0).stripped());
/// assert_ne!(Border::Width(1.0).stripped(), Border::Dashed(true).stripped());
/// ```
pub trait Attribute: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Value-erased identity of a variant.
    type Stripped: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Returns the identity key of this attribute's variant.
    fn stripped(&self) -> Self::Stripped;

    /// Returns the payload for type-directed extraction.
    fn payload(&self) -> &dyn Any;

    /// Key of the variant that carries a nested [`CustomStyle`], if this kind
    /// has one.
    fn custom_key() -> Option<Self::Stripped> {
        None
    }

    /// Wraps a nested style in this kind's custom variant.
    ///
    /// Kinds without a custom variant return `None`.
    fn from_custom(_style: CustomStyle) -> Option<Self> {
        None
    }
}

/// Maps each attribute to its stripped key, preserving order and duplicates.
pub fn strip_all<'a, A: Attribute>(
    attributes: impl IntoIterator<Item = &'a A>,
) -> Vec<A::Stripped> {
    attributes.into_iter().map(Attribute::stripped).collect()
}
