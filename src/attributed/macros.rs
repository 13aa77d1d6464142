/// Declares a container type for an attribute kind.
///
/// The generated struct implements [`Attributed`](crate::Attributed) and the
/// usual collection conversions: `From<Vec<A>>`, `From<A>`, `FromIterator<A>`,
/// `IntoIterator` (owned and borrowed) and `Index<usize>`.
///
/// ```rust
/// use composer::{attributed, Attributed, ViewAttribute};
///
/// attributed! {
///     /// Styles for a toolbar.
///     pub struct ToolbarStyle(ViewAttribute);
/// }
///
/// let style: ToolbarStyle = vec![ViewAttribute::Spacing(2.0)].into();
/// assert_eq!(style.len(), 1);
/// ```
#[macro_export]
macro_rules! attributed {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($attribute:ty);) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $name {
            attributes: ::std::vec::Vec<$attribute>,
        }

        impl $crate::Attributed for $name {
            type Attribute = $attribute;

            fn attributes(&self) -> &[$attribute] {
                &self.attributes
            }

            fn from_attributes(attributes: ::std::vec::Vec<$attribute>) -> Self {
                Self { attributes }
            }
        }

        impl ::std::convert::From<::std::vec::Vec<$attribute>> for $name {
            fn from(attributes: ::std::vec::Vec<$attribute>) -> Self {
                Self { attributes }
            }
        }

        impl ::std::convert::From<$attribute> for $name {
            fn from(attribute: $attribute) -> Self {
                Self {
                    attributes: ::std::vec![attribute],
                }
            }
        }

        impl ::std::iter::FromIterator<$attribute> for $name {
            fn from_iter<I: ::std::iter::IntoIterator<Item = $attribute>>(iter: I) -> Self {
                Self {
                    attributes: iter.into_iter().collect(),
                }
            }
        }

        impl ::std::iter::IntoIterator for $name {
            type Item = $attribute;
            type IntoIter = ::std::vec::IntoIter<$attribute>;

            fn into_iter(self) -> Self::IntoIter {
                self.attributes.into_iter()
            }
        }

        impl<'a> ::std::iter::IntoIterator for &'a $name {
            type Item = &'a $attribute;
            type IntoIter = ::std::slice::Iter<'a, $attribute>;

            fn into_iter(self) -> Self::IntoIter {
                self.attributes.iter()
            }
        }

        impl ::std::ops::Index<usize> for $name {
            type Output = $attribute;

            fn index(&self, index: usize) -> &$attribute {
                &self.attributes[index]
            }
        }
    };
}
