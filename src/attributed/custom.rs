//! Nested styles carried inside an attribute.
//!
//! A kind may reserve one variant for a [`CustomStyle`]: a container of some
//! other attribute kind, stored behind a type-erased handle. This lets
//! extensions define their own attributes without touching the base kind.
//!
//! [`recursive_merge`] merges the nested styles of both operands with the same
//! precedence law. Nested merging calls the nested kind's own
//! `recursive_merge`, so styles compose through any number of levels.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::attribute::Attribute;
use super::container::Attributed;
use crate::apply::{ApplyError, Install, Styleable};

/// Object-safe view of an attribute container of any kind.
///
/// Implemented for every container that can be compared and shared across
/// threads.
pub trait AnyAttributed: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Number of attributes in the nested container.
    fn attribute_count(&self) -> usize;

    /// Name of the concrete container type.
    fn kind_name(&self) -> &'static str;

    /// Merges `slave` under `self`.
    ///
    /// Returns `None` when `slave` is a different container type.
    fn merge_any(&self, slave: &dyn AnyAttributed) -> Option<Arc<dyn AnyAttributed>>;

    fn eq_any(&self, other: &dyn AnyAttributed) -> bool;
}

impl<S> AnyAttributed for S
where
    S: Attributed + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribute_count(&self) -> usize {
        self.len()
    }

    fn kind_name(&self) -> &'static str {
        std::any::type_name::<S>()
    }

    fn merge_any(&self, slave: &dyn AnyAttributed) -> Option<Arc<dyn AnyAttributed>> {
        let slave = slave.as_any().downcast_ref::<S>()?;
        Some(Arc::new(self.recursive_merge(slave)))
    }

    fn eq_any(&self, other: &dyn AnyAttributed) -> bool {
        other
            .as_any()
            .downcast_ref::<S>()
            .is_some_and(|other| self == other)
    }
}

type Installer = fn(&dyn Any, &mut dyn Styleable) -> Result<(), ApplyError>;

fn install_as<S: Install + 'static>(
    style: &dyn Any,
    target: &mut dyn Styleable,
) -> Result<(), ApplyError> {
    match style.downcast_ref::<S>() {
        Some(style) => style.install(target),
        None => Ok(()),
    }
}

/// A nested container of any attribute kind.
///
/// Cheap to clone; the nested container is shared and never mutated.
/// Containers built with [`new`](CustomStyle::new) are installed along with
/// the style carrying them; [`passive`](CustomStyle::passive) ones only take
/// part in merging.
#[derive(Clone)]
pub struct CustomStyle {
    style: Arc<dyn AnyAttributed>,
    installer: Option<Installer>,
}

impl CustomStyle {
    pub fn new<S: AnyAttributed + Install>(style: S) -> Self {
        Self {
            style: Arc::new(style),
            installer: Some(install_as::<S>),
        }
    }

    /// Wraps a container that has no [`Install`] implementation.
    ///
    /// Installing it does nothing.
    pub fn passive<S: AnyAttributed>(style: S) -> Self {
        Self {
            style: Arc::new(style),
            installer: None,
        }
    }

    /// Returns the nested container if it is an `S`.
    pub fn downcast_ref<S: Any>(&self) -> Option<&S> {
        (*self.style).as_any().downcast_ref::<S>()
    }

    pub fn kind_name(&self) -> &'static str {
        self.style.kind_name()
    }

    pub fn len(&self) -> usize {
        self.style.attribute_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_installable(&self) -> bool {
        self.installer.is_some()
    }

    /// Merges `slave` under `self`, recursing into further nested styles.
    ///
    /// When the two nested containers are of different kinds, `self` is kept
    /// unchanged, as it would be by a plain merge.
    pub fn merge_slave(&self, slave: &CustomStyle) -> CustomStyle {
        match self.style.merge_any(slave.style.as_ref()) {
            Some(style) => CustomStyle {
                style,
                installer: self.installer.or(slave.installer),
            },
            None => {
                tracing::debug!(
                    master = self.kind_name(),
                    slave = slave.kind_name(),
                    "custom styles of different kinds, keeping master"
                );
                self.clone()
            }
        }
    }

    /// Installs the nested container on `target`.
    ///
    /// # Errors
    ///
    /// Propagates the nested kind's [`ApplyError`].
    pub fn install(&self, target: &mut dyn Styleable) -> Result<(), ApplyError> {
        match self.installer {
            Some(install) => install((*self.style).as_any(), target),
            None => {
                tracing::trace!(kind = self.kind_name(), "skipping passive custom style");
                Ok(())
            }
        }
    }
}

impl fmt::Debug for CustomStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomStyle").field(&self.style).finish()
    }
}

impl PartialEq for CustomStyle {
    fn eq(&self, other: &Self) -> bool {
        self.style.eq_any(other.style.as_ref())
    }
}

/// Merges `slave` under `master`, merging their nested custom styles too.
///
/// When both sides carry a custom attribute, the result starts with a single
/// custom attribute holding the merge of the two nested styles, followed by
/// the rest of the plain merge. Otherwise this is exactly
/// `master.merge_slave(slave)`.
pub fn recursive_merge<S: Attributed>(master: &S, slave: &S) -> S {
    let merged = master.merge_slave(slave);

    let (Some(master_custom), Some(slave_custom)) = (custom_of(master), custom_of(slave)) else {
        return merged;
    };

    match S::Attribute::from_custom(master_custom.merge_slave(slave_custom)) {
        Some(custom) => S::from_attributes(vec![custom]).merge_slave(&merged),
        None => merged,
    }
}

fn custom_of<S: Attributed>(style: &S) -> Option<&CustomStyle> {
    let key = S::Attribute::custom_key()?;
    style.value::<CustomStyle>(key)
}
