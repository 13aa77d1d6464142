//! Override-by-key merging of attribute containers.
//!
//! Every merge follows one precedence law: the master operand's attributes are
//! listed before the slave's, and only the first attribute seen for each
//! stripped key survives. Master therefore wins every conflict, attributes
//! present on one side only are kept, and the result holds each key at most
//! once, in first-seen order.

use std::collections::HashSet;

use super::attribute::Attribute;
use super::container::{Attributed, Stripped};

/// Merges two containers; `master` wins on key conflicts.
///
/// ```rust
/// use composer::{merge, Attributed, ViewAttribute, ViewStyle};
/// use console::Color;
///
/// let master = ViewStyle::from(vec![
///     ViewAttribute::BackgroundColor(Color::Red),
///     ViewAttribute::CornerRadius(4.0),
/// ]);
/// let slave = ViewStyle::from(vec![
///     ViewAttribute::BackgroundColor(Color::Blue),
///     ViewAttribute::TextColor(Color::Black),
/// ]);
///
/// let merged = merge(&master, &slave);
/// assert_eq!(
///     merged.attributes(),
///     &[
///         ViewAttribute::BackgroundColor(Color::Red),
///         ViewAttribute::CornerRadius(4.0),
///         ViewAttribute::TextColor(Color::Black),
///     ]
/// );
/// ```
pub fn merge<S: Attributed>(master: &S, slave: &S) -> S {
    let union: HashSet<Stripped<S>> = master
        .stripped()
        .into_iter()
        .chain(slave.stripped())
        .collect();

    let working = master.iter().chain(slave.iter()).cloned();
    let merged = filter_stripped(working, &union);

    tracing::trace!(
        master = master.len(),
        slave = slave.len(),
        merged = merged.len(),
        "merged attribute containers"
    );
    S::from_attributes(merged)
}

/// Keeps the first attribute for each key in `keys`, in input order.
///
/// Attributes whose key is not in `keys` are dropped.
pub fn filter_stripped<A: Attribute>(
    attributes: impl IntoIterator<Item = A>,
    keys: &HashSet<A::Stripped>,
) -> Vec<A> {
    let mut seen = HashSet::with_capacity(keys.len());
    attributes
        .into_iter()
        .filter(|attribute| {
            let key = attribute.stripped();
            keys.contains(&key) && seen.insert(key)
        })
        .collect()
}

/// Folds any number of containers, earliest first; earlier ones win.
///
/// An empty input yields an empty container.
pub fn merge_all<S: Attributed>(styles: impl IntoIterator<Item = S>) -> S {
    let mut styles = styles.into_iter();
    match styles.next() {
        Some(first) => styles.fold(first, |acc, next| acc.merge_slave(&next)),
        None => S::empty(),
    }
}

/// Merging for operands that may be absent.
///
/// An absent operand acts as the empty container: merging it with a present
/// one returns the present one unchanged.
pub trait MergeOptional<S: Attributed> {
    /// Merges `slave` under `self`; `self` wins when present.
    fn merge_slave(self, slave: S) -> S;

    /// Merges `self` under `master`; `master` wins.
    fn merge_master(self, master: S) -> S;
}

impl<S: Attributed> MergeOptional<S> for Option<S> {
    fn merge_slave(self, slave: S) -> S {
        match self {
            Some(master) => master.merge_slave(&slave),
            None => slave,
        }
    }

    fn merge_master(self, master: S) -> S {
        match self {
            Some(slave) => master.merge_slave(&slave),
            None => master,
        }
    }
}

impl<S: Attributed> MergeOptional<S> for Option<&S> {
    fn merge_slave(self, slave: S) -> S {
        self.cloned().merge_slave(slave)
    }

    fn merge_master(self, master: S) -> S {
        self.cloned().merge_master(master)
    }
}
