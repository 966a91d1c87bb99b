use crate::domain::action::OrderAction;
use serde::{Serialize, Serializer};
use std::fmt;

/// A set of [`OrderAction`]s.
///
/// Backed by a bitmask over the closed action enumeration, so it is `Copy`,
/// intersection is a single `&` and iteration always follows the
/// declaration order of `OrderAction` regardless of how the set was built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionSet(u16);

impl ActionSet {
    pub const EMPTY: Self = Self(0);

    pub const fn of(actions: &[OrderAction]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < actions.len() {
            bits |= actions[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, action: OrderAction) -> bool {
        self.0 & action.bit() != 0
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> Iter {
        Iter { set: self, next: 0 }
    }
}

pub struct Iter {
    set: ActionSet,
    next: usize,
}

impl Iterator for Iter {
    type Item = OrderAction;

    fn next(&mut self) -> Option<OrderAction> {
        while let Some(&action) = OrderAction::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(action) {
                return Some(action);
            }
        }
        None
    }
}

impl IntoIterator for ActionSet {
    type Item = OrderAction;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<OrderAction> for ActionSet {
    fn from_iter<I: IntoIterator<Item = OrderAction>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |bits, action| bits | action.bit()))
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Space-separated action names, e.g. `CANCEL EXPIRE ACCEPT`.
impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(action.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for ActionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
