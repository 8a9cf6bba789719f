//! Comparators shared by every sort, tree and container in the crate.

use std::{cmp::Ordering, fmt::Debug, marker::PhantomData};

use crate::record::{CompareConfig, Criterion, Record};

/// A total order over `T`, carried by value into every sort and tree.
pub trait KeyComparator<T>: Clone + Debug {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    #[inline]
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }
}

/// Orders by `T`'s own `Ord`.
pub struct NaturalOrder<T> {
    _t: PhantomData<T>,
}

impl<T> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NaturalOrder<T> {}

impl<T> Debug for NaturalOrder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NaturalOrder")
    }
}

impl<T> NaturalOrder<T> {
    pub fn new() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyComparator<T> for NaturalOrder<T>
where
    T: Ord,
{
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Orders [`Record`]s by the field and direction of a [`CompareConfig`].
///
/// For [`Criterion::ScoreSum`], equal totals fall back to the three sub-scores
/// in order, the larger sub-score first. That fallback ignores the direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordComparator {
    config: CompareConfig,
}

impl RecordComparator {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> CompareConfig {
        self.config
    }
}

impl From<CompareConfig> for RecordComparator {
    fn from(config: CompareConfig) -> Self {
        Self::new(config)
    }
}

impl KeyComparator<Record> for RecordComparator {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let dir = self.config.direction;
        match self.config.criterion {
            Criterion::Identifier => dir.apply(a.id.cmp(&b.id)),
            Criterion::Name => dir.apply(a.name.cmp(&b.name)),
            Criterion::Category => dir.apply(a.category.cmp(&b.category)),
            Criterion::ScoreSum => dir.apply(a.total().cmp(&b.total())).then_with(|| {
                a.scores
                    .iter()
                    .zip(b.scores.iter())
                    .map(|(x, y)| y.cmp(x))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
        }
    }
}
