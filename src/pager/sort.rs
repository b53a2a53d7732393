//! Null-safe sort keys and the stable record sort.

use std::cmp::Ordering;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Comparable projection of a field value.
///
/// Missing, null and empty values all map to [`SortKey::Empty`], which behaves like
/// the empty string: it sorts before every other value. Values of different kinds
/// are ranked `Empty < Bool < Number < Text` so the order stays total.
#[derive(Debug, Clone)]
pub enum SortKey {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Empty => 0,
            SortKey::Bool(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Stable sort of `items` by the key extracted with `key_of`.
///
/// Keys are computed once per item. Equal keys keep their current relative order
/// in both directions.
pub fn stable_sort_by_key<T, F>(items: &mut Vec<T>, direction: SortDirection, mut key_of: F)
where
    F: FnMut(&T) -> SortKey,
{
    let mut keyed: Vec<(SortKey, T)> = items
        .drain(..)
        .map(|item| (key_of(&item), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}
