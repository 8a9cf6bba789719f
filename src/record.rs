//! The record type and the comparison configuration selecting how records order.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::SortError;

/// Capacity of the inline name buffer, including the terminator slot.
pub const MAX_NAME_LEN: usize = 50;

/// Fixed-capacity inline name, so that [`Record`] stays `Copy`.
///
/// Holds at most `MAX_NAME_LEN - 1` bytes; longer input is truncated on a char
/// boundary. Ordering is byte-wise, which matches `strcmp`.
#[derive(Clone, Copy)]
pub struct Name {
    bytes: [u8; MAX_NAME_LEN],
    len: u8,
}

impl Name {
    pub fn new(s: &str) -> Self {
        let mut end = s.len().min(MAX_NAME_LEN - 1);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        let mut bytes = [0u8; MAX_NAME_LEN];
        bytes[..end].copy_from_slice(&s.as_bytes()[..end]);
        Self {
            bytes,
            len: end as u8,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        // construction only ever cuts on a char boundary
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Name {}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One student-style record: identifier, name, category and three sub-scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Record {
    pub id: i32,
    pub name: Name,
    pub category: char,
    pub scores: [i32; 3],
}

impl Record {
    pub fn new(id: i32, name: &str, category: char, scores: [i32; 3]) -> Self {
        Self {
            id,
            name: Name::new(name),
            category,
            scores,
        }
    }

    /// A key carrying only an identifier, for identifier-keyed lookups.
    pub fn probe(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Sum of the three sub-scores, widened so no `i32` inputs can overflow.
    #[inline]
    pub fn total(&self) -> i64 {
        self.scores.iter().map(|&s| i64::from(s)).sum()
    }
}

/// Which field of a [`Record`] drives the ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Criterion {
    Identifier,
    Name,
    Category,
    ScoreSum,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Identifier,
        Criterion::Name,
        Criterion::Category,
        Criterion::ScoreSum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Identifier => "identifier",
            Criterion::Name => "name",
            Criterion::Category => "category",
            Criterion::ScoreSum => "score-sum",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "identifier" => Ok(Criterion::Identifier),
            "name" => Ok(Criterion::Name),
            "category" | "gender" => Ok(Criterion::Category),
            "score-sum" | "score_sum" | "scoresum" | "total" => Ok(Criterion::ScoreSum),
            _ => Err(SortError::UnknownCriterion(s.to_string())),
        }
    }
}

/// Numeric criterion codes as used by batch drivers: 1 = id, 2 = name,
/// 3 = category, 4 = score sum.
impl TryFrom<u8> for Criterion {
    type Error = SortError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Criterion::Identifier),
            2 => Ok(Criterion::Name),
            3 => Ok(Criterion::Category),
            4 => Ok(Criterion::ScoreSum),
            _ => Err(SortError::UnknownCriterion(code.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Orient an ascending ordering to this direction.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(SortError::UnknownDirection(s.to_string())),
        }
    }
}

/// `1` is ascending, `-1` is descending.
impl TryFrom<i8> for Direction {
    type Error = SortError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Direction::Ascending),
            -1 => Ok(Direction::Descending),
            _ => Err(SortError::UnknownDirection(code.to_string())),
        }
    }
}

/// The (criterion, direction) pair a comparator orders by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompareConfig {
    pub criterion: Criterion,
    pub direction: Direction,
}

impl CompareConfig {
    pub fn new(criterion: Criterion, direction: Direction) -> Self {
        Self {
            criterion,
            direction,
        }
    }

    pub fn ascending(criterion: Criterion) -> Self {
        Self::new(criterion, Direction::Ascending)
    }

    pub fn descending(criterion: Criterion) -> Self {
        Self::new(criterion, Direction::Descending)
    }

    /// Parse from the numeric codes, rejecting unknown values.
    pub fn from_codes(criterion: u8, direction: i8) -> Result<Self, SortError> {
        Ok(Self::new(
            Criterion::try_from(criterion)?,
            Direction::try_from(direction)?,
        ))
    }

    /// Every criterion in both directions.
    pub fn all() -> impl Iterator<Item = CompareConfig> {
        Criterion::ALL.into_iter().flat_map(|c| {
            [Direction::Ascending, Direction::Descending]
                .into_iter()
                .map(move |d| CompareConfig::new(c, d))
        })
    }
}

impl fmt::Display for CompareConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.criterion, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_truncates_on_char_boundary() {
        let long = "가".repeat(30);
        let name = Name::new(&long);
        assert!(name.len() <= MAX_NAME_LEN - 1);
        assert_eq!(name.len() % 3, 0);
        assert!(long.starts_with(name.as_str()));
    }

    #[test]
    fn test_name_orders_bytewise() {
        assert!(Name::new("Alice") < Name::new("Bob"));
        assert!(Name::new("Zed") < Name::new("alice"));
        assert!(Name::new("Al") < Name::new("Alice"));
    }

    #[test]
    fn test_record_total() {
        let r = Record::new(7, "Kim", 'F', [90, 80, 70]);
        assert_eq!(r.total(), 240);
        let big = Record::new(8, "Max", 'M', [i32::MAX, i32::MAX, 1]);
        assert_eq!(big.total(), 2 * i64::from(i32::MAX) + 1);
        let small = Record::new(9, "Min", 'F', [i32::MIN, i32::MIN, -1]);
        assert_eq!(small.total(), 2 * i64::from(i32::MIN) - 1);
    }

    #[test]
    fn test_config_codes() {
        assert_eq!(
            CompareConfig::from_codes(4, -1),
            Ok(CompareConfig::descending(Criterion::ScoreSum))
        );
        assert_eq!(
            CompareConfig::from_codes(5, 1),
            Err(SortError::UnknownCriterion("5".to_string()))
        );
        assert_eq!(
            CompareConfig::from_codes(1, 0),
            Err(SortError::UnknownDirection("0".to_string()))
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("ID".parse::<Criterion>(), Ok(Criterion::Identifier));
        assert_eq!("desc".parse::<Direction>(), Ok(Direction::Descending));
        assert!("height".parse::<Criterion>().is_err());
        assert_eq!(CompareConfig::all().count(), 8);
    }
}
