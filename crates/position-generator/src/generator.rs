//! Main generator for producing position records.

use crate::{GeneratorError, Position};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// A validated, non-negative record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCount(usize);

impl RowCount {
    /// Wrap a count that is already known to be valid.
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    /// The count as a `usize`.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for RowCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for RowCount {
    type Error = GeneratorError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| GeneratorError::InvalidCount(count.to_string()))
    }
}

impl TryFrom<f64> for RowCount {
    type Error = GeneratorError;

    fn try_from(count: f64) -> Result<Self, Self::Error> {
        if !count.is_finite() || count < 0.0 || count.fract() != 0.0 || count > usize::MAX as f64
        {
            return Err(GeneratorError::InvalidCount(count.to_string()));
        }
        Ok(Self(count as usize))
    }
}

impl FromStr for RowCount {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::try_from(i);
        }
        match trimmed.parse::<f64>() {
            Ok(f) => Self::try_from(f),
            Err(_) => Err(GeneratorError::InvalidCount(s.to_string())),
        }
    }
}

/// Generator that produces synthetic position records.
///
/// Ids are 1-based and contiguous for the lifetime of one generator. Each
/// record is drawn from the generator's RNG without looking at any other
/// record.
pub struct PositionGenerator {
    /// Random number generator (entropy-seeded unless built with `seeded`)
    rng: StdRng,
    /// Id assigned to the next record
    next_id: u64,
    /// Fixed generation time; `None` reads the clock per batch
    as_of: Option<DateTime<Utc>>,
}

impl PositionGenerator {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed.
    ///
    /// Two generators with the same seed and the same `as_of` produce identical
    /// records.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            next_id: 1,
            as_of: None,
        }
    }

    /// Pin the generation time used for `lastUpdate` and the date windows.
    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Id the next record will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Generate the next position.
    pub fn next_position(&mut self) -> Position {
        let as_of = self.as_of.unwrap_or_else(Utc::now);
        self.next_position_at(as_of)
    }

    fn next_position_at(&mut self, as_of: DateTime<Utc>) -> Position {
        let id = self.next_id;
        self.next_id += 1;
        Position::draw(&mut self.rng, id, as_of)
    }

    /// Generate `count` positions lazily.
    ///
    /// All records of the batch share one generation timestamp.
    pub fn positions(&mut self, count: usize) -> PositionIterator<'_> {
        let as_of = self.as_of.unwrap_or_else(Utc::now);
        PositionIterator {
            generator: self,
            as_of,
            remaining: count,
            produced: 0,
        }
    }
}

impl Default for PositionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that lazily generates positions.
pub struct PositionIterator<'a> {
    generator: &'a mut PositionGenerator,
    as_of: DateTime<Utc>,
    remaining: usize,
    produced: usize,
}

impl Iterator for PositionIterator<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.produced += 1;
        if self.produced % 10_000 == 0 {
            debug!("Generated {} positions", self.produced);
        }

        Some(self.generator.next_position_at(self.as_of))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PositionIterator<'_> {}

/// Generate `count` positions with a fresh entropy-seeded generator.
pub fn generate(count: RowCount) -> Vec<Position> {
    info!("Generating {} positions", count);
    let positions: Vec<Position> = PositionGenerator::new().positions(count.get()).collect();
    info!("Generated {} positions", positions.len());
    positions
}

/// Validate a raw count and generate that many positions.
pub fn generate_checked(count: i64) -> Result<Vec<Position>, GeneratorError> {
    Ok(generate(RowCount::try_from(count)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generate_zero() {
        assert!(generate(RowCount::new(0)).is_empty());
    }

    #[test]
    fn test_generate_ids_are_contiguous() {
        let positions = generate(RowCount::new(250));

        assert_eq!(positions.len(), 250);
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.id, i as u64 + 1);
        }
    }

    #[test]
    fn test_generate_tens_of_thousands() {
        let positions = generate(RowCount::new(20_000));

        assert_eq!(positions.len(), 20_000);
        assert_eq!(positions.first().map(|p| p.id), Some(1));
        assert_eq!(positions.last().map(|p| p.id), Some(20_000));
        assert!(positions.windows(2).all(|w| w[1].id == w[0].id + 1));
    }

    #[test]
    fn test_batch_shares_timestamp() {
        let mut generator = PositionGenerator::seeded(9);
        let positions: Vec<Position> = generator.positions(20).collect();

        assert!(positions
            .iter()
            .all(|p| p.last_update == positions[0].last_update));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = PositionGenerator::seeded(42).with_as_of(as_of());
        let mut gen2 = PositionGenerator::seeded(42).with_as_of(as_of());

        let a: Vec<Position> = gen1.positions(10).collect();
        let b: Vec<Position> = gen2.positions(10).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_continue_across_batches() {
        let mut generator = PositionGenerator::seeded(42).with_as_of(as_of());

        assert_eq!(generator.next_id(), 1);
        let first: Vec<Position> = generator.positions(3).collect();
        let second = generator.next_position();

        assert_eq!(first.last().map(|p| p.id), Some(3));
        assert_eq!(second.id, 4);
        assert_eq!(generator.next_id(), 5);
    }

    #[test]
    fn test_iterator_is_exact_size() {
        let mut generator = PositionGenerator::seeded(1);
        let mut iter = generator.positions(3);

        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_row_count_validation() {
        assert_eq!(RowCount::try_from(5i64).unwrap().get(), 5);
        assert_eq!(RowCount::try_from(0i64).unwrap().get(), 0);
        assert_eq!(RowCount::try_from(12.0f64).unwrap().get(), 12);
        assert_eq!("  40 ".parse::<RowCount>().unwrap().get(), 40);
        assert_eq!("3.0".parse::<RowCount>().unwrap().get(), 3);

        assert!(matches!(
            RowCount::try_from(-1i64),
            Err(GeneratorError::InvalidCount(_))
        ));
        assert!(RowCount::try_from(2.5f64).is_err());
        assert!(RowCount::try_from(f64::NAN).is_err());
        assert!(RowCount::try_from(-0.5f64).is_err());
        assert!("ten".parse::<RowCount>().is_err());
        assert!("-3".parse::<RowCount>().is_err());
    }

    #[test]
    fn test_generate_checked() {
        assert_eq!(generate_checked(4).unwrap().len(), 4);
        assert!(matches!(
            generate_checked(-10),
            Err(GeneratorError::InvalidCount(_))
        ));
    }
}
