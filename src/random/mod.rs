//! Random picks: the decorative sample and the roulette draw
//!
//! Randomness here is presentation only. Callers pass in any [`Rng`]; tests
//! use a seeded `StdRng`, the CLI uses the thread-local generator.

mod error;

pub use error::RandomError;

use crate::IconRecord;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of records in a decorative sample or roulette draw
pub const PICKS: usize = 3;

/// Shuffle the collection and take the first few records
///
/// Returns fewer than [`PICKS`] records only when the collection is smaller.
pub fn decorative_sample<'a, R: Rng + ?Sized>(
    records: &'a [IconRecord],
    rng: &mut R,
) -> Vec<&'a IconRecord> {
    let mut shuffled: Vec<&IconRecord> = records.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(PICKS);
    shuffled
}

/// Outcome probabilities for the roulette
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouletteConfig {
    /// Probability that all three picks are the same city
    pub all_same: f64,
    /// Probability that exactly two picks are the same city
    pub two_same: f64,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            all_same: 0.05,
            two_same: 0.20,
        }
    }
}

impl RouletteConfig {
    /// Check that both probabilities are in range and sum to at most 1
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidProbability` describing the bad value.
    pub fn validate(&self) -> Result<(), RandomError> {
        for (name, p) in [("all_same", self.all_same), ("two_same", self.two_same)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(RandomError::InvalidProbability(format!("{name} = {p}")));
            }
        }
        if self.all_same + self.two_same > 1.0 {
            return Err(RandomError::InvalidProbability(format!(
                "all_same + two_same = {} exceeds 1",
                self.all_same + self.two_same
            )));
        }
        Ok(())
    }

    /// Which branch a uniform roll in `[0, 1)` lands in
    #[must_use]
    pub fn branch_for(&self, roll: f64) -> Branch {
        if roll < self.all_same {
            Branch::AllSame
        } else if roll < self.all_same + self.two_same {
            Branch::TwoSame
        } else {
            Branch::AllDifferent
        }
    }
}

/// Shape of a roulette draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    AllSame,
    TwoSame,
    AllDifferent,
}

impl Branch {
    const fn distinct_cities(self) -> usize {
        match self {
            Self::AllSame => 1,
            Self::TwoSame => 2,
            Self::AllDifferent => 3,
        }
    }

    /// The richest branch a collection with `cities` distinct cities can satisfy
    const fn capped(self, cities: usize) -> Self {
        match (self, cities) {
            (Self::AllDifferent, 2) => Self::TwoSame,
            (Self::AllDifferent | Self::TwoSame, 0 | 1) => Self::AllSame,
            (branch, _) => branch,
        }
    }
}

/// Draw three records for the roulette
///
/// Distinctness is by city name, not identifier, so the three-different
/// branch never yields a repeated city even if two records share one.
///
/// # Errors
///
/// Returns `RandomError::EmptyCatalog` for an empty collection, or
/// `RandomError::InvalidProbability` if `config` is out of range.
pub fn roulette_draw<'a, R: Rng + ?Sized>(
    records: &'a [IconRecord],
    config: &RouletteConfig,
    rng: &mut R,
) -> Result<Vec<&'a IconRecord>, RandomError> {
    config.validate()?;
    if records.is_empty() {
        return Err(RandomError::EmptyCatalog);
    }

    let roll: f64 = rng.random();
    let mut shuffled: Vec<&IconRecord> = records.iter().collect();
    shuffled.shuffle(rng);

    let mut cities = HashSet::new();
    let subjects: Vec<&IconRecord> = shuffled
        .into_iter()
        .filter(|r| cities.insert(r.city.as_str()))
        .take(PICKS)
        .collect();

    let branch = config.branch_for(roll).capped(subjects.len());
    let picks = match branch {
        Branch::AllSame => vec![subjects[0]; PICKS],
        Branch::TwoSame => {
            let mut picks = vec![subjects[0], subjects[0], subjects[1]];
            picks.shuffle(rng);
            picks
        }
        Branch::AllDifferent => subjects,
    };
    debug_assert_eq!(distinct_cities(&picks), branch.distinct_cities());

    Ok(picks)
}

fn distinct_cities(picks: &[&IconRecord]) -> usize {
    picks.iter().map(|r| r.city.as_str()).collect::<HashSet<_>>().len()
}

/// How a draw turned out, for the accompanying message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouletteOutcome {
    AllSame { city: String },
    TwoSame { duplicate: String, other: String },
    AllDifferent,
}

impl RouletteOutcome {
    /// Classify picks by the number of distinct city names
    #[must_use]
    pub fn classify(picks: &[&IconRecord]) -> Self {
        let mut seen: Vec<&str> = Vec::with_capacity(picks.len());
        let mut duplicate = None;
        for pick in picks {
            if seen.contains(&pick.city.as_str()) {
                duplicate.get_or_insert(pick.city.as_str());
            } else {
                seen.push(&pick.city);
            }
        }

        match (seen.as_slice(), duplicate) {
            ([city], _) => Self::AllSame {
                city: (*city).to_string(),
            },
            ([a, b], Some(dup)) => Self::TwoSame {
                duplicate: dup.to_string(),
                other: if *a == dup { (*b).to_string() } else { (*a).to_string() },
            },
            _ => Self::AllDifferent,
        }
    }
}

impl fmt::Display for RouletteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSame { city } => write!(f, "Jackpot! {city} three times. Pack your bags."),
            Self::TwoSame { duplicate, other } => {
                write!(f, "{duplicate} came up twice, with {other} as the odd one out.")
            }
            Self::AllDifferent => write!(f, "Three different cities. Spin again?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_records;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn odds(all_same: f64, two_same: f64) -> RouletteConfig {
        RouletteConfig { all_same, two_same }
    }

    #[test]
    fn test_decorative_sample_size() {
        let records = sample_records();
        let mut rng = rng();
        let sample = decorative_sample(&records, &mut rng);
        assert_eq!(sample.len(), PICKS);

        let ids: HashSet<&str> = sample.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), PICKS);
    }

    #[test]
    fn test_decorative_sample_small_collection() {
        let records = sample_records()[..2].to_vec();
        assert_eq!(decorative_sample(&records, &mut rng()).len(), 2);
        assert!(decorative_sample(&[], &mut rng()).is_empty());
    }

    #[test]
    fn test_decorative_sample_rerolls() {
        let records = sample_records();
        let mut rng = rng();
        let draws: HashSet<Vec<String>> = (0..20)
            .map(|_| decorative_sample(&records, &mut rng).iter().map(|r| r.id.clone()).collect())
            .collect();
        assert!(draws.len() > 1);
    }

    #[test]
    fn test_config_validation() {
        assert!(RouletteConfig::default().validate().is_ok());
        assert!(odds(-0.1, 0.2).validate().is_err());
        assert!(odds(0.6, 0.6).validate().is_err());
        assert!(odds(f64::NAN, 0.2).validate().is_err());
        assert!(odds(0.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_branch_for() {
        let config = RouletteConfig::default();
        assert_eq!(config.branch_for(0.0), Branch::AllSame);
        assert_eq!(config.branch_for(0.049), Branch::AllSame);
        assert_eq!(config.branch_for(0.05), Branch::TwoSame);
        assert_eq!(config.branch_for(0.249), Branch::TwoSame);
        assert_eq!(config.branch_for(0.25), Branch::AllDifferent);
    }

    #[test]
    fn test_draw_always_three() {
        let records = sample_records();
        let mut rng = rng();
        for _ in 0..200 {
            let picks = roulette_draw(&records, &RouletteConfig::default(), &mut rng).unwrap();
            assert_eq!(picks.len(), PICKS);
        }
    }

    #[test]
    fn test_draw_empty_catalog() {
        let result = roulette_draw(&[], &RouletteConfig::default(), &mut rng());
        assert_eq!(result, Err(RandomError::EmptyCatalog));
    }

    #[test]
    fn test_forced_branches() {
        let records = sample_records();
        let mut rng = rng();

        let all_same = odds(1.0, 0.0);
        let picks = roulette_draw(&records, &all_same, &mut rng).unwrap();
        assert!(matches!(RouletteOutcome::classify(&picks), RouletteOutcome::AllSame { .. }));

        let two_same = odds(0.0, 1.0);
        let picks = roulette_draw(&records, &two_same, &mut rng).unwrap();
        assert!(matches!(RouletteOutcome::classify(&picks), RouletteOutcome::TwoSame { .. }));

        let different = odds(0.0, 0.0);
        let picks = roulette_draw(&records, &different, &mut rng).unwrap();
        assert_eq!(RouletteOutcome::classify(&picks), RouletteOutcome::AllDifferent);
    }

    #[test]
    fn test_all_different_dedupes_by_city() {
        // four records, only three distinct cities
        let records = vec![
            IconRecord::new("paris-fr", "Paris", "France", "Europe", "Capital"),
            IconRecord::new("paris-us", "Paris", "United States", "North America", "Landmark"),
            IconRecord::new("lyon", "Lyon", "France", "Europe", "Landmark"),
            IconRecord::new("tokyo", "Tokyo", "Japan", "Asia", "Capital"),
        ];
        let config = odds(0.0, 0.0);
        let mut rng = rng();
        for _ in 0..100 {
            let picks = roulette_draw(&records, &config, &mut rng).unwrap();
            assert_eq!(distinct_cities(&picks), 3);
        }
    }

    #[test]
    fn test_too_few_cities_falls_back() {
        let records = vec![IconRecord::new("paris", "Paris", "France", "Europe", "Capital")];
        let config = odds(0.0, 0.0);
        let picks = roulette_draw(&records, &config, &mut rng()).unwrap();
        assert_eq!(picks.len(), PICKS);
        assert_eq!(
            RouletteOutcome::classify(&picks),
            RouletteOutcome::AllSame { city: "Paris".into() }
        );

        let records = sample_records()[..2].to_vec();
        let picks = roulette_draw(&records, &config, &mut rng()).unwrap();
        assert!(matches!(RouletteOutcome::classify(&picks), RouletteOutcome::TwoSame { .. }));
    }

    #[test]
    fn test_outcome_rates_converge() {
        const TRIALS: usize = 20_000;
        let records = sample_records();
        let config = RouletteConfig::default();
        let mut rng = rng();

        let (mut all_same, mut two_same) = (0usize, 0usize);
        for _ in 0..TRIALS {
            let picks = roulette_draw(&records, &config, &mut rng).unwrap();
            match RouletteOutcome::classify(&picks) {
                RouletteOutcome::AllSame { .. } => all_same += 1,
                RouletteOutcome::TwoSame { .. } => two_same += 1,
                RouletteOutcome::AllDifferent => {}
            }
        }

        let all_same_rate = all_same as f64 / TRIALS as f64;
        let two_same_rate = two_same as f64 / TRIALS as f64;
        assert!((all_same_rate - 0.05).abs() < 0.01, "all same rate {all_same_rate}");
        assert!((two_same_rate - 0.20).abs() < 0.015, "two same rate {two_same_rate}");
    }

    #[test]
    fn test_classify_two_same_identifies_duplicate() {
        let records = sample_records();
        let paris = &records[0];
        let tokyo = records.iter().find(|r| r.id == "tokyo").unwrap();

        for picks in [
            vec![paris, paris, tokyo],
            vec![tokyo, paris, paris],
            vec![paris, tokyo, paris],
        ] {
            assert_eq!(
                RouletteOutcome::classify(&picks),
                RouletteOutcome::TwoSame {
                    duplicate: "Paris".into(),
                    other: "Tokyo".into()
                }
            );
        }
    }

    #[test]
    fn test_outcome_messages() {
        let jackpot = RouletteOutcome::AllSame { city: "Lyon".into() };
        assert!(jackpot.to_string().contains("Lyon three times"));

        let pair = RouletteOutcome::TwoSame {
            duplicate: "Lyon".into(),
            other: "Tokyo".into(),
        };
        assert!(pair.to_string().starts_with("Lyon came up twice"));
        assert!(pair.to_string().contains("Tokyo"));

        assert_eq!(
            RouletteOutcome::AllDifferent.to_string(),
            "Three different cities. Spin again?"
        );
    }
}
