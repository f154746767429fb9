//! Weighted discrete distributions and inverse-CDF sampling

use crate::error::{PrimerError, PrimerResult};
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Scale `weights` so they sum to 1
///
/// A zero sum yields all zeros rather than dividing by zero.
pub fn normalise(weights: &[f64]) -> Vec<f64> {
    let sum: f64 = weights.iter().sum();
    if sum != 0.0 {
        weights.iter().map(|w| w / sum).collect()
    } else {
        vec![0.0; weights.len()]
    }
}

/// Count how often each outcome occurs
pub fn tally<K, I>(draws: I) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts = BTreeMap::new();
    for draw in draws {
        *counts.entry(draw).or_insert(0) += 1;
    }
    counts
}

/// A discrete distribution over outcomes `K`, kept in insertion order
///
/// Weights are relative (raw counts are fine); they are normalised when
/// sampling. Insertion order decides which outcome owns each slice of the
/// unit interval.
#[derive(Debug, Clone)]
pub struct Distribution<K> {
    entries: Vec<(K, f64)>,
    index: HashMap<K, usize>,
}

impl<K: PartialEq> PartialEq for Distribution<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K> Default for Distribution<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Distribution<K> {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(outcome, weight)` pairs; repeated outcomes accumulate
    pub fn from_weights<I>(weights: I) -> PrimerResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut distribution = Self::new();
        for (key, weight) in weights {
            distribution.add(key, weight)?;
        }
        Ok(distribution)
    }

    /// Add `weight` to an outcome, appending it if new
    pub fn add(&mut self, key: K, weight: f64) -> PrimerResult<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(PrimerError::InvalidConfig(format!(
                "probability weight must be finite and non-negative, got {weight}"
            )));
        }
        self.accumulate(key, weight);
        Ok(())
    }

    /// Add one observation of an outcome
    pub fn increment(&mut self, key: K) {
        self.accumulate(key, 1.0);
    }

    fn accumulate(&mut self, key: K, weight: f64) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += weight,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, weight));
            }
        }
    }

    /// Raw weight of an outcome (0 if absent)
    pub fn weight(&self, key: &K) -> f64 {
        self.index
            .get(key)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    /// Whether the outcome has an entry
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K> Distribution<K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of raw weights
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Outcomes and raw weights in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.entries.iter().map(|(k, w)| (k, *w))
    }

    /// Outcomes with weights scaled to sum to 1
    pub fn normalised(&self) -> Vec<(&K, f64)> {
        let weights: Vec<f64> = self.entries.iter().map(|(_, w)| *w).collect();
        self.entries
            .iter()
            .map(|(k, _)| k)
            .zip(normalise(&weights))
            .collect()
    }

    /// Running sums of the normalised weights
    ///
    /// When the total is positive the final value is exactly 1.0, so
    /// rounding can never leave part of the unit interval unowned.
    pub fn cumulative(&self) -> Vec<(&K, f64)> {
        let mut running = 0.0;
        let mut cumulative: Vec<(&K, f64)> = self
            .normalised()
            .into_iter()
            .map(|(k, p)| {
                running += p;
                (k, running)
            })
            .collect();

        if self.total() > 0.0 {
            if let Some(last) = cumulative.last_mut() {
                last.1 = 1.0;
            }
        }
        cumulative
    }

    /// Outcome owning position `r` of the unit interval
    ///
    /// Returns the first outcome whose cumulative probability exceeds `r`,
    /// or the last outcome if none does. `None` only when empty.
    pub fn select(&self, r: f64) -> Option<&K> {
        let cumulative = self.cumulative();
        cumulative
            .iter()
            .find(|(_, c)| r < *c)
            .or_else(|| cumulative.last())
            .map(|(k, _)| *k)
    }

    /// Draw one outcome at random
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PrimerResult<&K> {
        if self.is_empty() {
            return Err(PrimerError::EmptyDistribution);
        }
        if self.total() <= 0.0 {
            tracing::warn!(outcomes = self.len(), "sampling a distribution with zero total weight");
        }

        let r: f64 = rng.gen();
        self.select(r).ok_or(PrimerError::EmptyDistribution)
    }
}
