//! 0/1 knapsack items, chromosomes and the exhaustive reference solver

use crate::error::{PrimerError, PrimerResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest item count the exhaustive solver accepts (2^25 subsets)
pub const MAX_BRUTE_FORCE_ITEMS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub value: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(value: u64, weight: u64) -> Self {
        Self { value, weight }
    }

    /// Value and weight drawn independently from `min..max`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> Self {
        if min >= max {
            return Self::new(min, min);
        }
        Self::new(rng.gen_range(min..max), rng.gen_range(min..max))
    }
}

/// One gene per item: `true` means the item is in the bag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chromosome(pub Vec<bool>);

impl Chromosome {
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self((0..len).map(|_| rng.gen_bool(0.5)).collect())
    }

    pub fn genes(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The items this chromosome puts in the bag
    pub fn phenotype<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items
            .iter()
            .zip(&self.0)
            .filter_map(|(item, &packed)| packed.then_some(item))
            .collect()
    }

    /// (total value, total weight) of the packed items, saturating at `u64::MAX`
    pub fn totals(&self, items: &[Item]) -> (u64, u64) {
        self.phenotype(items).iter().fold((0u64, 0u64), |(v, w), item| {
            (v.saturating_add(item.value), w.saturating_add(item.weight))
        })
    }

    /// Total value, or 0 when the bag is over capacity
    pub fn fitness(&self, items: &[Item], capacity: u64) -> u64 {
        let (value, weight) = self.totals(items);
        if weight > capacity {
            0
        } else {
            value
        }
    }
}

/// A packing and what it is worth
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub chromosome: Chromosome,
    pub value: u64,
    pub weight: u64,
}

impl Solution {
    pub fn new(chromosome: Chromosome, items: &[Item]) -> Self {
        let (value, weight) = chromosome.totals(items);
        Self {
            chromosome,
            value,
            weight,
        }
    }

    /// The empty bag
    pub fn empty(len: usize) -> Self {
        Self {
            chromosome: Chromosome(vec![false; len]),
            value: 0,
            weight: 0,
        }
    }

    pub fn items<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        self.chromosome.phenotype(items)
    }
}

/// Best packing by enumerating every subset
///
/// Ties keep the first subset found in bitmask order.
pub fn brute_force(items: &[Item], capacity: u64) -> PrimerResult<Solution> {
    if items.len() > MAX_BRUTE_FORCE_ITEMS {
        return Err(PrimerError::TooManyItems {
            count: items.len(),
            max: MAX_BRUTE_FORCE_ITEMS,
        });
    }

    let n = items.len();
    let mut best_mask = 0u32;
    let mut best_value = 0u64;

    for mask in 1u32..(1u32 << n) {
        let mut value = 0u64;
        let mut weight = 0u64;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                value = value.saturating_add(item.value);
                weight = weight.saturating_add(item.weight);
            }
        }
        if weight <= capacity && value > best_value {
            best_value = value;
            best_mask = mask;
        }
    }

    tracing::debug!(
        items = n,
        subsets = 1u64 << n,
        value = best_value,
        "exhaustive knapsack search finished"
    );

    let genes = (0..n).map(|i| best_mask & (1 << i) != 0).collect();
    Ok(Solution::new(Chromosome(genes), items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn items() -> Vec<Item> {
        vec![
            Item::new(10, 5),
            Item::new(40, 4),
            Item::new(30, 6),
            Item::new(50, 3),
        ]
    }

    #[test]
    fn test_phenotype_and_fitness() {
        let items = items();
        let c = Chromosome(vec![true, false, false, true]);

        let packed = c.phenotype(&items);
        assert_eq!(packed, vec![&items[0], &items[3]]);
        assert_eq!(c.totals(&items), (60, 8));
        assert_eq!(c.fitness(&items, 10), 60);
        assert_eq!(c.fitness(&items, 7), 0);
    }

    #[test]
    fn test_brute_force_finds_optimum() {
        // capacity 10: {40/4, 50/3} = 90 at weight 7 beats every other fit
        let solution = brute_force(&items(), 10).unwrap();
        assert_eq!(solution.value, 90);
        assert_eq!(solution.weight, 7);
        assert_eq!(solution.chromosome.genes(), &[false, true, false, true]);
    }

    #[test]
    fn test_brute_force_nothing_fits() {
        let solution = brute_force(&items(), 2).unwrap();
        assert_eq!(solution, Solution::empty(4));
        assert!(brute_force(&[], 10).unwrap().chromosome.is_empty());
    }

    #[test]
    fn test_brute_force_item_limit() {
        let items = vec![Item::new(1, 1); MAX_BRUTE_FORCE_ITEMS + 1];
        assert!(matches!(
            brute_force(&items, 10),
            Err(PrimerError::TooManyItems { count: 26, max: 25 })
        ));
    }

    #[test]
    fn test_huge_items_saturate() {
        let items = vec![Item::new(u64::MAX, u64::MAX), Item::new(u64::MAX, 1)];
        let both = Chromosome(vec![true, true]);
        assert_eq!(both.totals(&items), (u64::MAX, u64::MAX));
        assert_eq!(both.fitness(&items, u64::MAX - 1), 0);

        let solution = brute_force(&items, 1).unwrap();
        assert_eq!(solution.chromosome.genes(), &[false, true]);
        assert_eq!(solution.value, u64::MAX);

        let search = crate::genetic::GeneticSearch::new(crate::genetic::GaConfig::default());
        let mut rng = StdRng::seed_from_u64(5);
        let found = search.run(&items, u64::MAX, &mut rng).unwrap();
        assert_eq!(found.value, u64::MAX);
    }

    #[test]
    fn test_random_item_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let item = Item::random(&mut rng, 1, 30);
            assert!((1..30).contains(&item.value));
            assert!((1..30).contains(&item.weight));
        }
        assert_eq!(Item::random(&mut rng, 5, 5), Item::new(5, 5));
    }
}
