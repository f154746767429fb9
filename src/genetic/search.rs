//! Generational genetic search over knapsack chromosomes

use super::knapsack::{Chromosome, Item, Solution};
use crate::error::{PrimerError, PrimerResult};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Share of each ranked generation kept as parents
    pub selection_ratio: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 20,
            selection_ratio: 0.5,
        }
    }
}

impl GaConfig {
    fn selected_count(&self) -> usize {
        (self.population_size as f64 * self.selection_ratio) as usize
    }

    fn validate(&self) -> PrimerResult<()> {
        if !(self.selection_ratio > 0.0 && self.selection_ratio <= 1.0) {
            return Err(PrimerError::InvalidConfig(format!(
                "selection ratio must be in (0, 1], got {}",
                self.selection_ratio
            )));
        }
        if self.selected_count() == 0 {
            return Err(PrimerError::InvalidConfig(format!(
                "population of {} keeps no parents at ratio {}",
                self.population_size, self.selection_ratio
            )));
        }
        Ok(())
    }
}

/// Best solution plus the best fitness of every generation
#[derive(Debug, Clone)]
pub struct Evolution {
    pub best: Solution,
    pub history: Vec<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct GeneticSearch {
    config: GaConfig,
}

impl GeneticSearch {
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Evolve a population and return its fittest member
    pub fn run<R: Rng + ?Sized>(
        &self,
        items: &[Item],
        capacity: u64,
        rng: &mut R,
    ) -> PrimerResult<Solution> {
        self.evolve(items, capacity, rng).map(|evolution| evolution.best)
    }

    /// Like [`run`](Self::run), also recording per-generation best fitness
    pub fn evolve<R: Rng + ?Sized>(
        &self,
        items: &[Item],
        capacity: u64,
        rng: &mut R,
    ) -> PrimerResult<Evolution> {
        self.config.validate()?;

        let mut population: Vec<Chromosome> = (0..self.config.population_size)
            .map(|_| Chromosome::random(items.len(), rng))
            .collect();
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            let ranked = rank(population, items, capacity);
            let best_fitness = ranked.first().map(|(_, f)| *f).unwrap_or(0);
            history.push(best_fitness);
            tracing::debug!(generation, best_fitness, "generation ranked");

            let keep = self.config.selected_count().min(ranked.len());
            let mut ranked = ranked.into_iter().map(|(c, _)| c);
            let selected: Vec<Chromosome> = ranked.by_ref().take(keep).collect();
            let mut rejected: Vec<Chromosome> = ranked.collect();

            let children = crossover(&selected, rng);
            population = selected;
            population.extend(children);

            while population.len() < self.config.population_size {
                let runt = if rejected.is_empty() {
                    Chromosome::random(items.len(), rng)
                } else {
                    rejected.swap_remove(rng.gen_range(0..rejected.len()))
                };
                population.push(runt);
            }
        }

        let best = rank(population, items, capacity)
            .into_iter()
            .next()
            .map(|(c, _)| c)
            .filter(|c| c.totals(items).1 <= capacity)
            .map(|c| Solution::new(c, items))
            .unwrap_or_else(|| Solution::empty(items.len()));

        Ok(Evolution { best, history })
    }
}

/// Chromosomes with their fitness, fittest first; equal fitness keeps order
fn rank(population: Vec<Chromosome>, items: &[Item], capacity: u64) -> Vec<(Chromosome, u64)> {
    let mut scored: Vec<(Chromosome, u64)> = population
        .into_iter()
        .map(|c| {
            let fitness = c.fitness(items, capacity);
            (c, fitness)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

/// One child per consecutive pair of shuffled parents
///
/// Each child takes a random half of its genes from the first parent and
/// the rest from the second.
fn crossover<R: Rng + ?Sized>(parents: &[Chromosome], rng: &mut R) -> Vec<Chromosome> {
    let mut parents = parents.to_vec();
    parents.shuffle(rng);

    let Some(len) = parents.first().map(Chromosome::len) else {
        return Vec::new();
    };

    parents
        .windows(2)
        .map(|pair| {
            let mut indexes: Vec<usize> = (0..len).collect();
            indexes.shuffle(rng);
            let mut from_first = vec![false; len];
            for &i in &indexes[..len / 2] {
                from_first[i] = true;
            }

            let genes = (0..len)
                .map(|i| {
                    if from_first[i] {
                        pair[0].0[i]
                    } else {
                        pair[1].0[i]
                    }
                })
                .collect();
            Chromosome(genes)
        })
        .collect()
}
