//! Genetic algorithm for the 0/1 knapsack problem

mod knapsack;
mod search;

pub use knapsack::{brute_force, Chromosome, Item, Solution, MAX_BRUTE_FORCE_ITEMS};
pub use search::{Evolution, GaConfig, GeneticSearch};
