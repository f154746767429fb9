//! First-order Markov text generation

mod chain;
mod text;

pub use chain::MarkovChain;
pub use text::{split_documents, tokenize, HUMPTY_DUMPTY};

/// Hand-written chains
pub mod samples {
    use super::MarkovChain;
    use crate::probability::Distribution;

    fn certain(word: &str) -> Distribution<String> {
        let mut d = Distribution::new();
        d.increment(word.to_string());
        d
    }

    /// The "red flower red car red car red flower" chain: always start on
    /// "red", follow it with "car" or "flower" evenly, then back to "red"
    pub fn red_chain() -> MarkovChain {
        let mut after_red = Distribution::new();
        after_red.increment("car".to_string());
        after_red.increment("flower".to_string());

        MarkovChain::new()
            .with_initial(certain("red"))
            .with_transitions("red", after_red)
            .with_transitions("car", certain("red"))
            .with_transitions("flower", certain("red"))
    }
}
