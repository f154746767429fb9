//! Biased-coin style sampling from weighted outcomes

mod distribution;

pub use distribution::{normalise, tally, Distribution};

/// Sample distributions for the dice exercise
pub mod samples {
    use super::Distribution;

    /// Six equally likely faces
    pub fn fair_die() -> Distribution<u8> {
        let mut die = Distribution::new();
        for face in 1..=6 {
            die.increment(face);
        }
        die
    }

    /// Face 1 is ten times as likely as each other face
    pub fn loaded_die() -> Distribution<u8> {
        let mut die = fair_die();
        for _ in 0..9 {
            die.increment(1);
        }
        die
    }

}
