//! End-to-end runs of the sampling, Markov, neural and genetic exercises
//! with seeded randomness

use primer::genetic::{brute_force, GaConfig, GeneticSearch, Item};
use primer::graph::{load_graph, load_weighted_graph};
use primer::markov::{tokenize, HUMPTY_DUMPTY};
use primer::neural::{
    cross_validation_train, evaluate, one_minus_x_dataset, split_data, train, Mlp, TrainConfig,
};
use primer::probability::samples::{fair_die, loaded_die};
use primer::probability::tally;
use primer::{best_path, shortest_path, MarkovChain, PrimerError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::io::Write;

#[test]
fn test_loaded_die_favours_one() {
    let mut rng = StdRng::seed_from_u64(2024);
    let die = loaded_die();
    let throws = 15_000;

    let draws: Vec<u8> = (0..throws)
        .map(|_| *die.sample(&mut rng).unwrap())
        .collect();
    let counts = tally(draws);

    // face 1 has probability 10/15
    let ones = counts[&1u8] as f64 / throws as f64;
    assert!((ones - 10.0 / 15.0).abs() < 0.03, "got {ones}");
    for face in 2..=6u8 {
        let share = counts[&face] as f64 / throws as f64;
        assert!((share - 1.0 / 15.0).abs() < 0.02, "face {face}: {share}");
    }
}

#[test]
fn test_fair_die_covers_every_face() {
    let mut rng = StdRng::seed_from_u64(7);
    let die = fair_die();
    let faces: HashSet<u8> = (0..600).map(|_| *die.sample(&mut rng).unwrap()).collect();
    assert_eq!(faces, (1..=6).collect::<HashSet<u8>>());
}

#[test]
fn test_markov_generation_uses_only_observed_transitions() {
    let chain = MarkovChain::from_text(HUMPTY_DUMPTY);
    let tokens = tokenize(HUMPTY_DUMPTY);
    let observed: HashSet<(&str, &str)> = tokens
        .windows(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();

    let mut rng = StdRng::seed_from_u64(99);
    let words = chain.generate(&mut rng, 100).unwrap();

    assert_eq!(words[0], tokens[0]);
    assert!(words.len() <= 101);
    for pair in words.windows(2) {
        assert!(
            observed.contains(&(pair[0].as_str(), pair[1].as_str())),
            "unexpected transition {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_markov_chain_from_file() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "the cat sat\n\nthe dog ran\n\n\nthe end").unwrap();

    let chain = MarkovChain::from_file(file.path()).unwrap();
    assert_eq!(chain.initial().weight(&"the".to_string()), 3.0);

    let after_the = chain.next_distribution("the").unwrap();
    assert_eq!(after_the.len(), 3);
    assert!(chain.next_distribution("end").is_none());

    let mut rng = StdRng::seed_from_u64(1);
    let words = chain.generate(&mut rng, 10).unwrap();
    assert_eq!(words[0], "the");
    assert!(words.len() <= 3);
}

#[test]
fn test_markov_chain_from_lyrics_csv() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "artist,song,link,text\n\
         Queen,Bicycle,/q/1,\"I want to ride my bicycle\"\n\
         ABBA,Waterloo,/a/1,\"  My my, at Waterloo  \"\n\
         Queen,Radio,/q/2,\"I want to break free\"\n\
         ABBA,Mamma Mia,/a/2,\"My my, how can I resist you\"\n"
    )
    .unwrap();

    let abba = MarkovChain::from_csv_file(file.path(), "ABBA").unwrap();
    assert_eq!(abba.initial().weight(&"My".to_string()), 2.0);
    assert_eq!(abba.initial().len(), 1);
    assert_eq!(abba.next_distribution("my").unwrap().len(), 2);
    assert!(abba.next_distribution("want").is_none());

    let queen = MarkovChain::from_csv_file(file.path(), "Queen").unwrap();
    assert_eq!(queen.initial().weight(&"I".to_string()), 2.0);
    let after_to = queen.next_distribution("to").unwrap();
    assert!(after_to.contains(&"ride".to_string()));
    assert!(after_to.contains(&"break".to_string()));

    let mut rng = StdRng::seed_from_u64(5);
    let words = abba.generate(&mut rng, 20).unwrap();
    assert_eq!(words[0], "My");

    assert!(MarkovChain::from_csv_file(file.path().with_extension("missing"), "ABBA").is_err());
}

#[test]
fn test_empty_corpus_cannot_generate() {
    let chain = MarkovChain::from_text("");
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        chain.generate(&mut rng, 5),
        Err(PrimerError::EmptyDistribution)
    ));
}

#[test]
fn test_graph_files_round_trip_through_search() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("graph.yaml");
    std::fs::write(&yaml, "A: [B, C]\nB: [D]\nC: [D]\nD: []\n").unwrap();
    let graph = load_graph(&yaml).unwrap();
    assert_eq!(shortest_path(&graph, "A", "D").labels(), vec!["A", "B", "D"]);

    let json = dir.path().join("weighted.json");
    std::fs::write(
        &json,
        r#"{
            "A": [{"to": "B", "weight": 5.0}, {"to": "C", "weight": 1.0}],
            "B": [{"to": "D", "weight": 1.0}],
            "C": [{"to": "D", "weight": 1.0}]
        }"#,
    )
    .unwrap();
    let weighted = load_weighted_graph(&json).unwrap();
    let best = best_path(&weighted, "A", "D");
    assert_eq!(best.labels(), vec!["A", "C", "D"]);
    assert_eq!(best.cost, 2.0);

    let negative = dir.path().join("negative.json");
    std::fs::write(&negative, r#"{"A": [{"to": "B", "weight": -1.0}]}"#).unwrap();
    assert!(load_weighted_graph(&negative).is_err());
}

#[test]
fn test_training_approximates_one_minus_x() {
    let mut rng = StdRng::seed_from_u64(8);
    let (items, targets) = one_minus_x_dataset(100);
    let mut mlp = Mlp::new(1, &[3], 1, &mut rng).unwrap();

    let short = train(&mut mlp.clone(), &items, &targets, &TrainConfig::default().epochs(1)).unwrap();
    let long = train(&mut mlp, &items, &targets, &TrainConfig::default().epochs(300)).unwrap();

    assert!(long < short, "1 epoch {short}, 300 epochs {long}");
}

#[test]
fn test_cross_validation_on_one_minus_x() {
    let mut rng = StdRng::seed_from_u64(9);
    let (items, targets) = one_minus_x_dataset(100);
    let split = split_data(&items, &targets, 0.2, &mut rng).unwrap();
    assert_eq!(split.test_items.len(), 20);
    assert_eq!(split.train_items.len(), 80);

    let mut mlp = Mlp::with_bias(1, &[3, 2], 1, &mut rng).unwrap();
    let config = TrainConfig::default().epochs(100);
    let outcome = cross_validation_train(&mut mlp, &split, &config).unwrap();

    assert!(outcome.epochs_run >= 1 && outcome.epochs_run <= 100);
    if !outcome.stopped_early {
        assert_eq!(outcome.epochs_run, 100);
    }
    assert!(outcome.train_error.is_finite());

    // the reported test error is the one before any rise, so never above the final one
    let last = evaluate(&mlp, &split.test_items, &split.test_targets).unwrap();
    if outcome.stopped_early {
        assert!(outcome.test_error < last);
    } else {
        assert_eq!(outcome.test_error, last);
    }
}

#[test]
fn test_genetic_search_close_to_exhaustive() {
    let mut rng = StdRng::seed_from_u64(31);
    let items: Vec<Item> = (0..12).map(|_| Item::random(&mut rng, 1, 30)).collect();
    let capacity = 120;

    let exact = brute_force(&items, capacity).unwrap();
    let search = GeneticSearch::new(GaConfig {
        population_size: 40,
        generations: 40,
        ..GaConfig::default()
    });
    let ga = search.run(&items, capacity, &mut rng).unwrap();

    assert!(ga.weight <= capacity);
    assert!(ga.value <= exact.value);
    assert_eq!(ga.items(&items).len(), ga.chromosome.genes().iter().filter(|&&g| g).count());
}
