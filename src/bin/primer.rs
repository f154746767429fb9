//! Primer CLI: run the classic AI exercises from the command line.
//!
//! Usage:
//!   primer path shortest|all|best [--graph FILE] [--from G] [--to D] [--json]
//!   primer dice [--throws N]
//!   primer markov [--file FILE [--artist NAME]] [--words N]
//!   primer train [--bias] [--test-ratio R]
//!   primer mlp | neuron | knapsack

use clap::{Parser, Subcommand, ValueEnum};
use primer::genetic::{brute_force, GaConfig, GeneticSearch, Item, MAX_BRUTE_FORCE_ITEMS};
use primer::graph::samples::{toy_graph, toy_weighted_graph};
use primer::graph::{load_graph, load_weighted_graph};
use primer::markov::samples::red_chain;
use primer::markov::HUMPTY_DUMPTY;
use primer::neural::{
    cross_validation_train, one_minus_x_dataset, split_data, train, Mlp, Neuron, TrainConfig,
};
use primer::probability::samples::{fair_die, loaded_die};
use primer::probability::{tally, Distribution};
use primer::{MarkovChain, PathQuery, PrimerResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "primer", version, about = "Classic AI exercises")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for every random choice (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level or filter directive, e.g. `trace` or `primer=info`
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first path search
    Path {
        #[arg(value_enum)]
        mode: PathMode,
        /// JSON or YAML adjacency file (defaults to the toy graph)
        #[arg(long)]
        graph: Option<PathBuf>,
        #[arg(long, default_value = "G")]
        from: String,
        #[arg(long, default_value = "D")]
        to: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Throw fair and loaded dice
    Dice {
        #[arg(long, default_value_t = 1000)]
        throws: usize,
    },
    /// Generate words from a Markov chain
    Markov {
        /// Training text, documents separated by blank lines
        /// (a lyrics CSV when --artist is given)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Read FILE as an artist,song,link,text CSV and keep this artist's songs
        #[arg(long, requires = "file")]
        artist: Option<String>,
        #[arg(long, default_value_t = 100)]
        words: usize,
    },
    /// Forward pass of a random multilayer perceptron
    Mlp {
        #[arg(long, default_value_t = 3)]
        inputs: usize,
        #[arg(long, value_delimiter = ',', default_value = "3,3")]
        hidden: Vec<usize>,
        #[arg(long, default_value_t = 1)]
        outputs: usize,
    },
    /// Activate a single neuron with fixed weights
    Neuron,
    /// Train a network to approximate 1 - x
    Train {
        #[arg(long, value_delimiter = ',', default_value = "3")]
        hidden: Vec<usize>,
        #[arg(long, default_value_t = 50)]
        epochs: usize,
        #[arg(long, default_value_t = 0.1)]
        learning_rate: f64,
        /// Training set size
        #[arg(long, default_value_t = 100)]
        samples: usize,
        /// Give every hidden neuron a bias
        #[arg(long)]
        bias: bool,
        /// Hold out this share of the samples and stop once the test error rises
        #[arg(long)]
        test_ratio: Option<f64>,
    },
    /// Genetic search vs exhaustive search on a random knapsack
    Knapsack {
        #[arg(long, default_value_t = 15)]
        items: usize,
        #[arg(long, default_value_t = 20)]
        population: usize,
        #[arg(long, default_value_t = 20)]
        generations: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PathMode {
    /// Fewest edges
    Shortest,
    /// Every path found
    All,
    /// Lowest total weight
    Best,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn report(result: PrimerResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> PrimerResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_path(mode: PathMode, graph: Option<PathBuf>, from: &str, to: &str, json: bool) -> PrimerResult<()> {
    let query = PathQuery::between(from, to);

    match mode {
        PathMode::Shortest => {
            let graph = match graph {
                Some(path) => load_graph(path)?,
                None => toy_graph(),
            };
            let result = query.shortest(&graph);
            if json {
                return print_json(&result);
            }
            println!("Shortest path {} -> {}: {}", from, to, result);
        }
        PathMode::All => {
            let graph = match graph {
                Some(path) => load_graph(path)?,
                None => toy_graph(),
            };
            let result = query.all(&graph);
            if json {
                return print_json(&result);
            }
            println!("{} path(s) {} -> {}:", result.len(), from, to);
            for path in &result.paths {
                println!("  {}", path);
            }
        }
        PathMode::Best => {
            let graph = match graph {
                Some(path) => load_weighted_graph(path)?,
                None => toy_weighted_graph(),
            };
            let result = query.best(&graph);
            if json {
                return print_json(&result);
            }
            if result.found {
                println!("Best path {} -> {}: {} (cost {})", from, to, result, result.cost);
            } else {
                println!("Best path {} -> {}: {}", from, to, result);
            }
        }
    }
    Ok(())
}

fn throw_dice(name: &str, die: &Distribution<u8>, throws: usize, rng: &mut StdRng) -> PrimerResult<()> {
    let draws = (0..throws)
        .map(|_| die.sample(rng).copied())
        .collect::<PrimerResult<Vec<u8>>>()?;
    println!("{} die, {} throws:", name, throws);
    for (face, count) in tally(draws) {
        println!("  {}: {}", face, count);
    }
    Ok(())
}

fn cmd_dice(throws: usize, rng: &mut StdRng) -> PrimerResult<()> {
    throw_dice("Fair", &fair_die(), throws, rng)?;
    throw_dice("Loaded", &loaded_die(), throws, rng)
}

fn cmd_markov(
    file: Option<PathBuf>,
    artist: Option<&str>,
    words: usize,
    rng: &mut StdRng,
) -> PrimerResult<()> {
    let red = red_chain().generate(rng, 7)?;
    println!("{}", red.join(" "));

    let chain = match (file, artist) {
        (Some(path), Some(artist)) => MarkovChain::from_csv_file(path, artist)?,
        (Some(path), None) => MarkovChain::from_file(path)?,
        (None, _) => MarkovChain::from_text(HUMPTY_DUMPTY),
    };
    let text = chain.generate(rng, words)?;
    println!("{}", text.join(" "));
    Ok(())
}

fn cmd_mlp(inputs: usize, hidden: &[usize], outputs: usize, rng: &mut StdRng) -> PrimerResult<()> {
    let mlp = Mlp::new(inputs, hidden, outputs, rng)?;
    let sample: Vec<f64> = (0..inputs).map(|_| rng.gen()).collect();
    let activation = mlp.activate(&sample)?;

    println!("Layers: {:?} ({} weights)", mlp.layers(), mlp.parameter_count());
    println!("Input:  {:?}", sample);
    println!("Output: {:?}", activation);
    Ok(())
}

fn cmd_neuron() -> PrimerResult<()> {
    let neuron = Neuron::new(vec![0.4, 0.7, 0.2]);
    let inputs = [0.3, 0.4, 0.5];
    let output = neuron.activate(&inputs)?;
    println!("Weights {:?}, inputs {:?}: {:.6}", neuron.weights, inputs, output);
    Ok(())
}

struct TrainOptions {
    samples: usize,
    bias: bool,
    test_ratio: Option<f64>,
}

fn cmd_train(
    hidden: &[usize],
    config: TrainConfig,
    options: TrainOptions,
    rng: &mut StdRng,
) -> PrimerResult<()> {
    let (items, targets) = one_minus_x_dataset(options.samples);

    let mut mlp = if options.bias {
        Mlp::with_bias(1, hidden, 1, rng)?
    } else {
        Mlp::new(1, hidden, 1, rng)?
    };

    match options.test_ratio {
        Some(ratio) => {
            let split = split_data(&items, &targets, ratio, rng)?;
            let outcome = cross_validation_train(&mut mlp, &split, &config)?;
            println!(
                "Layers {:?}, {} parameters, {} train / {} test samples",
                mlp.layers(),
                mlp.parameter_count(),
                split.train_items.len(),
                split.test_items.len()
            );
            println!(
                "{} of {} epochs{}: train error {:.6}, test error {:.6}",
                outcome.epochs_run,
                config.epochs,
                if outcome.stopped_early { " (stopped early)" } else { "" },
                outcome.train_error,
                outcome.test_error
            );
        }
        None => {
            let mut order: Vec<usize> = (0..items.len()).collect();
            order.shuffle(rng);
            let items: Vec<Vec<f64>> = order.iter().map(|&i| items[i].clone()).collect();
            let targets: Vec<Vec<f64>> = order.iter().map(|&i| targets[i].clone()).collect();

            let error = train(&mut mlp, &items, &targets, &config)?;
            println!(
                "Layers {:?}, {} parameters, {} epochs at rate {}: mean squared error {:.6}",
                mlp.layers(),
                mlp.parameter_count(),
                config.epochs,
                config.learning_rate,
                error
            );
        }
    }

    for x in [0.0, 0.25, 0.5, 0.75] {
        let y = mlp.activate(&[x])?;
        println!("  f({:.2}) = {:.4} (target {:.2})", x, y[0], 1.0 - x);
    }
    Ok(())
}

fn cmd_knapsack(count: usize, config: GaConfig, rng: &mut StdRng) -> PrimerResult<()> {
    let items: Vec<Item> = (0..count).map(|_| Item::random(rng, 1, 30)).collect();
    let capacity = 10 * count as u64;
    println!("{} items, capacity {}", count, capacity);

    let started = Instant::now();
    let ga = GeneticSearch::new(config).run(&items, capacity, rng)?;
    println!(
        "GA:          value {:>5}, weight {:>5}, {:.3}s",
        ga.value,
        ga.weight,
        started.elapsed().as_secs_f64()
    );

    if count > MAX_BRUTE_FORCE_ITEMS {
        println!("Brute force: skipped (more than {} items)", MAX_BRUTE_FORCE_ITEMS);
        return Ok(());
    }
    let started = Instant::now();
    let exact = brute_force(&items, capacity)?;
    println!(
        "Brute force: value {:>5}, weight {:>5}, {:.3}s",
        exact.value,
        exact.weight,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = primer::logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut rng = make_rng(cli.seed);
    let result = match cli.command {
        Commands::Path {
            mode,
            graph,
            from,
            to,
            json,
        } => cmd_path(mode, graph, &from, &to, json),
        Commands::Dice { throws } => cmd_dice(throws, &mut rng),
        Commands::Markov {
            file,
            artist,
            words,
        } => cmd_markov(file, artist.as_deref(), words, &mut rng),
        Commands::Mlp {
            inputs,
            hidden,
            outputs,
        } => cmd_mlp(inputs, &hidden, outputs, &mut rng),
        Commands::Neuron => cmd_neuron(),
        Commands::Train {
            hidden,
            epochs,
            learning_rate,
            samples,
            bias,
            test_ratio,
        } => {
            let config = TrainConfig::default()
                .epochs(epochs)
                .learning_rate(learning_rate);
            let options = TrainOptions {
                samples,
                bias,
                test_ratio,
            };
            cmd_train(&hidden, config, options, &mut rng)
        }
        Commands::Knapsack {
            items,
            population,
            generations,
        } => {
            let config = GaConfig {
                population_size: population,
                generations,
                ..GaConfig::default()
            };
            cmd_knapsack(items, config, &mut rng)
        }
    };
    std::process::exit(report(result));
}
