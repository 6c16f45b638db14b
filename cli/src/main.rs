use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{rngs::SmallRng, SeedableRng};
use tracing::{debug, info, warn};

use arbor::prelude::*;
use arbor_trees::{DecisionTree, DecisionTreeValidParams};

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Train and evaluate binary decision trees on numeric CSV data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// RNG seed for shuffling and fold assignment (drawn at random if absent)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Input and tree parameters shared by all subcommands.
#[derive(Args, Debug, Clone)]
struct TreeArgs {
    /// CSV file with one sample per line and the class label in the last column (`.gz` allowed)
    #[arg(long)]
    data: PathBuf,

    /// Maximal depth of the tree, the root has depth 0
    #[arg(long, default_value_t = 5)]
    max_depth: usize,

    /// Impurity decrease a split has to exceed to be applied
    #[arg(long, default_value_t = 0.0)]
    min_impurity_decrease: f64,
}

#[derive(Subcommand)]
enum Command {
    /// Fit a tree on a shuffled training split and report train and test accuracy
    Train {
        #[command(flatten)]
        tree: TreeArgs,

        /// Fraction of the samples used for training
        #[arg(long, default_value_t = 0.8)]
        train_ratio: f64,

        /// Write the fitted tree as Graphviz DOT description to this file
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Label splits with the feature names of the CSV header
        #[arg(long, default_value_t = false)]
        feature_names: bool,
    },

    /// Estimate the accuracy with k-fold cross validation
    CrossValidate {
        #[command(flatten)]
        tree: TreeArgs,

        /// Number of folds
        #[arg(long, default_value_t = 5)]
        folds: usize,
    },
}

fn load(path: &Path) -> Result<Table<f64>> {
    let table = arbor_datasets::load_csv(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        nsamples = table.nsamples(),
        nfeatures = table.nfeatures(),
        class_counts = %arbor::dataset::format_class_counts(&table.class_counts()),
        "dataset loaded"
    );

    Ok(table)
}

fn build_params(tree: &TreeArgs, seed: u64) -> Result<DecisionTreeValidParams<f64>> {
    DecisionTree::params()
        .max_depth(tree.max_depth)
        .min_impurity_decrease(tree.min_impurity_decrease)
        .seed(Some(seed))
        .check()
        .context("invalid tree parameters")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "random generator seeded");
    let mut rng = SmallRng::seed_from_u64(seed);

    match cli.command {
        Command::Train {
            tree,
            train_ratio,
            dot,
            feature_names,
        } => {
            let params = build_params(&tree, seed)?;
            let table = load(&tree.data)?;

            let (train, test) = table
                .shuffle(&mut rng)
                .split_with_ratio(train_ratio)
                .context("invalid train ratio")?;
            info!(
                train = train.nsamples(),
                test = test.nsamples(),
                "dataset split"
            );

            let model = params.fit(&train).context("training failed")?;
            info!(
                depth = model.depth(),
                leaves = model.num_leaves(),
                "decision tree fitted"
            );
            debug!("fitted tree:\n{}", model);

            let train_accuracy = model.score(train.records(), train.targets())?;
            println!("train accuracy: {:.4}", train_accuracy);
            if test.is_empty() {
                warn!("test split is empty, no test accuracy");
            } else {
                let test_accuracy = model.score(test.records(), test.targets())?;
                println!("test accuracy: {:.4}", test_accuracy);

                let prediction = model.predict(test.records())?;
                let confusion = ConfusionMatrix::new(&prediction, test.targets())?;
                println!("{}", confusion);
            }

            if let Some(path) = dot {
                let description = model
                    .export_to_dot()
                    .feature_names(feature_names)
                    .to_string();
                std::fs::write(&path, description)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "tree description written");
            }
        }

        Command::CrossValidate { tree, folds } => {
            let params = build_params(&tree, seed)?;
            let table = load(&tree.data)?;

            let pairs = table
                .cross_validation_pairs(folds, &mut rng)
                .context("invalid number of folds")?;

            let mut accuracies = Vec::with_capacity(folds);
            for (fold, (train, validation)) in pairs.iter().enumerate() {
                let model = params
                    .fit(train)
                    .with_context(|| format!("training failed on fold {}", fold + 1))?;
                let accuracy = model.score(validation.records(), validation.targets())?;
                println!("fold {}: {:.4}", fold + 1, accuracy);
                accuracies.push(accuracy);
            }

            let mean = accuracies.iter().sum::<f64>() / accuracies.len() as f64;
            println!("mean accuracy: {:.4}", mean);
        }
    }

    Ok(())
}
