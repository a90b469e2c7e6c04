pub mod classifiers;
pub mod config;
pub mod corpus;
pub mod logging;
pub mod model;
pub mod options;
pub mod store;
pub mod tokenize;
pub mod types;

use anyhow::{Context, Result};
use clap::Parser;

use crate::classifiers::naive_bayes::{ModelNames, SentimentClassifier};
use crate::config::Config;
use crate::corpus::CorpusReader;
use crate::logging::setup_logger;
use crate::options::{Cli, Command};
use crate::store::ModelStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = Config::from_file(&cli.config)
        .with_context(|| format!("failed to read configuration {:?}", cli.config))?;
    setup_logger(&cfg.logging.level);

    let negative_marker = cfg
        .corpus
        .negative_marker
        .chars()
        .next()
        .context("corpus.negative_marker must not be empty")?;
    let reader = CorpusReader::new(&cfg.corpus.dir, cfg.corpus.label_offset, negative_marker);
    let store = ModelStore::new(&cfg.store.dir);
    let names = ModelNames {
        positive: cfg.store.positive_name.clone(),
        negative: cfg.store.negative_name.clone(),
    };

    match cli.command {
        Command::Train => {
            SentimentClassifier::train(&store, &names, &reader)?;
        }
        Command::Classify { text } => {
            let classifier = SentimentClassifier::initialize(&store, &names, &reader)?;
            println!("{}", classifier.classify(&text)?);
        }
    }

    Ok(())
}
