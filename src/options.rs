use clap::{Parser, Subcommand};

/// Naive Bayes sentiment classifier for movie reviews.
#[derive(Parser, Debug)]
#[command(name = "rs_sentiment", version, about)]
pub struct Cli {
    /// Configuration file (optional; built-in defaults apply otherwise)
    #[arg(short, long, default_value = "config")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rebuild the frequency models from the labeled review corpus
    Train,
    /// Classify a piece of text as positive, negative or neutral
    Classify {
        /// The text to classify
        text: String,
    },
}
