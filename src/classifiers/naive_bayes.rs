use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::info;

use crate::corpus::{CorpusError, CorpusReader};
use crate::model::FrequencyModel;
use crate::store::{ModelStore, StoreError};
use crate::tokenize::Tokenizer;
use crate::types::{Label, Verdict};

/// Score differences smaller than this are reported as neutral.
pub const NEUTRAL_BAND: f64 = 0.1;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("failed to walk the training corpus: {0}")]
    Corpus(#[from] CorpusError),

    #[error("model store failure: {0}")]
    Store(#[from] StoreError),

    #[error("the {0} model has no recorded tokens, nothing to score against")]
    EmptyModel(Label),
}

/// Artifact names the two class models persist under.
#[derive(Debug, Clone)]
pub struct ModelNames {
    pub positive: String,
    pub negative: String,
}

/// Naive Bayes sentiment classifier over two bag-of-words frequency models.
///
/// The models are populated once, by `train` or by loading persisted
/// artifacts, and are read-only afterwards. `classify` never mutates them,
/// so a ready classifier can be shared freely across readers.
pub struct SentimentClassifier {
    pos: FrequencyModel,
    neg: FrequencyModel,
}

impl SentimentClassifier {
    /// Build a classifier directly from already-populated models.
    pub fn from_models(pos: FrequencyModel, neg: FrequencyModel) -> Self {
        Self { pos, neg }
    }

    /// Load the persisted models, or train from the corpus when either
    /// artifact is missing.
    ///
    /// A corrupted artifact is an error, not a retraining trigger; delete
    /// the artifact or run a training pass to recover.
    pub fn initialize(
        store: &ModelStore,
        names: &ModelNames,
        corpus: &CorpusReader,
    ) -> Result<Self, ClassifierError> {
        if store.exists(&names.positive) && store.exists(&names.negative) {
            info!(
                "loading persisted models {:?} / {:?}",
                names.positive, names.negative
            );
            let pos = store.load(&names.positive)?;
            let neg = store.load(&names.negative)?;
            return Ok(Self::from_models(pos, neg));
        }

        info!("persisted models absent or incomplete, training from corpus");
        Self::train(store, names, corpus)
    }

    /// Run one full pass over the labeled corpus, accumulate both frequency
    /// models, then persist them under their configured names.
    pub fn train(
        store: &ModelStore,
        names: &ModelNames,
        corpus: &CorpusReader,
    ) -> Result<Self, ClassifierError> {
        let documents = corpus.documents()?;

        let mut pos = FrequencyModel::new();
        let mut neg = FrequencyModel::new();

        let pb = ProgressBar::new(documents.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Training sentiment models...");

        for document in &documents {
            let model = match document.label {
                Label::Negative => &mut neg,
                Label::Positive => &mut pos,
            };
            for token in Tokenizer::tokenize(&document.text) {
                model.increment(token);
            }
            pb.inc(1);
        }
        pb.finish_with_message("Training complete");

        // Persisting both models is part of training, not an option.
        store.save(&pos, &names.positive)?;
        store.save(&neg, &names.negative)?;

        info!(
            "trained on {} reviews: {} positive / {} negative token occurrences",
            documents.len(),
            pos.total(),
            neg.total()
        );

        Ok(Self::from_models(pos, neg))
    }

    /// Classify `text` by comparing its log-likelihood under each class.
    pub fn classify(&self, text: &str) -> Result<Verdict, ClassifierError> {
        let pos_denom = self.pos.total() as f64;
        let neg_denom = self.neg.total() as f64;
        if pos_denom == 0.0 {
            return Err(ClassifierError::EmptyModel(Label::Positive));
        }
        if neg_denom == 0.0 {
            return Err(ClassifierError::EmptyModel(Label::Negative));
        }
        let denom = pos_denom + neg_denom;

        let mut pos_score = (pos_denom / denom).ln();
        let mut neg_score = (neg_denom / denom).ln();

        for token in Tokenizer::tokenize(text) {
            // Add-one smoothing applies to the numerator only; the
            // denominator stays the raw class total.
            let pos_count = self.pos.count(token);
            pos_score += if pos_count > 0 {
                (pos_count as f64 / pos_denom).ln()
            } else {
                (1.0 / pos_denom).ln()
            };

            let neg_count = self.neg.count(token);
            neg_score += if neg_count > 0 {
                (neg_count as f64 / neg_denom).ln()
            } else {
                (1.0 / neg_denom).ln()
            };
        }

        if (pos_score - neg_score).abs() < NEUTRAL_BAND {
            Ok(Verdict::Neutral)
        } else if pos_score > neg_score {
            Ok(Verdict::Positive)
        } else {
            Ok(Verdict::Negative)
        }
    }
}
