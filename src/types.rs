use std::fmt::Display;

/// Class assigned to a training review by the corpus naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of one classification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Positive,
    Negative,
    Neutral,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        };
        write!(f, "{}", name)
    }
}

/// One review text paired with its class.
#[derive(Debug, Clone)]
pub struct LabeledDocument {
    pub text: String,
    pub label: Label,
}
