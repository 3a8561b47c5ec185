use std::fmt;
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use super::artifacts::{
    CLASSIFIER_FILE, LogisticRegression, TfIdfVectorizer, VECTORIZER_FILE, load_json,
};
use crate::error::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Unknown,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    /// Probability of positive sentiment, in [0, 1]
    pub score: f64,
    pub sentiment: Sentiment,
}

impl Score {
    /// Result reported when the model cannot be used
    pub const UNKNOWN: Score = Score {
        score: 0.0,
        sentiment: Sentiment::Unknown,
    };

    pub fn from_probability(score: f64) -> Self {
        let sentiment = if score > 0.5 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        Self { score, sentiment }
    }
}

/// Vectorizer and classifier pair loaded from an artifacts directory
#[derive(Debug, Clone)]
pub struct Classifier {
    vectorizer: TfIdfVectorizer,
    model: LogisticRegression,
}

impl Classifier {
    pub fn new(
        vectorizer: TfIdfVectorizer,
        model: LogisticRegression,
    ) -> Result<Self, ScoringError> {
        if vectorizer.feature_count() != model.coef.len() {
            return Err(ScoringError::DimensionMismatch {
                vocabulary: vectorizer.feature_count(),
                coefficients: model.coef.len(),
            });
        }
        Ok(Self { vectorizer, model })
    }

    pub fn load(dir: &Path) -> Result<Self, ScoringError> {
        let model: LogisticRegression = load_json(&dir.join(CLASSIFIER_FILE))?;
        let vectorizer: TfIdfVectorizer = load_json(&dir.join(VECTORIZER_FILE))?;
        Self::new(vectorizer, model)
    }

    pub fn score(&self, text: &str) -> Score {
        let features = self.vectorizer.transform(text);
        Score::from_probability(self.model.predict_proba(&features))
    }
}

/// Score text with the artifacts in `dir`, surfacing any failure
pub fn try_score_text(dir: &Path, text: &str) -> Result<Score, ScoringError> {
    let classifier = Classifier::load(dir)?;
    Ok(classifier.score(text))
}

/// Score text, degrading to `(0.0, unknown)` if the model is unusable
pub fn score_text(dir: &Path, text: &str) -> Score {
    info!("On text: {}", text);
    let score = match try_score_text(dir, text) {
        Ok(score) => score,
        Err(e) => {
            warn!("Scoring failed: {}", e);
            Score::UNKNOWN
        }
    };
    info!("Score: {:.3}, Sentiment: {}", score.score, score.sentiment);
    score
}
