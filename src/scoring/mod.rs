//! Text sentiment scoring backed by exported TF-IDF and logistic regression artifacts

pub mod artifacts;
pub mod classifier;

pub use artifacts::{LogisticRegression, TfIdfVectorizer};
pub use classifier::{Classifier, Score, Sentiment, score_text, try_score_text};
