use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ScoringError;

pub const VECTORIZER_FILE: &str = "tf-idf.json";
pub const CLASSIFIER_FILE: &str = "logreg.json";

fn default_lowercase() -> bool {
    true
}

/// Fitted TF-IDF vectorizer exported from training
#[derive(Debug, Clone, Deserialize)]
pub struct TfIdfVectorizer {
    /// Term -> feature column
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature column
    pub idf: Vec<f64>,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    /// Use 1 + ln(tf) instead of raw counts
    #[serde(default)]
    pub sublinear_tf: bool,
}

impl TfIdfVectorizer {
    pub fn feature_count(&self) -> usize {
        self.idf.len()
    }

    /// L2-normalised TF-IDF vector for a single document
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut features: Vec<f64> = vec![0.0; self.feature_count()];

        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        for token in tokenize(&text) {
            if let Some(&column) = self.vocabulary.get(token)
                && column < features.len()
            {
                features[column] += 1.0;
            }
        }

        for (column, value) in features.iter_mut().enumerate() {
            if *value > 0.0 {
                let tf = if self.sublinear_tf {
                    1.0 + value.ln()
                } else {
                    *value
                };
                *value = tf * self.idf[column];
            }
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            features.iter_mut().for_each(|v| *v /= norm);
        }

        features
    }
}

/// Binary logistic regression weights
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    /// Probability of the positive class
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        let logit: f64 = self
            .coef
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        1.0 / (1.0 + (-logit).exp())
    }
}

/// Words of two or more alphanumeric/underscore characters
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
}

/// Read and deserialize a JSON artifact
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScoringError> {
    let file = File::open(path).map_err(|source| ScoringError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ScoringError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfIdfVectorizer {
        TfIdfVectorizer {
            vocabulary: HashMap::from([
                ("good".to_string(), 0),
                ("bad".to_string(), 1),
                ("movie".to_string(), 2),
            ]),
            idf: vec![2.0, 2.0, 1.0],
            lowercase: true,
            sublinear_tf: false,
        }
    }

    #[test]
    fn test_tokenize() {
        let tokens: Vec<&str> = tokenize("A good, good_movie! I'd 42x").collect();
        assert_eq!(tokens, vec!["good", "good_movie", "42x"]);
    }

    #[test]
    fn test_transform_is_normalised() {
        let features = vectorizer().transform("GOOD movie, good");
        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert!(features[0] > features[2]);
        assert_eq!(features[1], 0.0);
    }

    #[test]
    fn test_transform_unknown_words() {
        let features = vectorizer().transform("nothing known here");
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_sublinear_tf() {
        let mut v = vectorizer();
        v.sublinear_tf = true;
        let features = v.transform("good good good bad");
        // (1 + ln 3) * 2 vs 1 * 2
        assert!((features[0] / features[1] - (1.0 + 3.0f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_predict_proba() {
        let model = LogisticRegression {
            coef: vec![1.0, -1.0],
            intercept: 0.0,
        };
        assert!((model.predict_proba(&[0.0, 0.0]) - 0.5).abs() < 1e-12);
        assert!(model.predict_proba(&[3.0, 0.0]) > 0.9);
        assert!(model.predict_proba(&[0.0, 3.0]) < 0.1);
    }
}
