use std::cmp::Ordering;

use ndarray::{Array2, ArrayView1};

use crate::{Catalog, RecError, Result, text::TfidfVectorizer};

/// Cosine similarity between two vectors, `0` if either of them is all zeros.
pub fn cosine(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0. || norm_b == 0. {
        return 0.;
    }

    a.dot(&b) / (norm_a * norm_b)
}

/// Pairwise cosine similarity between the rows of `features`.
///
/// The result is exactly symmetric and its diagonal is `1`.
pub fn similarity_matrix(features: &Array2<f32>) -> Array2<f32> {
    let n = features.nrows();
    let mut sim = Array2::zeros((n, n));

    for i in 0..n {
        sim[[i, i]] = 1.;
        for j in i + 1..n {
            let s = cosine(features.row(i), features.row(j));
            sim[[i, j]] = s;
            sim[[j, i]] = s;
        }
    }

    sim
}

/// Content based engine: recommends subjects whose topics resemble a given subject.
#[derive(Debug, Clone)]
pub struct ContentEngine {
    subjects: Vec<String>,
    similarity: Array2<f32>,
}

impl ContentEngine {
    /// Vectorizes the topics of every catalogued subject and precomputes their similarities.
    pub fn fit(catalog: &Catalog) -> Self {
        let topics: Vec<&str> = catalog.subjects().iter().map(|s| s.topics.as_str()).collect();

        let mut vectorizer = TfidfVectorizer::new();
        let features = vectorizer.fit_transform(&topics);
        let similarity = similarity_matrix(&features);

        log::info!(
            "content engine fitted: {} subjects, {} terms",
            topics.len(),
            vectorizer.vocabulary().len()
        );

        Self {
            subjects: catalog.subject_ids().map(str::to_string).collect(),
            similarity,
        }
    }

    pub fn similarity(&self) -> &Array2<f32> {
        &self.similarity
    }

    /// Returns up to `n` other subjects sorted by descending similarity to `subject`,
    /// ties keep catalog order.
    ///
    /// # Errors
    /// Returns `RecError::UnknownSubject` if `subject` isn't catalogued.
    pub fn recommend(&self, subject: &str, n: usize) -> Result<Vec<&str>> {
        let idx = self
            .subjects
            .iter()
            .position(|s| s == subject)
            .ok_or_else(|| RecError::UnknownSubject(subject.to_string()))?;

        let mut scores: Vec<(usize, f32)> = self
            .similarity
            .row(idx)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != idx)
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(scores
            .into_iter()
            .take(n)
            .map(|(j, _)| self.subjects[j].as_str())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::Subject;

    #[test]
    fn cosine_of_orthogonal_and_parallel() {
        let a = array![1., 0.];
        let b = array![0., 3.];
        let c = array![2., 0.];

        assert_eq!(cosine(a.view(), b.view()), 0.);
        assert!((cosine(a.view(), c.view()) - 1.).abs() < 1e-6);
        assert_eq!(cosine(a.view(), array![0., 0.].view()), 0.);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let features = array![[1., 2., 0.], [0., 1., 1.], [3., 0., 1.], [0., 0., 0.]];
        let sim = similarity_matrix(&features);

        for i in 0..4 {
            assert_eq!(sim[[i, i]], 1.);
            for j in 0..4 {
                assert_eq!(sim[[i, j]], sim[[j, i]]);
                assert!(sim[[i, j]] >= 0.);
            }
        }
    }

    #[test]
    fn overlapping_topics_rank_first() {
        let catalog = Catalog::new(
            vec!["S1".into()],
            vec![
                Subject::new("Mechanics", "forces motion energy"),
                Subject::new("Botany", "plants leaves"),
                Subject::new("Thermo", "heat energy"),
            ],
        )
        .unwrap();

        let engine = ContentEngine::fit(&catalog);
        assert_eq!(engine.recommend("Mechanics", 2).unwrap(), ["Thermo", "Botany"]);
        assert_eq!(engine.recommend("Mechanics", 1).unwrap(), ["Thermo"]);
    }

    #[test]
    fn pcmb_physics_returns_other_subjects_in_catalog_order() {
        let engine = ContentEngine::fit(&Catalog::pcmb());
        assert_eq!(
            engine.recommend("Physics", 3).unwrap(),
            ["Chemistry", "Mathematics", "Biology"]
        );
    }

    #[test]
    fn never_includes_itself() {
        let catalog = Catalog::pcmb();
        let engine = ContentEngine::fit(&catalog);

        for subject in catalog.subject_ids() {
            for n in 0..6 {
                let recs = engine.recommend(subject, n).unwrap();
                assert!(recs.len() <= n);
                assert!(!recs.contains(&subject));
            }
        }
    }

    #[test]
    fn unknown_subject_fails() {
        let engine = ContentEngine::fit(&Catalog::pcmb());
        let res = engine.recommend("History", 3);
        assert!(matches!(res, Err(RecError::UnknownSubject(s)) if s == "History"));
    }
}
