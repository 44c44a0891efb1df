use std::collections::BTreeMap;

use ndarray::{Array1, Array2, Axis};

use super::{stopwords::is_stop_word, tokenize::tokenize};

/// Term-frequency / inverse-document-frequency vectorizer.
///
/// Uses raw counts, smoothed idf `ln((1 + n) / (1 + df)) + 1` and L2 row normalization.
/// English stop words are removed before counting.
#[derive(Debug, Default, Clone)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Array1<f32>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns the vocabulary and idf weights from `documents` and returns their
    /// `n_documents x vocabulary_size` weight matrix.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Array2<f32> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| {
                tokenize(d.as_ref())
                    .into_iter()
                    .filter(|t| !is_stop_word(t))
                    .collect()
            })
            .collect();

        // btree keys come out sorted, so the column order is lexicographic
        let mut terms: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                terms.entry(token.clone()).or_insert(0);
            }
        }
        for (col, idx) in terms.values_mut().enumerate() {
            *idx = col;
        }
        self.vocabulary = terms;

        let counts = self.count(&tokenized);
        let n_docs = documents.len() as f32;
        let doc_freq = counts.mapv(|c| if c > 0. { 1. } else { 0. }).sum_axis(Axis(0));
        self.idf = doc_freq.mapv(|df| ((1. + n_docs) / (1. + df)).ln() + 1.);

        self.weigh(counts)
    }

    /// Vectorizes `documents` with the already learnt vocabulary, unseen terms are ignored.
    #[cfg(test)]
    fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f32> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();
        self.weigh(self.count(&tokenized))
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    #[cfg(test)]
    fn idf(&self) -> &Array1<f32> {
        &self.idf
    }

    fn count(&self, tokenized: &[Vec<String>]) -> Array2<f32> {
        let mut counts = Array2::zeros((tokenized.len(), self.vocabulary.len()));
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                if let Some(&col) = self.vocabulary.get(token) {
                    counts[[row, col]] += 1.;
                }
            }
        }
        counts
    }

    fn weigh(&self, mut counts: Array2<f32>) -> Array2<f32> {
        counts *= &self.idf;

        for mut row in counts.rows_mut() {
            let norm = row.dot(&row).sqrt();
            if norm > 0. {
                row /= norm;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCS: &[&str] = &["the cat sat", "the cat ran", "a dog ran"];

    #[test]
    fn vocabulary_is_sorted_without_stop_words() {
        let mut vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer.fit_transform(DOCS);

        let terms: Vec<_> = vectorizer.vocabulary().keys().cloned().collect();
        assert_eq!(terms, ["cat", "dog", "ran", "sat"]);
        assert_eq!(matrix.dim(), (3, 4));
    }

    #[test]
    fn rare_terms_weigh_more() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit_transform(DOCS);

        let idf = vectorizer.idf();
        let cat = vectorizer.vocabulary()["cat"];
        let sat = vectorizer.vocabulary()["sat"];
        assert!(idf[sat] > idf[cat]);
        assert!((idf[cat] - ((4f32 / 3.).ln() + 1.)).abs() < 1e-6);
    }

    #[test]
    fn rows_have_unit_norm() {
        let mut vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer.fit_transform(DOCS);

        for row in matrix.rows() {
            assert!((row.dot(&row) - 1.).abs() < 1e-5);
        }
    }

    #[test]
    fn stop_word_only_document_is_a_zero_row() {
        let mut vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer.fit_transform(&["the and of", "kinematics"]);
        assert!(matrix.row(0).iter().all(|&w| w == 0.));
    }

    #[test]
    fn transform_ignores_unseen_terms() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit_transform(DOCS);

        let matrix = vectorizer.transform(&["bird cat"]);
        let cat = vectorizer.vocabulary()["cat"];
        assert!((matrix[[0, cat]] - 1.).abs() < 1e-6);
    }
}
