use std::cmp::Ordering;

use crate::{
    Catalog, ContentEngine, Dataset, FitReport, Prediction, RecommenderConfig, Result, SvdModel,
    data::make_rng,
};

/// Fitted state of the hybrid recommender.
///
/// Built once at start-up and then only queried; nothing in here changes after `fit`.
#[derive(Debug, Clone)]
pub struct Recommender {
    dataset: Dataset,
    content: ContentEngine,
    predictor: SvdModel,
    report: FitReport,
}

impl Recommender {
    /// Generates a synthetic dataset for `catalog` and fits both engines on it.
    ///
    /// # Errors
    /// Returns `RecError::InvalidConfig` if `config` fails validation.
    pub fn from_config(catalog: Catalog, config: &RecommenderConfig) -> Result<Self> {
        let mut rng = make_rng(config.seed);
        let dataset = Dataset::synthetic(catalog, config, &mut rng)?;
        Self::fit_with_rng(dataset, config, &mut rng)
    }

    /// Fits both engines on an existing dataset.
    ///
    /// # Errors
    /// Returns `RecError::InvalidConfig` if `config` fails validation.
    pub fn fit(dataset: Dataset, config: &RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Self::fit_with_rng(dataset, config, &mut make_rng(config.seed))
    }

    fn fit_with_rng<R: rand::Rng>(
        dataset: Dataset,
        config: &RecommenderConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let content = ContentEngine::fit(dataset.catalog());
        let (predictor, report) = SvdModel::fit(&dataset, &config.svd, rng)?;

        Ok(Self {
            dataset,
            content,
            predictor,
            report,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        self.dataset.catalog()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn content(&self) -> &ContentEngine {
        &self.content
    }

    pub fn report(&self) -> &FitReport {
        &self.report
    }

    pub fn predict(&self, student: &str, subject: &str) -> Prediction {
        self.predictor.predict(student, subject)
    }

    /// Returns up to `n` subjects similar to `subject`, most similar first.
    ///
    /// # Errors
    /// Returns `RecError::UnknownSubject` if `subject` isn't catalogued.
    pub fn content_based_recommend(&self, subject: &str, n: usize) -> Result<Vec<&str>> {
        self.content.recommend(subject, n)
    }

    /// Returns up to `n` subjects `student` hasn't rated yet, highest predicted score first.
    ///
    /// A student without ratings is scored from the global baseline instead of failing.
    pub fn collaborative_recommend(&self, student: &str, n: usize) -> Vec<&str> {
        let mut predictions: Vec<(&str, f32)> = self
            .catalog()
            .subject_ids()
            .filter(|subject| !self.dataset.has_rated(student, subject))
            .map(|subject| {
                let prediction = self.predictor.predict(student, subject);
                if !prediction.known_student {
                    log::debug!("no ratings for {student}, scoring {subject} from the baseline");
                }
                (subject, prediction.estimate)
            })
            .collect();

        predictions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        predictions.into_iter().take(n).map(|(s, _)| s).collect()
    }

    /// Blends `n / 2` collaborative picks for `student` with `n / 2` content picks for
    /// `subject`, dropping repeats.
    ///
    /// Only each half keeps its own ranking, the combined order carries no meaning.
    ///
    /// # Errors
    /// Returns `RecError::UnknownSubject` if `subject` isn't catalogued.
    pub fn hybrid_recommend(&self, student: &str, subject: &str, n: usize) -> Result<Vec<&str>> {
        let half = n / 2;
        let collaborative = self.collaborative_recommend(student, half);
        let content = self.content_based_recommend(subject, half)?;

        let mut blended: Vec<&str> = Vec::with_capacity(collaborative.len() + content.len());
        for rec in collaborative.into_iter().chain(content) {
            if !blended.contains(&rec) {
                blended.push(rec);
            }
        }

        log::info!("hybrid recommendation for ({student}, {subject}, n={n}): {blended:?}");
        Ok(blended)
    }
}
