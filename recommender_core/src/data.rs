use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Catalog, RecError, RecommenderConfig, Result};

/// A single observed score of a student for a subject.
///
/// Several ratings may exist for the same `(student, subject)` pair; each one
/// is an independent observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub student: String,
    pub subject: String,
    pub score: u8,
}

impl Rating {
    pub fn new(student: impl Into<String>, subject: impl Into<String>, score: u8) -> Self {
        Self {
            student: student.into(),
            subject: subject.into(),
            score,
        }
    }
}

/// Builds a seeded rng, falling back to OS entropy when there's no seed.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// The catalog plus every rating row, immutable once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    catalog: Catalog,
    ratings: Vec<Rating>,
}

impl Dataset {
    /// Creates a new `Dataset` from explicit ratings.
    ///
    /// # Errors
    /// Returns `RecError::UnknownStudent` or `RecError::UnknownSubject` if a rating
    /// references an entity missing from the catalog.
    pub fn new(catalog: Catalog, ratings: Vec<Rating>) -> Result<Self> {
        for rating in &ratings {
            if catalog.student_index(&rating.student).is_none() {
                return Err(RecError::UnknownStudent(rating.student.clone()));
            }
            if catalog.subject_index(&rating.subject).is_none() {
                return Err(RecError::UnknownSubject(rating.subject.clone()));
            }
        }

        Ok(Self { catalog, ratings })
    }

    /// Simulates `config.num_ratings` ratings, drawing students, subjects and scores
    /// uniformly and with replacement.
    ///
    /// # Errors
    /// Returns `RecError::InvalidConfig` if `config` fails validation.
    pub fn synthetic<R: Rng>(
        catalog: Catalog,
        config: &RecommenderConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;

        let students = catalog.students();
        let subjects = catalog.subjects();

        let ratings = (0..config.num_ratings)
            .map(|_| {
                let student = &students[rng.random_range(0..students.len())];
                let subject = &subjects[rng.random_range(0..subjects.len())];
                let score = rng.random_range(config.min_rating..=config.max_rating);
                Rating::new(student.as_str(), subject.id.as_str(), score)
            })
            .collect();

        log::info!(
            "generated {} synthetic ratings for {} students and {} subjects",
            config.num_ratings,
            students.len(),
            subjects.len()
        );

        Ok(Self { catalog, ratings })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Returns whether `student` has at least one rating for `subject`.
    pub fn has_rated(&self, student: &str, subject: &str) -> bool {
        self.ratings
            .iter()
            .any(|r| r.student == student && r.subject == subject)
    }
}
