use crate::{RecError, Result};

const PCMB_STUDENTS: &[&str] = &["S1", "S2", "S3", "S4", "S5"];

const PCMB_SUBJECTS: &[(&str, &str)] = &[
    (
        "Physics",
        "Newton's Laws, Kinematics, Work & Energy, Gravitation",
    ),
    (
        "Chemistry",
        "Periodic Table, Chemical Bonding, Organic Chemistry, Thermodynamics",
    ),
    ("Mathematics", "Trigonometry, Algebra, Calculus, Probability"),
    ("Biology", "Genetics, Human Physiology, Ecology, Evolution"),
];

/// A subject together with its free-text topic description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    pub topics: String,
}

impl Subject {
    pub fn new(id: impl Into<String>, topics: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            topics: topics.into(),
        }
    }
}

/// The fixed set of students and subjects the recommender works with.
///
/// Positions are stable: every matrix in the crate is indexed by the order in
/// which students and subjects appear here.
#[derive(Debug, Clone)]
pub struct Catalog {
    students: Vec<String>,
    subjects: Vec<Subject>,
}

impl Catalog {
    /// Creates a new `Catalog`.
    ///
    /// # Errors
    /// Returns `RecError::EmptyCatalog` if either list is empty.
    pub fn new(students: Vec<String>, subjects: Vec<Subject>) -> Result<Self> {
        if students.is_empty() || subjects.is_empty() {
            return Err(RecError::EmptyCatalog);
        }

        Ok(Self { students, subjects })
    }

    /// The physics, chemistry, mathematics and biology catalog with five students.
    pub fn pcmb() -> Self {
        Self {
            students: PCMB_STUDENTS.iter().map(|s| s.to_string()).collect(),
            subjects: PCMB_SUBJECTS
                .iter()
                .map(|(id, topics)| Subject::new(*id, *topics))
                .collect(),
        }
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Iterates over the subject identifiers in catalog order.
    pub fn subject_ids(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.id.as_str())
    }

    pub fn student_index(&self, student: &str) -> Option<usize> {
        self.students.iter().position(|s| s == student)
    }

    pub fn subject_index(&self, subject: &str) -> Option<usize> {
        self.subjects.iter().position(|s| s.id == subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcmb_layout() {
        let catalog = Catalog::pcmb();
        assert_eq!(catalog.students().len(), 5);
        assert_eq!(
            catalog.subject_ids().collect::<Vec<_>>(),
            ["Physics", "Chemistry", "Mathematics", "Biology"]
        );
        assert_eq!(catalog.subject_index("Mathematics"), Some(2));
        assert_eq!(catalog.student_index("S6"), None);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let res = Catalog::new(vec![], vec![Subject::new("Physics", "Kinematics")]);
        assert!(matches!(res, Err(RecError::EmptyCatalog)));
    }
}
