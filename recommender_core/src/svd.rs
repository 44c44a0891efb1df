use ndarray::{Array1, Array2, aview1, s};
use ndarray_rand::{RandomExt, rand_distr::Normal};
use rand::Rng;

use crate::{
    Dataset, FitReport, RecError, Result, SvdConfig,
    optimization::{GradientDescent, Optimizer},
};

/// A point estimate for a `(student, subject)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub estimate: f32,
    /// Whether the student had ratings when the model was fitted.
    pub known_student: bool,
    /// Whether the subject had ratings when the model was fitted.
    pub known_subject: bool,
}

/// Biased matrix factorization fitted with stochastic gradient descent.
///
/// A rating is approximated by `mu + bu + bi + qi·pu`, where `mu` is the global
/// mean, `bu`/`bi` the student and subject biases and `pu`/`qi` their latent factors.
#[derive(Debug, Clone)]
pub struct SvdModel {
    students: Vec<String>,
    subjects: Vec<String>,
    known_students: Vec<bool>,
    known_subjects: Vec<bool>,
    global_mean: f32,
    bu: Array1<f32>,
    bi: Array1<f32>,
    pu: Array2<f32>,
    qi: Array2<f32>,
    rating_scale: (f32, f32),
}

impl SvdModel {
    /// Fits the model on every rating row of `dataset`.
    ///
    /// Rows are visited in dataset order on each epoch; duplicated pairs count as
    /// separate observations.
    ///
    /// # Errors
    /// Returns `RecError::InvalidConfig` if the factor initialization distribution is invalid.
    pub fn fit<R: Rng>(
        dataset: &Dataset,
        config: &SvdConfig,
        rng: &mut R,
    ) -> Result<(Self, FitReport)> {
        let catalog = dataset.catalog();
        let n_students = catalog.students().len();
        let n_subjects = catalog.subjects().len();

        let init = Normal::new(config.init_mean, config.init_std_dev)
            .map_err(|e| RecError::InvalidConfig(format!("factor initialization: {e}")))?;

        // ratings were validated against the catalog when the dataset was built
        let observations: Vec<(usize, usize, f32)> = dataset
            .ratings()
            .iter()
            .filter_map(|r| {
                let u = catalog.student_index(&r.student)?;
                let i = catalog.subject_index(&r.subject)?;
                Some((u, i, r.score as f32))
            })
            .collect();

        let mut known_students = vec![false; n_students];
        let mut known_subjects = vec![false; n_subjects];
        for &(u, i, _) in &observations {
            known_students[u] = true;
            known_subjects[i] = true;
        }

        let (low, high) = config.rating_scale;
        let global_mean = if observations.is_empty() {
            (low + high) / 2.
        } else {
            observations.iter().map(|&(_, _, r)| r).sum::<f32>() / observations.len() as f32
        };

        let mut model = Self {
            students: catalog.students().to_vec(),
            subjects: catalog.subject_ids().map(str::to_string).collect(),
            known_students,
            known_subjects,
            global_mean,
            bu: Array1::zeros(n_students),
            bi: Array1::zeros(n_subjects),
            pu: Array2::random_using((n_students, config.n_factors), init, rng),
            qi: Array2::random_using((n_subjects, config.n_factors), init, rng),
            rating_scale: config.rating_scale,
        };

        let mut optimizer = GradientDescent::new(config.lr_all);
        let epoch_rmse = (0..config.n_epochs)
            .map(|epoch| {
                let rmse = model.sgd_epoch(&observations, config.reg_all, &mut optimizer);
                log::debug!("epoch {}/{}: training rmse={rmse:.4}", epoch + 1, config.n_epochs);
                rmse
            })
            .collect();

        let report = FitReport::new(observations.len(), epoch_rmse);
        log::info!(
            "rating predictor fitted: {} observations, {} epochs, mean={:.3}, rmse={:.4}",
            report.observations(),
            report.epochs(),
            model.global_mean,
            report.final_rmse().unwrap_or_default()
        );

        Ok((model, report))
    }

    /// Runs one pass over `observations` and returns the RMSE of the pre-update errors.
    fn sgd_epoch<O: Optimizer>(
        &mut self,
        observations: &[(usize, usize, f32)],
        reg: f32,
        optimizer: &mut O,
    ) -> f32 {
        let mut squared = 0.;

        for &(u, i, r) in observations {
            let dot = self.qi.row(i).dot(&self.pu.row(u));
            let err = r - (self.global_mean + self.bu[u] + self.bi[i] + dot);
            squared += err * err;

            let grad_bu = reg * self.bu[u] - err;
            let grad_bi = reg * self.bi[i] - err;
            let grad_pu = &self.pu.row(u) * reg - &self.qi.row(i) * err;
            let grad_qi = &self.qi.row(i) * reg - &self.pu.row(u) * err;

            optimizer.update_params(self.bu.slice_mut(s![u..=u]), aview1(&[grad_bu]));
            optimizer.update_params(self.bi.slice_mut(s![i..=i]), aview1(&[grad_bi]));
            optimizer.update_params(self.pu.row_mut(u), grad_pu.view());
            optimizer.update_params(self.qi.row_mut(i), grad_qi.view());
        }

        if observations.is_empty() {
            0.
        } else {
            (squared / observations.len() as f32).sqrt()
        }
    }

    /// Estimates the rating of `student` for `subject`.
    ///
    /// Students or subjects without ratings contribute neither bias nor factors, so a
    /// student the model never saw gets the global baseline `mu + bi`. The estimate is
    /// clipped into the rating scale.
    pub fn predict(&self, student: &str, subject: &str) -> Prediction {
        let u = self
            .students
            .iter()
            .position(|s| s == student)
            .filter(|&u| self.known_students[u]);
        let i = self
            .subjects
            .iter()
            .position(|s| s == subject)
            .filter(|&i| self.known_subjects[i]);

        let mut estimate = self.global_mean;
        if let Some(u) = u {
            estimate += self.bu[u];
        }
        if let Some(i) = i {
            estimate += self.bi[i];
        }
        if let (Some(u), Some(i)) = (u, i) {
            estimate += self.qi.row(i).dot(&self.pu.row(u));
        }

        let (low, high) = self.rating_scale;
        Prediction {
            estimate: estimate.clamp(low, high),
            known_student: u.is_some(),
            known_subject: i.is_some(),
        }
    }

    pub fn global_mean(&self) -> f32 {
        self.global_mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Rating, data::make_rng};

    fn dataset(ratings: &[(&str, &str, u8)]) -> Dataset {
        let ratings = ratings
            .iter()
            .map(|&(st, su, r)| Rating::new(st, su, r))
            .collect();
        Dataset::new(Catalog::pcmb(), ratings).unwrap()
    }

    #[test]
    fn unknown_student_gets_baseline() {
        let data = dataset(&[("S1", "Physics", 5), ("S2", "Physics", 3), ("S2", "Biology", 4)]);
        let (model, _) = SvdModel::fit(&data, &SvdConfig::default(), &mut make_rng(Some(1))).unwrap();

        let p = model.predict("S5", "Mathematics");
        assert!(!p.known_student);
        assert!(!p.known_subject);
        assert!((p.estimate - 4.).abs() < 1e-6);

        let p = model.predict("S5", "Physics");
        assert!(!p.known_student);
        assert!(p.known_subject);
    }

    #[test]
    fn estimates_are_clipped() {
        let data = dataset(&[("S1", "Physics", 5), ("S1", "Physics", 5), ("S1", "Physics", 5)]);
        let config = SvdConfig {
            rating_scale: (1., 4.5),
            ..SvdConfig::default()
        };
        let (model, _) = SvdModel::fit(&data, &config, &mut make_rng(Some(3))).unwrap();

        assert_eq!(model.predict("S1", "Physics").estimate, 4.5);
    }

    #[test]
    fn training_error_decreases() {
        let data = dataset(&[
            ("S1", "Physics", 5),
            ("S1", "Chemistry", 3),
            ("S2", "Physics", 4),
            ("S2", "Biology", 3),
            ("S3", "Mathematics", 5),
            ("S3", "Chemistry", 4),
        ]);
        let config = SvdConfig {
            n_factors: 8,
            n_epochs: 200,
            lr_all: 0.01,
            ..SvdConfig::default()
        };
        let (_, report) = SvdModel::fit(&data, &config, &mut make_rng(Some(5))).unwrap();

        assert_eq!(report.epochs(), 200);
        assert_eq!(report.observations(), 6);
        let rmse = report.epoch_rmse();
        assert!(rmse[rmse.len() - 1] < rmse[0]);
    }

    #[test]
    fn no_ratings_falls_back_to_scale_midpoint() {
        let data = dataset(&[]);
        let (model, report) =
            SvdModel::fit(&data, &SvdConfig::default(), &mut make_rng(Some(0))).unwrap();

        assert_eq!(model.global_mean(), 3.);
        assert_eq!(report.final_rmse(), Some(0.));
        assert_eq!(model.predict("S1", "Physics").estimate, 3.);
    }

    #[test]
    fn invalid_init_distribution_is_rejected() {
        let config = SvdConfig {
            init_std_dev: f32::NAN,
            ..SvdConfig::default()
        };
        let res = SvdModel::fit(&dataset(&[]), &config, &mut make_rng(Some(0)));
        assert!(matches!(res, Err(RecError::InvalidConfig(_))));
    }
}
