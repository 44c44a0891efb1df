use std::rc::Rc;

use recommender_core::Recommender;

use super::model::{Focus, LogLine, RecommendView, Recommendations};

const MAX_LOGS: usize = 200;

/// Drives the recommendation form: selections, focus, results and the event log.
pub struct SessionState {
    recommender: Rc<Recommender>,
    view: RecommendView,
}

impl SessionState {
    /// Creates a new `SessionState` with the first student and subject selected.
    ///
    /// # Args
    /// * `recommender` - The fitted recommender shared by every screen.
    /// * `top_n` - Total amount of recommendations requested per trigger.
    pub fn new(recommender: Rc<Recommender>, top_n: usize) -> Self {
        let catalog = recommender.catalog();
        let report = recommender.report();

        let fit_message = format!(
            "recommender fitted on {} ratings, {} epochs, rmse={:.4}",
            report.observations(),
            report.epochs(),
            report.final_rmse().unwrap_or_default()
        );

        let view = RecommendView {
            students: catalog.students().to_vec(),
            subjects: catalog.subject_ids().map(str::to_string).collect(),
            student: 0,
            subject: 0,
            focus: Focus::Student,
            top_n,
            ratings: recommender.dataset().ratings().len(),
            results: None,
            logs: vec![LogLine {
                level: "INFO",
                message: fit_message,
            }],
        };

        Self { recommender, view }
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> &RecommendView {
        &self.view
    }

    pub fn recommender(&self) -> &Rc<Recommender> {
        &self.recommender
    }

    pub fn focus_next(&mut self) {
        self.view.focus = self.view.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.view.focus = self.view.focus.prev();
    }

    /// Moves the focused selector `delta` positions, wrapping around.
    pub fn cycle(&mut self, delta: isize) {
        let (selected, len) = match self.view.focus {
            Focus::Student => (&mut self.view.student, self.view.students.len()),
            Focus::Subject => (&mut self.view.subject, self.view.subjects.len()),
            Focus::Button => return,
        };

        let len = len as isize;
        *selected = (*selected as isize + delta).rem_euclid(len) as usize;
    }

    /// Handles `Enter`: triggers the recommendation on the button, otherwise moves focus.
    pub fn activate(&mut self) {
        match self.view.focus {
            Focus::Button => self.submit(),
            _ => self.focus_next(),
        }
    }

    /// Runs the hybrid blend for the selected student and subject.
    pub fn submit(&mut self) {
        let student = self.view.selected_student().to_string();
        let subject = self.view.selected_subject().to_string();

        let outcome = self
            .recommender
            .hybrid_recommend(&student, &subject, self.view.top_n)
            .map(|recs| recs.into_iter().map(str::to_string).collect::<Vec<_>>());

        match outcome {
            Ok(subjects) => {
                self.push_log(
                    "INFO",
                    format!("{student} / {subject}: {} recommendation(s)", subjects.len()),
                );
                self.view.results = Some(Recommendations { student, subjects });
            }
            Err(e) => {
                log::error!("recommendation failed: {e}");
                self.push_log("ERROR", e.to_string());
                self.view.results = None;
            }
        }
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.view.logs.push(LogLine { level, message });
        if self.view.logs.len() > MAX_LOGS {
            let drain = self.view.logs.len() - MAX_LOGS;
            self.view.logs.drain(0..drain);
        }
    }
}

#[cfg(test)]
mod tests {
    use recommender_core::{Catalog, RecommenderConfig};

    use super::*;

    fn session(top_n: usize) -> SessionState {
        let config = RecommenderConfig {
            seed: Some(17),
            ..RecommenderConfig::default()
        };
        let rec = Recommender::from_config(Catalog::pcmb(), &config).unwrap();
        SessionState::new(Rc::new(rec), top_n)
    }

    #[test]
    fn starts_with_fit_summary() {
        let s = session(3);
        assert_eq!(s.view().logs.len(), 1);
        assert!(s.view().logs[0].message.contains("20 ratings"));
        assert!(s.view().results.is_none());
    }

    #[test]
    fn selectors_wrap_around() {
        let mut s = session(3);
        s.cycle(-1);
        assert_eq!(s.view().selected_student(), "S5");
        s.cycle(1);
        assert_eq!(s.view().selected_student(), "S1");

        s.focus_next();
        s.cycle(6);
        assert_eq!(s.view().selected_subject(), "Mathematics");
    }

    #[test]
    fn cycling_on_button_is_a_noop() {
        let mut s = session(3);
        s.focus_prev();
        assert_eq!(s.view().focus, Focus::Button);
        s.cycle(1);
        assert_eq!(s.view().student, 0);
        assert_eq!(s.view().subject, 0);
    }

    #[test]
    fn enter_moves_focus_until_button_then_submits() {
        let mut s = session(3);
        s.activate();
        s.activate();
        assert_eq!(s.view().focus, Focus::Button);
        assert!(s.view().results.is_none());

        s.activate();
        let results = s.view().results.as_ref().unwrap();
        assert_eq!(results.student, "S1");
        assert!(results.subjects.len() <= 2);
        assert_eq!(s.view().logs.len(), 2);
    }

    #[test]
    fn submit_with_zero_budget_is_empty() {
        let mut s = session(0);
        s.submit();
        assert_eq!(s.view().results.as_ref().unwrap().subjects.len(), 0);
    }
}
