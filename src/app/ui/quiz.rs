use eframe::egui::{self, Align2, Context, vec2};

use crate::curriculum::{QuizQuestion, SkillNode};

use super::super::ViewModel;
use super::super::unlock::AttemptOutcome;

/// One open quiz. Opening always starts from blank answers; nothing is
/// carried across opens.
pub(in crate::app) struct QuizSession {
    pub(in crate::app) node_id: String,
    pub(in crate::app) title: String,
    questions: Vec<QuizQuestion>,
    answers: Vec<String>,
}

impl QuizSession {
    fn new(node: &SkillNode) -> Self {
        Self {
            node_id: node.id.clone(),
            title: node.title.clone(),
            questions: node.quiz.clone(),
            answers: vec![String::new(); node.quiz.len()],
        }
    }

    #[cfg(test)]
    pub(in crate::app) fn answers(&self) -> &[String] {
        &self.answers
    }
}

/// Grade free-text answers against the authored ones: trimmed,
/// ASCII-case-insensitive comparison, rounded to a 0-100 percentage.
pub(in crate::app) fn grade(questions: &[QuizQuestion], answers: &[String]) -> u32 {
    if questions.is_empty() {
        return 0;
    }

    let correct = questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| answer.trim().eq_ignore_ascii_case(question.answer.trim()))
        .count();

    ((correct as f32 / questions.len() as f32) * 100.0).round() as u32
}

impl ViewModel {
    pub(in crate::app) fn open_quiz(&mut self, node_id: &str) {
        let Some(node) = self.graph.node(node_id) else {
            return;
        };
        if !node.has_quiz() || !self.unlocks.is_reachable(node_id) {
            return;
        }
        self.quiz = Some(QuizSession::new(node));
    }

    pub(in crate::app) fn close_quiz(&mut self) {
        self.quiz = None;
    }

    /// Feed one completed attempt into the unlock board; a below-threshold
    /// score opens the theory review.
    pub(in crate::app) fn complete_attempt(&mut self, node_id: &str, score: u32) {
        match self.unlocks.record_attempt(&self.graph, node_id, score) {
            AttemptOutcome::Passed { newly_unlocked } => {
                if !newly_unlocked.is_empty() {
                    log::info!("passing {node_id:?} at {score}% unlocked {newly_unlocked:?}");
                }
            }
            AttemptOutcome::RemediationRequired => self.open_theory(node_id),
            AttemptOutcome::Rejected => {}
        }
    }

    pub(in crate::app) fn draw_quiz_overlay(&mut self, ctx: &Context) {
        let pass_threshold = self.unlocks.pass_threshold();
        let Some(session) = self.quiz.as_mut() else {
            return;
        };

        let mut submitted = false;
        let mut dismissed = false;

        egui::Window::new(format!("Quiz: {}", session.title))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                for (question, answer) in session.questions.iter().zip(session.answers.iter_mut()) {
                    ui.label(question.prompt.as_str());
                    ui.text_edit_singleline(answer);
                    ui.add_space(6.0);
                }

                ui.small(format!(
                    "Score {pass_threshold}% or more to unlock the next skills."
                ));

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    submitted = ui.button("Submit").clicked();
                    dismissed = ui.button("Cancel").clicked();
                });
            });

        if submitted {
            if let Some(session) = self.quiz.take() {
                let score = grade(&session.questions, &session.answers);
                self.complete_attempt(&session.node_id, score);
            }
        } else if dismissed {
            self.close_quiz();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::load_curriculum;

    fn question(answer: &str) -> QuizQuestion {
        QuizQuestion {
            prompt: "?".to_owned(),
            answer: answer.to_owned(),
        }
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn grade_rounds_to_a_percentage() {
        let questions = vec![
            question("1/2"),
            question("3/4"),
            question("2/3"),
            question("5/6"),
            question("7/8"),
        ];

        let four_of_five = answers(&["1/2", "3/4", "2/3", "5/6", "wrong"]);
        assert_eq!(grade(&questions, &four_of_five), 80);

        let two_of_five = answers(&["1/2", "3/4", "no", "no", "no"]);
        assert_eq!(grade(&questions, &two_of_five), 40);

        let one_of_three = answers(&["x", "3/4", "x"]);
        assert_eq!(grade(&questions[..3], &one_of_three), 33);
    }

    #[test]
    fn grade_ignores_surrounding_whitespace_and_ascii_case() {
        let questions = vec![question("y"), question(" 3/4 ")];
        assert_eq!(grade(&questions, &answers(&["  Y ", "3/4"])), 100);
    }

    #[test]
    fn grade_of_no_questions_is_zero() {
        assert_eq!(grade(&[], &[]), 0);
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let questions = vec![question("a"), question("b")];
        assert_eq!(grade(&questions, &answers(&["a"])), 50);
    }

    #[test]
    fn opening_a_quiz_always_starts_blank() {
        let graph = load_curriculum(None).expect("default curriculum loads");
        let mut model = ViewModel::new(graph);

        model.open_quiz("fractions");
        let session = model.quiz.as_mut().expect("quiz opened for entry node");
        session.answers[0] = "1/2".to_owned();

        model.close_quiz();
        model.open_quiz("fractions");
        let reopened = model.quiz.as_ref().expect("quiz reopened");
        assert!(
            reopened.answers().iter().all(String::is_empty),
            "answers leaked across quiz opens"
        );
    }

    #[test]
    fn quizzes_on_locked_nodes_do_not_open() {
        let graph = load_curriculum(None).expect("default curriculum loads");
        let mut model = ViewModel::new(graph);

        model.open_quiz("word-problems");
        assert!(model.quiz.is_none(), "locked node must not open a quiz");
    }

    #[test]
    fn failing_attempt_opens_the_theory_review_once() {
        let graph = load_curriculum(None).expect("default curriculum loads");
        let mut model = ViewModel::new(graph);

        model.complete_attempt("fractions", 50);
        assert!(model.theory.is_some(), "failing score opens remediation");

        // Dismissing twice leaves the same state as dismissing once.
        model.close_theory();
        let after_first = model.theory.is_none();
        model.close_theory();
        assert!(after_first && model.theory.is_none());
    }

    #[test]
    fn passing_attempt_does_not_open_remediation() {
        let graph = load_curriculum(None).expect("default curriculum loads");
        let mut model = ViewModel::new(graph);

        model.complete_attempt("fractions", 85);
        assert!(model.theory.is_none());
        assert!(model.unlocks.is_reachable("word-problems"));
        assert!(model.unlocks.is_reachable("decimals"));
    }
}
