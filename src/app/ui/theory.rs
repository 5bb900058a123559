use std::time::Duration;

use eframe::egui::{self, Align2, Context, RichText, vec2};

use super::super::ViewModel;

const STEP_INTERVAL_SECS: f64 = 3.5;

/// Timed theory walkthrough shown when an attempt scores below the pass
/// threshold. The step counter advances on a repeating interval; dropping
/// the walkthrough is what stops the clock, so dismissal is naturally
/// idempotent.
pub(in crate::app) struct TheoryWalkthrough {
    pub(in crate::app) title: String,
    steps: Vec<String>,
    step: usize,
    last_advance: Option<f64>,
}

impl TheoryWalkthrough {
    pub(in crate::app) fn new(title: String, steps: Vec<String>) -> Self {
        let steps = if steps.is_empty() {
            vec!["Review the material for this skill, then try the quiz again.".to_owned()]
        } else {
            steps
        };
        Self {
            title,
            steps,
            step: 0,
            last_advance: None,
        }
    }

    pub(in crate::app) fn current_step(&self) -> &str {
        &self.steps[self.step]
    }

    pub(in crate::app) fn step_counter(&self) -> (usize, usize) {
        (self.step + 1, self.steps.len())
    }

    pub(in crate::app) fn at_final_step(&self) -> bool {
        self.step + 1 >= self.steps.len()
    }

    /// Advance against the wall clock. Returns the seconds until the next
    /// advance is due, or `None` once the final step is reached.
    pub(in crate::app) fn tick(&mut self, now: f64) -> Option<f64> {
        if self.at_final_step() {
            return None;
        }

        let last = *self.last_advance.get_or_insert(now);
        let elapsed = now - last;
        if elapsed < STEP_INTERVAL_SECS {
            return Some(STEP_INTERVAL_SECS - elapsed);
        }

        self.step += 1;
        self.last_advance = Some(now);
        if self.at_final_step() {
            None
        } else {
            Some(STEP_INTERVAL_SECS)
        }
    }
}

impl ViewModel {
    pub(in crate::app) fn open_theory(&mut self, node_id: &str) {
        let Some(node) = self.graph.node(node_id) else {
            return;
        };
        self.theory = Some(TheoryWalkthrough::new(node.title.clone(), node.review.clone()));
    }

    pub(in crate::app) fn close_theory(&mut self) {
        self.theory = None;
    }

    pub(in crate::app) fn draw_theory_overlay(&mut self, ctx: &Context) {
        let Some(walkthrough) = self.theory.as_mut() else {
            return;
        };

        let now = ctx.input(|input| input.time);
        if let Some(wait) = walkthrough.tick(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }

        let mut dismissed = false;
        let (step, total) = walkthrough.step_counter();

        egui::Window::new(format!("Theory: {}", walkthrough.title))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.small(format!("Step {step} of {total}"));
                ui.add_space(6.0);
                ui.label(RichText::new(walkthrough.current_step()).size(15.0));
                ui.add_space(10.0);

                if walkthrough.at_final_step() && ui.button("Got it!").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.close_theory();
        }
    }
}
