use eframe::egui::{Color32, RichText, Ui};

use super::super::ViewModel;
use super::super::unlock::UnlockState;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Skill Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Select a skill node to see details and actions.");
            return;
        };

        let Some(node) = self.graph.node(&selected_id) else {
            ui.label("Selected node no longer exists in the graph.");
            return;
        };

        let title = node.title.clone();
        let description = node.description.clone();
        let category_label = node.category.label();
        let tier = node.tier;
        let is_course_node = node.course;
        let has_quiz = node.has_quiz();

        let state = self.unlocks.state(&selected_id);
        let updated = self
            .unlocks
            .record(&selected_id)
            .map(|record| record.updated.clone())
            .unwrap_or_default();

        ui.label(RichText::new(title).strong());
        ui.small(selected_id.as_str());
        ui.add_space(6.0);

        if !description.is_empty() {
            ui.label(description);
            ui.add_space(6.0);
        }

        ui.label(format!("Category: {category_label}  ·  Tier {tier}"));
        match state {
            UnlockState::Locked => {
                ui.colored_label(
                    Color32::from_gray(160),
                    "Locked — pass a prerequisite to unlock.",
                );
            }
            UnlockState::Unlocked => {
                ui.colored_label(
                    Color32::from_rgb(125, 211, 252),
                    "Unlocked — not yet attempted.",
                );
            }
            UnlockState::Completed(score) => {
                ui.colored_label(
                    Color32::from_rgb(134, 239, 172),
                    format!("Completed — last score {score}%."),
                );
            }
        }
        if !updated.is_empty() {
            ui.small(format!("Updated: {updated}"));
        }

        ui.separator();

        if state.is_reachable() {
            if is_course_node && ui.button("Go to course").clicked() {
                self.open_course();
            }
            if has_quiz && ui.button("Start quiz").clicked() {
                self.open_quiz(&selected_id);
            }
            if !is_course_node && !has_quiz {
                ui.small("Nothing to start here; this skill unlocks through the map alone.");
            }
        } else {
            ui.small("Locked skills can be inspected but not started.");
        }

        ui.add_space(6.0);
        if ui.button("Close").clicked() {
            self.set_selected(None);
        }
    }
}
