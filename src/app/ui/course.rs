use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};

use super::super::ViewModel;
use super::super::{Page, unlock::UnlockState};

impl ViewModel {
    /// Course page: the quiz-bearing skills as a card list, driven by the
    /// same unlock board as the map.
    pub(in crate::app) fn draw_course(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("< Back to map").clicked() {
                self.page = Page::Map;
            }
        });
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            ui.heading(format!("Course: {}", self.graph.title));
        });
        ui.add_space(12.0);

        let cards: Vec<(String, String, String, UnlockState)> = self
            .graph
            .nodes()
            .iter()
            .filter(|node| node.has_quiz())
            .map(|node| {
                (
                    node.id.clone(),
                    node.title.clone(),
                    node.updated.clone(),
                    self.unlocks.state(&node.id),
                )
            })
            .collect();

        let mut picked = None;
        egui::ScrollArea::vertical()
            .id_salt("course_cards_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (id, title, updated, state) in &cards {
                    let reachable = state.is_reachable();
                    let row = ui.horizontal(|ui| {
                        let label = if reachable {
                            RichText::new(title.as_str()).strong()
                        } else {
                            RichText::new(title.as_str()).color(Color32::from_gray(140))
                        };
                        let clicked =
                            ui.add_enabled(reachable, egui::SelectableLabel::new(false, label))
                                .clicked();
                        if !updated.is_empty() {
                            ui.small(updated.as_str());
                        }
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let score_text = match state {
                                UnlockState::Completed(score) => format!("{score}%"),
                                _ => "—".to_owned(),
                            };
                            ui.label(score_text);
                            if !reachable {
                                ui.small("locked");
                            }
                        });
                        clicked
                    });
                    if row.inner {
                        picked = Some(id.clone());
                    }
                    ui.add_space(4.0);
                }
            });

        if let Some(id) = picked {
            self.open_quiz(&id);
        }
    }
}
