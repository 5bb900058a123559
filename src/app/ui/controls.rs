use eframe::egui::{self, Align, Color32, Layout, RichText, Ui, pos2};

use crate::curriculum::Category;

use super::super::ViewModel;
use super::super::filter::{CategoryFilter, search_titles};
use super::super::render_utils::category_color;
use super::super::viewport::{MAX_SCALE, MIN_SCALE};

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Map Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Search skills");
        ui.text_edit_singleline(&mut self.search)
            .on_hover_text("Matching titles are listed below; pick one to jump to it.");

        if !self.search.trim().is_empty() {
            self.draw_search_results(ui);
        }

        ui.separator();

        ui.label("Filter by category");
        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(
                &mut self.filter,
                CategoryFilter::All,
                CategoryFilter::All.label(),
            );
            for category in Category::ALL {
                ui.selectable_value(
                    &mut self.filter,
                    CategoryFilter::Only(category),
                    category.label(),
                );
            }
        });

        ui.separator();

        let mut zoom = self.viewport.scale;
        let zoom_slider = ui
            .add(egui::Slider::new(&mut zoom, MIN_SCALE..=MAX_SCALE).text("Zoom"))
            .on_hover_text("Same scale the mouse wheel drives on the canvas.");
        if zoom_slider.changed() {
            self.viewport.set_view(self.viewport.offset, zoom);
        }

        ui.checkbox(&mut self.show_fps_bar, "FPS display")
            .on_hover_text("Show a live frame-rate readout in the header.");

        ui.separator();

        ui.label(RichText::new("Legend").strong());
        for category in Category::ALL {
            ui.horizontal(|ui| {
                ui.colored_label(category_color(category), "●");
                ui.label(category.label());
            });
        }

        ui.add_space(8.0);
        ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
            ui.small("Drag to pan, scroll to zoom. Locked skills can be inspected but not started.");
        });
    }

    fn draw_search_results(&mut self, ui: &mut Ui) {
        let hits: Vec<(String, String, u8)> = search_titles(&self.graph, &self.search)
            .iter()
            .map(|node| (node.id.clone(), node.title.clone(), node.tier))
            .collect();

        if hits.is_empty() {
            ui.small("No skills match.");
            return;
        }

        let mut picked = None;
        egui::ScrollArea::vertical()
            .id_salt("search_results_scroll")
            .max_height(140.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (id, title, tier) in &hits {
                    let is_selected = self.selected.as_deref() == Some(id.as_str());
                    let row = ui.horizontal(|ui| {
                        let clicked = ui.selectable_label(is_selected, title.as_str()).clicked();
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("tier {tier}"))
                                    .color(Color32::from_gray(150))
                                    .small(),
                            );
                        });
                        clicked
                    });
                    if row.inner {
                        picked = Some(id.clone());
                    }
                }
            });

        if let Some(id) = picked {
            self.focus_search_result(&id);
        }
    }

    /// Selecting a search result selects the node and recenters the
    /// viewport on its world position at a fixed scale.
    fn focus_search_result(&mut self, id: &str) {
        let Some(node) = self.graph.node(id) else {
            return;
        };
        let position = pos2(node.position.x, node.position.y);
        self.set_selected(Some(id.to_string()));
        self.viewport.focus_on(position);
    }
}
