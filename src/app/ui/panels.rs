use std::collections::VecDeque;

use eframe::egui::{self, Align, Context, Layout};

use crate::curriculum::SkillGraph;

use super::super::filter::CategoryFilter;
use super::super::unlock::UnlockBoard;
use super::super::viewport::Viewport;
use super::super::{Page, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(graph: SkillGraph) -> Self {
        let unlocks = UnlockBoard::new(&graph);

        Self {
            graph,
            unlocks,
            viewport: Viewport::default(),
            selected: None,
            filter: CategoryFilter::All,
            search: String::new(),
            page: Page::Map,
            quiz: None,
            theory: None,
            show_fps_bar: true,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        self.update_fps_counter(ctx);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(self.graph.title.as_str());
                    ui.separator();
                    ui.label(format!("skills: {}", self.graph.node_count()));
                    ui.label(format!("links: {}", self.graph.edge_count()));
                    ui.label(format!(
                        "unlocked: {} / {}",
                        self.unlocks.reachable_count(),
                        self.graph.node_count()
                    ));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(fps_text) = self.fps_display_text() {
                            ui.label(fps_text);
                        }
                    });
                });
            });

        match self.page {
            Page::Map => {
                egui::SidePanel::left("controls")
                    .resizable(true)
                    .default_width(300.0)
                    .show(ctx, |ui| self.draw_controls(ui));

                egui::SidePanel::right("details")
                    .resizable(true)
                    .default_width(320.0)
                    .show(ctx, |ui| self.draw_details(ui));

                egui::CentralPanel::default().show(ctx, |ui| self.draw_map(ui));
            }
            Page::Course => {
                egui::CentralPanel::default().show(ctx, |ui| self.draw_course(ui));
            }
        }

        // Overlays sit above whichever page is active.
        self.draw_quiz_overlay(ctx);
        self.draw_theory_overlay(ctx);
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        if self.selected != selected {
            self.selected = selected;
        }
    }

    pub(in crate::app) fn open_course(&mut self) {
        self.page = Page::Course;
    }
}
