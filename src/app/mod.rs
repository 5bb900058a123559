use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};

use crate::curriculum::{SkillGraph, load_curriculum};

mod filter;
mod graph;
mod minimap;
mod render_utils;
mod ui;
mod unlock;
mod viewport;

use self::filter::CategoryFilter;
use self::ui::quiz::QuizSession;
use self::ui::theory::TheoryWalkthrough;
use self::unlock::UnlockBoard;
use self::viewport::Viewport;

pub struct SkillAtlasApp {
    curriculum_path: Option<PathBuf>,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<SkillGraph, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

/// All session state: the immutable graph, the unlock board, and the
/// transient view state (viewport, selection, filter, overlays). Lives for
/// the session and resets only when the curriculum is reloaded.
struct ViewModel {
    graph: SkillGraph,
    unlocks: UnlockBoard,
    viewport: Viewport,
    selected: Option<String>,
    filter: CategoryFilter,
    search: String,
    page: Page,
    quiz: Option<QuizSession>,
    theory: Option<TheoryWalkthrough>,
    show_fps_bar: bool,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Map,
    Course,
}

impl SkillAtlasApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, curriculum_path: Option<PathBuf>) -> Self {
        let state = Self::start_load(curriculum_path.clone());
        Self {
            curriculum_path,
            state,
        }
    }

    fn spawn_load(path: Option<PathBuf>) -> Receiver<Result<SkillGraph, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_curriculum(path.as_deref()).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(path: Option<PathBuf>) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(path),
        }
    }
}

impl eframe::App for SkillAtlasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(Ok(graph)) => {
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(graph))));
                    }
                    Ok(Err(error)) => transition = Some(AppState::Error(error)),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        transition =
                            Some(AppState::Error("curriculum load worker disconnected".to_owned()));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading curriculum...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load curriculum");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.curriculum_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                model.show(ctx);
            }
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
