mod app;
mod curriculum;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Curriculum JSON file; the built-in course is used when omitted.
    #[arg(long)]
    curriculum: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "skill-atlas",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::SkillAtlasApp::new(
                cc,
                args.curriculum.clone(),
            )))
        }),
    )
}
