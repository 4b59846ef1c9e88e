mod app;
mod catalog;
mod trend;
mod util;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Skip live repository trend lookups.
    #[arg(long)]
    offline: bool,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tech Layer Map",
        options,
        Box::new(move |cc| Ok(Box::new(app::TechLayerMapApp::new(cc, args.offline)))),
    )
}
