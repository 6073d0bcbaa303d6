use eframe::egui;
use jobdeck::gui::JobBoardApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Job Listings")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native("jobdeck", options, Box::new(|cc| Ok(Box::new(JobBoardApp::new(cc)))))
}
