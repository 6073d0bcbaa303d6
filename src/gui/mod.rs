pub mod app;
pub mod filter_bar;
pub mod header;
pub mod job_card;
pub mod loader;
pub mod settings;
pub mod theme;

pub use app::JobBoardApp;
