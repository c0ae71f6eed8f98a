//! Terminal quiz: name the mean, median and mode markers on a density plot.

pub mod app;
pub mod components;
pub mod export;
pub mod form;
pub mod logging;
pub mod settings;
pub mod state;

pub use app::App;
pub use export::round_to_json;
pub use logging::init_logging;
pub use settings::Settings;
