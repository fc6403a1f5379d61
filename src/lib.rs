pub mod app;
pub mod backend;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reference;
pub mod report;
pub mod session;
pub mod state;
pub mod trend;
pub mod ui;

pub use app::router;
pub use backend::{HttpBackend, LookupBackend};
pub use config::AppConfig;
pub use state::AppState;
