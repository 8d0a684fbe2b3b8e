// Library surface for headless/integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod passage;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod ui;
pub mod viewport;

pub use app::App;
pub use error::TyperError;
