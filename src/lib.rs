pub mod assets;
pub mod cli;
pub mod config;
pub mod content;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod showcase;
pub mod template;

pub use routes::{AppState, FAILURE_MESSAGE, app, router};
pub use showcase::Showcase;
