mod config;
pub mod contact;
mod service;
pub(crate) mod template;

pub use config::*;
pub use service::*;
