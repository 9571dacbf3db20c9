pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod payload;
pub mod theme;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Flashcard, FlipState};
