pub mod json;

pub use json::{flashcards_or_empty, parse_flashcards};
