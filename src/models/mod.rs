pub mod flashcard;
pub mod flip_state;

pub use flashcard::Flashcard;
pub use flip_state::FlipState;
