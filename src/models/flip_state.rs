//! Per-card flip state for the current card list.
//! Pure view state, kept apart from `Flashcard` and keyed by list index.
use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
pub struct FlipState {
    flipped: HashSet<usize>,
}

impl FlipState {
    /// Returns true when the card at `index` shows its back face.
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.flipped.remove(&index) {
            self.flipped.insert(index);
        }
    }

    /// Turns every card back to its front face.
    pub fn reset(&mut self) {
        self.flipped.clear();
    }
}
