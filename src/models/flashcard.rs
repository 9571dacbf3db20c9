//! Flashcard is a pair <image, back>. The front shows the image, the back shows text
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    /// URL of the image shown on the front face
    pub image: String,
    /// Text shown on the reverse face
    pub back: String,
}

impl Flashcard {
    pub fn new(image: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            back: back.into(),
        }
    }
}
