//! JSON payload parsing for the flashcard endpoint.
//! Turns `{ "data": [ { "name", "description", "image" }, ... ] }` into Flashcards.

use crate::error::{Error, Result};
use crate::models::Flashcard;
use serde_json::{Map, Value};

/// Parses a payload into flashcards, in array order.
///
/// Fails only when the payload itself has the wrong shape (invalid JSON,
/// non-object root, missing or non-array `data`). Individual elements that
/// lack a non-empty string `description` or `image` are skipped.
pub fn parse_flashcards(text: &str) -> Result<Vec<Flashcard>> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| Error::malformed(format!("invalid JSON: {e}")))?;

    let root = root
        .as_object()
        .ok_or_else(|| Error::malformed("root is not a JSON object"))?;

    let data = root
        .get("data")
        .ok_or_else(|| Error::malformed("missing `data` field"))?
        .as_array()
        .ok_or_else(|| Error::malformed("`data` is not an array"))?;

    let cards = data
        .iter()
        .enumerate()
        .filter_map(|(i, element)| match flashcard_from_element(element) {
            Some(card) => Some(card),
            None => {
                log::debug!("Skipping payload element {}: {}", i, element);
                None
            }
        })
        .collect();

    Ok(cards)
}

/// Parses a payload, treating any failure as "no cards".
pub fn flashcards_or_empty(text: &str) -> Vec<Flashcard> {
    parse_flashcards(text).unwrap_or_else(|e| {
        log::warn!("Falling back to an empty card list: {}", e);
        Vec::new()
    })
}

// `name` is part of the wire format but never used.
fn flashcard_from_element(element: &Value) -> Option<Flashcard> {
    let fields = element.as_object()?;
    let back = non_empty_str(fields, "description")?;
    let image = non_empty_str(fields, "image")?;
    Some(Flashcard::new(image, back))
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
