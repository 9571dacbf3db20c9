//! Main application UI and render state.
//! Fetches the card list once on startup and shows each card as a clickable, flippable frame.

use eframe::egui;
use oropic_read::config::Config;
use oropic_read::error::Result;
use oropic_read::models::{Flashcard, FlipState};
use oropic_read::network::FetchTask;

const SCREEN_PADDING: f32 = 10.0;
const CARD_MARGIN: f32 = 8.0;
const CARD_PADDING: f32 = 16.0;
const CARD_SPACING: f32 = 16.0;
const BACK_TEXT_SIZE: f32 = 16.0;
const FRONT_HINT: &str = "Tap to see the back";

/// Main application state
pub struct FlashcardApp {
    flashcards: Vec<Flashcard>,
    flips: FlipState,
    fetch: Option<FetchTask>,
    image_size: f32,
}

impl eframe::App for FlashcardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();
        self.render(ctx);
    }
}

impl FlashcardApp {
    /// Creates the screen and starts its one-off fetch.
    /// The worker asks `ctx` for a repaint once the result is ready.
    pub fn new(ctx: &egui::Context, config: &Config) -> Self {
        let repaint_ctx = ctx.clone();
        let fetch = match FetchTask::spawn(config.endpoint.clone(), move || {
            repaint_ctx.request_repaint()
        }) {
            Ok(task) => Some(task),
            Err(e) => {
                log::warn!("Could not start flashcard fetch: {}", e);
                None
            }
        };

        Self::with_fetch(fetch, config.card.image_size)
    }

    fn with_fetch(fetch: Option<FetchTask>, image_size: f32) -> Self {
        Self {
            flashcards: Vec::new(),
            flips: FlipState::default(),
            fetch,
            image_size,
        }
    }

    /// Takes the fetch result if it has arrived. Runs on the UI thread only.
    fn poll_fetch(&mut self) {
        let Some(task) = self.fetch.as_mut() else {
            return;
        };
        if let Some(result) = task.poll() {
            self.fetch = None;
            self.apply_fetch_result(result);
        }
    }

    /// Any failure shows up as an empty list, never as an error on screen.
    fn apply_fetch_result(&mut self, result: Result<Vec<Flashcard>>) {
        self.flashcards = match result {
            Ok(cards) => {
                log::info!("Loaded {} flashcards", cards.len());
                cards
            }
            Err(e) => {
                log::warn!("Flashcard fetch failed, showing no cards: {}", e);
                Vec::new()
            }
        };
        self.flips.reset();
    }

    fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(SCREEN_PADDING))
            .show(ctx, |ui| {
                // Toggle after the loop to avoid borrowing conflicts
                let mut action_toggle: Option<usize> = None;

                egui::ScrollArea::vertical()
                    .id_salt("flashcards_list")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (i, flashcard) in self.flashcards.iter().enumerate() {
                            if render_card(ui, flashcard, self.flips.is_flipped(i), self.image_size)
                            {
                                action_toggle = Some(i);
                            }
                            ui.add_space(CARD_SPACING);
                        }
                    });

                if let Some(i) = action_toggle {
                    self.flips.toggle(i);
                }
            });
    }
}

/// Draws one card, image on the front and text on the back.
/// Returns true when the card was clicked.
fn render_card(ui: &mut egui::Ui, flashcard: &Flashcard, flipped: bool, image_size: f32) -> bool {
    let response = egui::Frame::group(ui.style())
        .fill(ui.visuals().panel_fill)
        .inner_margin(CARD_PADDING)
        .outer_margin(CARD_MARGIN)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if flipped {
                    ui.label(egui::RichText::new(&flashcard.back).size(BACK_TEXT_SIZE));
                } else {
                    ui.add(
                        egui::Image::new(flashcard.image.as_str())
                            .fit_to_exact_size(egui::vec2(image_size, image_size)),
                    )
                    .on_hover_text(FRONT_HINT);
                }
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    response.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oropic_read::error::Error;

    fn sample_cards() -> Vec<Flashcard> {
        vec![
            Flashcard::new("http://x/cat.png", "Cat"),
            Flashcard::new("http://x/dog.png", "Dog"),
        ]
    }

    #[test]
    fn test_starts_empty() {
        let app = FlashcardApp::with_fetch(None, 200.0);
        assert!(app.flashcards.is_empty());
    }

    #[test]
    fn test_successful_fetch_fills_render_state() {
        let mut app = FlashcardApp::with_fetch(None, 200.0);
        app.apply_fetch_result(Ok(sample_cards()));
        assert_eq!(app.flashcards, sample_cards());
    }

    #[test]
    fn test_failed_fetch_shows_empty_list() {
        let mut app = FlashcardApp::with_fetch(None, 200.0);
        app.apply_fetch_result(Ok(sample_cards()));

        app.apply_fetch_result(Err(Error::malformed("missing `data` field")));
        assert!(app.flashcards.is_empty());

        app.apply_fetch_result(Err(Error::WorkerGone));
        assert!(app.flashcards.is_empty());
    }

    #[test]
    fn test_new_result_resets_flips() {
        let mut app = FlashcardApp::with_fetch(None, 200.0);
        app.apply_fetch_result(Ok(sample_cards()));
        app.flips.toggle(1);
        assert!(app.flips.is_flipped(1));

        app.apply_fetch_result(Ok(sample_cards()));
        assert!(!app.flips.is_flipped(1));
    }

    #[test]
    fn test_render_without_fetch_does_not_panic() {
        let mut app = FlashcardApp::with_fetch(None, 120.0);
        app.apply_fetch_result(Ok(sample_cards()));
        app.flips.toggle(0);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            app.poll_fetch();
            app.render(ctx);
        });
        assert_eq!(app.flashcards.len(), 2);
    }
}
