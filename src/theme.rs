//! Light color scheme for the viewer window.
use eframe::egui::{self, Color32, Stroke};

pub const PRIMARY: Color32 = Color32::from_rgb(0x62, 0x00, 0xEE);
pub const SECONDARY: Color32 = Color32::from_rgb(0x03, 0xDA, 0xC6);

/// Builds light visuals tinted with the primary and secondary colors.
pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();

    visuals.selection.bg_fill = PRIMARY;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.hyperlink_color = SECONDARY;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, PRIMARY);
    visuals.widgets.active.bg_fill = PRIMARY;
    visuals.widgets.active.weak_bg_fill = PRIMARY;

    visuals
}

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
}
