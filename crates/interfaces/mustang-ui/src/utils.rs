use crate::theme::*;
use eframe::egui;
use mustang_app_core::TileVariant;

/// Finger-sized cell in the action grid.
pub const TILE_MIN_SIZE: egui::Vec2 = egui::vec2(180.0, 100.0);

pub fn tile_button(ui: &mut egui::Ui, label: &str, variant: TileVariant) -> egui::Response {
    let (stroke_col, text_col) = match variant {
        TileVariant::Launch => (COL_ACCENT, COL_TEXT),
        TileVariant::Exit => (COL_DANGER, COL_DANGER),
    };

    let text = egui::RichText::new(label)
        .size(28.0)
        .strong()
        .color(text_col);

    let btn = egui::Button::new(text)
        .min_size(TILE_MIN_SIZE)
        .fill(COL_BG_DARK)
        .stroke(egui::Stroke::new(2.0, stroke_col));

    ui.add(btn)
}
