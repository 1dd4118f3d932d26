use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Cabin palette: near-black so the panel does not glare at night.
pub const COL_BG: Color32 = Color32::from_rgb(13, 13, 20);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(8, 8, 12);
pub const COL_BORDER: Color32 = Color32::from_rgb(40, 40, 52);
pub const COL_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(160, 160, 170);
pub const COL_ACCENT: Color32 = Color32::from_rgb(125, 211, 252); // Sky blue
pub const COL_DANGER: Color32 = Color32::from_rgb(225, 29, 72);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_DARK;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    // No hover on a touchscreen; pressed state is the only feedback.
    visuals.widgets.hovered = visuals.widgets.inactive;
    visuals.widgets.active.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(28.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(18.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(18.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(28.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(14.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(20.0, 20.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
