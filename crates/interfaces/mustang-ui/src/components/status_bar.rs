use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use mustang_app_core::{StatusMessage, StatusTone};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, status: Option<&StatusMessage>, clock: &str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(12.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("MUSTANG")
                        .size(16.0)
                        .extra_letter_spacing(2.0)
                        .strong()
                        .color(COL_TEXT),
                );

                if let Some(status) = status {
                    let color = match status.tone {
                        StatusTone::Info => COL_ACCENT,
                        StatusTone::Error => COL_DANGER,
                    };
                    tui.label(egui::RichText::new(&status.text).size(16.0).color(color));
                }
            });

            tui.label(
                egui::RichText::new(clock)
                    .family(egui::FontFamily::Monospace)
                    .size(20.0)
                    .color(COL_TEXT),
            );
        },
    );
}
