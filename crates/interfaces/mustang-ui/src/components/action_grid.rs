use crate::utils::tile_button;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use mustang_app_core::{Action, ActionTileVm};

/// Draws the button grid and returns the action pressed this frame, if any.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, rows: &[Vec<ActionTileVm>]) -> Option<Action> {
    let mut pressed = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        gap: length(20.0),
        padding: length(20.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        for row in rows {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                flex_grow: 1.0,
                gap: length(20.0),
                align_items: Some(taffy::AlignItems::Stretch),
                ..Default::default()
            })
            .add(|tui| {
                for tile in row {
                    tui.style(taffy::Style {
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        justify_content: Some(taffy::JustifyContent::Center),
                        align_items: Some(taffy::AlignItems::Center),
                        ..Default::default()
                    })
                    .add(|tui| {
                        if tui
                            .ui(|ui| tile_button(ui, tile.label, tile.variant))
                            .clicked()
                        {
                            pressed = Some(tile.action);
                        }
                    });
                }
            });
        }
    });

    pressed
}
