use crate::components::{action_grid, status_bar};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use mustang_app_core::{
    action_grid as grid_vm, clock_label, system_dispatcher, ActionTileVm, ChannelListener,
    ClockTicker, DispatchOutcome, ExitControl, ShellSettings, StatusLine, SystemDispatcher,
};

const GRID_COLUMNS: usize = 2;
const STATUS_BAR_HEIGHT: f32 = 44.0;

/// Closes the root viewport, which ends `eframe::run_native`.
pub struct ViewportExit(egui::Context);

impl ExitControl for ViewportExit {
    fn request_exit(&self) {
        self.0.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

pub struct ShellApp {
    dispatcher: SystemDispatcher<ViewportExit>,
    outcomes: mpsc::Receiver<DispatchOutcome>,
    status: StatusLine,
    grid: Vec<Vec<ActionTileVm>>,
    clock: ClockTicker,
    clock_format: String,
    clock_text: String,
}

impl ShellApp {
    pub fn new(ctx: egui::Context, settings: ShellSettings) -> Self {
        let mut dispatcher = system_dispatcher(settings.launch.clone(), ViewportExit(ctx));
        let (listener, outcomes) = ChannelListener::new();
        dispatcher.subscribe(listener);

        let tick = Duration::from_millis(mustang_config::CLOCK_TICK_MS);

        Self {
            dispatcher,
            outcomes,
            status: StatusLine::new(settings.status_ttl()),
            grid: grid_vm(GRID_COLUMNS),
            clock: ClockTicker::new(tick, Instant::now()),
            clock_format: settings.clock_format,
            clock_text: String::new(),
        }
    }

    fn drain_outcomes(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.status.post(&outcome, now);
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drain_outcomes(now);

        if self.clock.tick(now) {
            self.clock_text = clock_label(&chrono::Local::now(), &self.clock_format);
        }

        let mut pressed = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    pressed = action_grid::draw(&mut *tui, &self.grid);

                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(STATUS_BAR_HEIGHT),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        status_bar::draw(tui, self.status.visible(now), &self.clock_text);
                    });
                });
        });

        if let Some(action) = pressed {
            // Outcome reaches the status line through the channel listener.
            self.dispatcher.dispatch(action);
            self.drain_outcomes(Instant::now());
            ctx.request_repaint();
        }

        let mut wait = self.clock.remaining(Instant::now());
        if let Some(expiry) = self.status.expires_in(Instant::now()) {
            wait = wait.min(expiry);
        }
        ctx.request_repaint_after(wait);
    }
}
