use eframe::egui;
use guess_core::{secret_source_for, DialogLevel, GameController, SecretSource, Settings};

use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_ui_event;
use crate::controller::reducer::ViewState;

const FIELD_WIDTH: f32 = 80.0;

pub struct GuessNumberApp {
    game: GameController<Box<dyn SecretSource>>,
    view: ViewState,
}

impl GuessNumberApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: GameController::new(secret_source_for(settings.seed)),
            view: ViewState::new(settings.default_limit),
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
        egui::Grid::new("guess_form")
            .num_columns(3)
            .spacing([8.0, 10.0])
            .show(ui, |ui| {
                ui.label("Upper limit (≥10):");
                let limit_resp = ui.add(
                    egui::TextEdit::singleline(&mut self.view.limit_input)
                        .desired_width(FIELD_WIDTH),
                );
                let start_clicked = ui.button("Start").clicked();
                if start_clicked || enter_submitted(ui, &limit_resp) {
                    events.push(UiEvent::StartPressed);
                }
                ui.end_row();

                ui.label("Your guess:");
                let guess_resp = ui.add_enabled(
                    self.view.guess_enabled,
                    egui::TextEdit::singleline(&mut self.view.guess_input)
                        .desired_width(FIELD_WIDTH),
                );
                if self.view.focus_guess && self.view.guess_enabled {
                    guess_resp.request_focus();
                    self.view.focus_guess = false;
                }
                let check_clicked = ui
                    .add_enabled(self.view.guess_enabled, egui::Button::new("Check"))
                    .clicked();
                if check_clicked || enter_submitted(ui, &guess_resp) {
                    events.push(UiEvent::GuessSubmitted);
                }
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.label(&self.view.status);
        ui.add_space(4.0);
        ui.label(&self.view.best);
    }

    fn show_dialog(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let Some(dialog) = self.view.dialog.as_ref() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("guess_dialog")).show(ctx, |ui| {
            ui.set_width(280.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(level_icon(dialog.level))
                        .color(level_color(dialog.level))
                        .size(20.0),
                );
                ui.heading(&dialog.title);
            });
            ui.add_space(6.0);
            ui.label(&dialog.message);
            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button("OK").clicked()
            })
            .inner
        });

        if modal.inner || modal.should_close() {
            events.push(UiEvent::DialogDismissed);
        }
    }
}

fn enter_submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn level_icon(level: DialogLevel) -> &'static str {
    match level {
        DialogLevel::Info => "ℹ",
        DialogLevel::Warning => "⚠",
        DialogLevel::Error => "✖",
    }
}

fn level_color(level: DialogLevel) -> egui::Color32 {
    match level {
        DialogLevel::Info => egui::Color32::from_rgb(88, 140, 214),
        DialogLevel::Warning => egui::Color32::from_rgb(222, 166, 58),
        DialogLevel::Error => egui::Color32::from_rgb(200, 76, 76),
    }
}

impl eframe::App for GuessNumberApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::same(12)))
            .show(ctx, |ui| self.show_form(ui, &mut events));
        self.show_dialog(ctx, &mut events);

        if events.is_empty() {
            return;
        }
        for event in events {
            dispatch_ui_event(&mut self.game, &mut self.view, event);
        }
        ctx.request_repaint();
    }
}
