use super::ConverterApp;
use egui::{RichText, TextEdit};
use std::time::Duration;

const BUTTON_WIDTH: f32 = 160.0;

impl ConverterApp {
    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        self.poll_conversion();
        if self.worker.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading("Excel to iCal Converter");
                ui.add_space(12.0);

                self.render_paths(ui);

                ui.add_space(8.0);
                self.render_convert(ui);

                ui.add_space(12.0);
                self.render_options(ui);
            });
        });
    }

    fn render_paths(&mut self, ui: &mut egui::Ui) {
        let idle = !self.worker.is_busy();

        if ui
            .add_enabled(
                idle,
                egui::Button::new("Select Excel File").min_size(egui::vec2(BUTTON_WIDTH, 0.0)),
            )
            .clicked()
        {
            self.select_input();
        }
        path_label(ui, &self.state.input_path);

        ui.add_space(6.0);
        if ui
            .add_enabled(
                idle,
                egui::Button::new("Save iCal File").min_size(egui::vec2(BUTTON_WIDTH, 0.0)),
            )
            .clicked()
        {
            self.select_output();
        }
        path_label(ui, &self.state.output_path);
    }

    fn render_convert(&mut self, ui: &mut egui::Ui) {
        let busy = self.worker.is_busy();

        if ui
            .add_enabled(
                !busy,
                egui::Button::new(RichText::new("Convert").strong())
                    .min_size(egui::vec2(BUTTON_WIDTH, 0.0)),
            )
            .clicked()
        {
            self.trigger_convert();
        }

        ui.add_space(6.0);
        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Converting…");
            });
        } else if !self.state.message.is_empty() {
            let text = RichText::new(&self.state.message);
            let text = if self.state.message.starts_with("Error: ") {
                text.color(ui.visuals().error_fg_color)
            } else {
                text
            };
            ui.label(text);
        }
    }

    fn render_options(&mut self, ui: &mut egui::Ui) {
        let busy = self.worker.is_busy();

        egui::CollapsingHeader::new("Options")
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("conversion_options")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Sheet");
                        ui.add(TextEdit::singleline(&mut self.options.sheet_name).desired_width(180.0));
                        ui.end_row();

                        ui.label("Time zone");
                        ui.add(
                            TextEdit::singleline(&mut self.options.time_zone)
                                .hint_text("UTC, floating or Europe/Berlin")
                                .desired_width(180.0),
                        )
                        .on_hover_text("UTC writes times with a Z suffix, floating writes them without a zone");
                        ui.end_row();
                    });

                if let Some(error) = &self.options.error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }

                ui.horizontal(|ui| {
                    let dirty = self.options.is_dirty(&super::read_settings(&self.settings));
                    if ui
                        .add_enabled(!busy && dirty, egui::Button::new("Apply"))
                        .clicked()
                    {
                        self.apply_options();
                    }
                    if ui.add_enabled(!busy, egui::Button::new("Reset")).clicked() {
                        self.reset_options();
                    }
                });
            });
    }
}

fn path_label(ui: &mut egui::Ui, path: &str) {
    if path.is_empty() {
        ui.label(RichText::new("No file selected").weak());
    } else {
        ui.label(RichText::new(path).monospace());
    }
}
