// Excel to iCal Converter
// Main entry point

#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use excel_to_ical::ui_egui::ConverterApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Excel to iCal Converter");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 380.0])
            .with_min_inner_size([360.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Excel to iCal Converter",
        native_options,
        Box::new(|cc| Ok(Box::new(ConverterApp::new(cc)))),
    )
}
