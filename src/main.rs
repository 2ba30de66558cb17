// main.rs - Scrollable Game of Life viewer with per-cell aging

use eframe::egui;

mod camera;
mod cell;
mod patterns;
mod render;
mod sim;
mod ui;
mod world;

use ui::LifeApp;

// Build-time configuration
pub const SCREEN_WIDTH: usize = 800;
pub const SCREEN_HEIGHT: usize = 600;
pub const WORLD_WIDTH: i32 = 2000;
pub const WORLD_HEIGHT: i32 = 2000;
pub const INITIAL_SCALE: i32 = 1;
/// Cells per frame while a pan key is held; doubled while Shift is held.
pub const PAN_SPEED: i32 = 10;
pub const ZOOM_STEP: i32 = 1;

/// Room above the world view for the control strip.
const CONTROL_STRIP_HEIGHT: f32 = 48.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!(
        "starting life viewer, {}x{} world on a {}x{} screen",
        WORLD_WIDTH,
        WORLD_HEIGHT,
        SCREEN_WIDTH,
        SCREEN_HEIGHT
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                SCREEN_WIDTH as f32 + 16.0,
                SCREEN_HEIGHT as f32 + CONTROL_STRIP_HEIGHT,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Life Viewer",
        options,
        Box::new(|_cc| {
            Box::new(LifeApp::new(
                SCREEN_WIDTH,
                SCREEN_HEIGHT,
                WORLD_WIDTH,
                WORLD_HEIGHT,
            ))
        }),
    );

    match &result {
        Ok(()) => log::info!("exiting"),
        Err(err) => log::error!("window setup failed: {err}"),
    }
    result
}
