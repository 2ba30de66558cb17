// ui.rs - Input handling, control strip and frame presentation

use eframe::egui;
use egui::{Color32, ColorImage, Key, TextureHandle, TextureOptions, Vec2};

use crate::camera::Camera;
use crate::world::WorldBuffers;
use crate::{patterns, render, sim};
use crate::{INITIAL_SCALE, PAN_SPEED, ZOOM_STEP};

pub struct LifeApp {
    buffers: WorldBuffers,
    camera: Camera,
    frame: ColorImage,
    texture: Option<TextureHandle>,
    paused: bool,
    generation: u64,
    selected_pattern: usize,
}

impl LifeApp {
    pub fn new(
        screen_width: usize,
        screen_height: usize,
        world_width: i32,
        world_height: i32,
    ) -> LifeApp {
        let mut buffers = WorldBuffers::new(world_width, world_height);
        buffers.current_mut().randomize(&mut rand::thread_rng());

        LifeApp {
            buffers,
            camera: Camera::new(
                screen_width as i32,
                screen_height as i32,
                world_width,
                world_height,
                INITIAL_SCALE,
            ),
            frame: ColorImage::new([screen_width, screen_height], Color32::WHITE),
            texture: None,
            paused: false,
            generation: 0,
            selected_pattern: 0,
        }
    }

    fn randomize(&mut self) {
        self.buffers.current_mut().randomize(&mut rand::thread_rng());
        self.generation = 0;
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let (cx, cy) = self.camera.center();
            patterns::apply(self.buffers.current_mut(), pattern, cx, cy);
            self.generation = 0;
            self.paused = true;
        }
    }

    /// Held keys become a camera velocity; Shift doubles it. Space, R, Z
    /// and X edge-trigger on the press.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let mut quit = false;

        ctx.input(|i| {
            let speed = if i.modifiers.shift { PAN_SPEED * 2 } else { PAN_SPEED };
            let mut dx = 0;
            let mut dy = 0;
            if i.key_down(Key::ArrowLeft) || i.key_down(Key::A) {
                dx -= speed;
            }
            if i.key_down(Key::ArrowRight) || i.key_down(Key::D) {
                dx += speed;
            }
            if i.key_down(Key::ArrowUp) || i.key_down(Key::W) {
                dy -= speed;
            }
            if i.key_down(Key::ArrowDown) || i.key_down(Key::S) {
                dy += speed;
            }
            if dx != 0 || dy != 0 {
                self.camera.pan(dx, dy);
            }

            if i.key_pressed(Key::Space) {
                self.paused = !self.paused;
            }
            if i.key_pressed(Key::R) {
                self.randomize();
            }
            if i.key_pressed(Key::Z) {
                self.camera.set_scale(self.camera.scale() + ZOOM_STEP);
            }
            if i.key_pressed(Key::X) {
                self.camera.set_scale(self.camera.scale() - ZOOM_STEP);
            }
            if i.key_pressed(Key::Escape) {
                quit = true;
            }
        });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if !self.paused {
            sim::step(&mut self.buffers);
            self.generation += 1;
        }

        render::draw_world(self.buffers.current(), &self.camera, &mut self.frame);
        match &mut self.texture {
            Some(texture) => texture.set(self.frame.clone(), TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("world", self.frame.clone(), TextureOptions::NEAREST));
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if self.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    self.paused = !self.paused;
                }

                if ui.button("🎲 Randomize").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                let (cx, cy) = self.camera.center();
                ui.label(format!("Generation: {}", self.generation));
                ui.label(format!("Camera: ({cx}, {cy})  Scale: {}px", self.camera.scale()));
            });

            ui.separator();

            let size = Vec2::new(self.frame.size[0] as f32, self.frame.size[1] as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            if let Some(texture) = &self.texture {
                painter.image(
                    texture.id(),
                    response.rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        });

        // Run as fast as the platform repaints us.
        ctx.request_repaint();
    }
}
