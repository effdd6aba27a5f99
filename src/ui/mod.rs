use egui_macroquad::egui;
use macroquad::prelude::*;

use crate::sim::{DayPhase, Scene};

pub struct Controls {
    pub paused: bool,
    pub sim_speed: f32,
}

pub struct App {
    pub scene: Scene,
    pub controls: Controls,
}

impl App {
    pub fn new(moisture: f32) -> Self {
        Self {
            scene: Scene::new(moisture, DayPhase::current()),
            controls: Controls {
                paused: false,
                sim_speed: 1.0,
            },
        }
    }

    // esc quits anytime, any key once the run is over
    pub fn wants_exit(&self) -> bool {
        if is_key_pressed(KeyCode::Escape) {
            return true;
        }
        self.scene.finished() && get_last_key_pressed().is_some()
    }
}

pub fn draw_ui(app: &mut App) {
    egui_macroquad::ui(|ctx| {
        egui::Window::new("soil monitor")
            .default_pos([12.0, 12.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("moisture: {:.1}%", app.scene.moisture));
                ui.label(format!("condition: {}", app.scene.condition.label()));
                ui.label(app.scene.day_phase.label());

                if let Some((n, total)) = app.scene.droplet_progress() {
                    ui.label(format!("droplet {n}/{total}"));
                }

                ui.separator();

                ui.checkbox(&mut app.controls.paused, "pause");
                ui.add(egui::Slider::new(&mut app.controls.sim_speed, 0.25..=3.0).text("speed"));

                if app.scene.finished() {
                    ui.separator();
                    ui.label("press any key to close");
                }
            });
    });

    egui_macroquad::draw();
}
