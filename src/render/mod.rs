use macroquad::prelude::*;

use crate::sim::{DayPhase, Scene, SoilCondition};

// bgi-ish palette
const WATER_BLUE: Color = Color::new(0.0, 0.0, 0.67, 1.0);
const PLANT_GREEN: Color = Color::new(0.0, 0.67, 0.0, 1.0);
const POT_BROWN: Color = Color::new(0.67, 0.33, 0.0, 1.0);
const DRY_RED: Color = Color::new(0.67, 0.0, 0.0, 1.0);
const DAY_SKY: Color = Color::new(0.33, 0.33, 1.0, 1.0);
const NIGHT_SKY: Color = Color::new(0.33, 0.33, 0.33, 1.0);

const TEXT_SIZE: f32 = 16.0;

pub fn draw_scene(scene: &Scene) {
    clear_background(sky(scene.day_phase));

    draw_tank();
    draw_pipe(scene.flow_active());
    draw_pot();
    draw_plant();

    draw_text(scene.day_phase.label(), 260.0, 32.0, TEXT_SIZE, WHITE);
    draw_text(
        &format!("Soil Moisture: {:.1}%", scene.moisture),
        250.0,
        62.0,
        TEXT_SIZE,
        WHITE,
    );
    draw_status_bar(scene.condition);

    if let Some(line) = scene.action_text() {
        draw_text(line, 250.0, 132.0, TEXT_SIZE, WHITE);
    }
    if let Some(line) = scene.completion_text() {
        draw_text(line, 250.0, 432.0, TEXT_SIZE, WHITE);
    }

    if let Some(p) = scene.droplet() {
        draw_droplet(p);
    }
}

fn sky(phase: DayPhase) -> Color {
    match phase {
        DayPhase::Day => DAY_SKY,
        DayPhase::Night => NIGHT_SKY,
    }
}

fn draw_tank() {
    let (left, right, top, bottom) = (150.0, 230.0, 150.0, 250.0);
    let cx = (left + right) * 0.5;
    let rx = (right - left) * 0.5;

    draw_ellipse_lines(cx, top, rx, 10.0, 0.0, 1.0, WHITE);
    draw_rectangle_lines(left, top, right - left, bottom - top, 1.0, WHITE);
    draw_ellipse_lines(cx, bottom, rx, 10.0, 0.0, 1.0, WHITE);

    // water level sits just under the top cap
    draw_rectangle(left + 1.0, top + 10.0, right - left - 2.0, bottom - top - 11.0, WATER_BLUE);

    draw_text("Water Tank", 155.0, 272.0, TEXT_SIZE, WHITE);
}

fn draw_pipe(flow: bool) {
    draw_rectangle_lines(230.0, 190.0, 270.0, 20.0, 1.0, WHITE);
    if flow {
        draw_rectangle(231.0, 191.0, 268.0, 18.0, WATER_BLUE);
    }
}

fn draw_pot() {
    let a = vec2(470.0, 350.0);
    let b = vec2(530.0, 350.0);
    let c = vec2(510.0, 390.0);
    let d = vec2(490.0, 390.0);
    draw_triangle(a, b, c, POT_BROWN);
    draw_triangle(a, c, d, POT_BROWN);
}

fn draw_plant() {
    // stem and two leaf pairs
    draw_line(500.0, 350.0, 500.0, 300.0, 1.0, PLANT_GREEN);
    draw_line(500.0, 320.0, 490.0, 310.0, 1.0, PLANT_GREEN);
    draw_line(500.0, 320.0, 510.0, 310.0, 1.0, PLANT_GREEN);
    draw_line(500.0, 300.0, 490.0, 290.0, 1.0, PLANT_GREEN);
    draw_line(500.0, 300.0, 510.0, 290.0, 1.0, PLANT_GREEN);
}

fn draw_droplet(p: Vec2) {
    draw_ellipse(p.x, p.y, 3.0, 5.0, 0.0, WATER_BLUE);
}

fn draw_status_bar(condition: SoilCondition) {
    draw_rectangle_lines(250.0, 70.0, 200.0, 20.0, 1.0, WHITE);
    draw_rectangle(251.0, 71.0, 198.0, 18.0, condition_color(condition));
    draw_text(condition.label(), 460.0, 84.0, TEXT_SIZE, WHITE);
}

fn condition_color(condition: SoilCondition) -> Color {
    match condition {
        SoilCondition::Dry => DRY_RED,
        SoilCondition::Normal => PLANT_GREEN,
        SoilCondition::OverMoist => WATER_BLUE,
    }
}
