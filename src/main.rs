mod render;
mod sim;
mod ui;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Soil moisture watering animation
#[derive(Parser, Debug)]
#[command(name = "soilsim")]
struct Args {
    /// Soil moisture percentage; prompts on stdin when omitted
    #[arg(long)]
    moisture: Option<f32>,
}

fn conf() -> Conf {
    Conf {
        window_title: "soil watering sim".to_string(),
        window_width: 640,
        window_height: 480,
        high_dpi: true,
        ..Default::default()
    }
}

fn read_moisture() -> Result<f32> {
    print!("Enter current soil moisture (in percentage): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading soil moisture")?;
    line.trim()
        .parse()
        .context("soil moisture must be a number")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soilsim=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let moisture = match args.moisture {
        Some(m) => m,
        None => read_moisture()?,
    };

    // prompt happens before the window exists, hence no #[macroquad::main]
    macroquad::Window::from_config(conf(), run(moisture));
    Ok(())
}

async fn run(moisture: f32) {
    let mut app = ui::App::new(moisture);
    info!(
        moisture,
        phase = ?app.scene.day_phase,
        condition = ?app.scene.condition,
        "scene ready"
    );

    loop {
        if !app.controls.paused {
            let dt = get_frame_time() * app.controls.sim_speed;
            app.scene.step(dt);
        }

        render::draw_scene(&app.scene);
        ui::draw_ui(&mut app);

        if app.wants_exit() {
            break;
        }

        next_frame().await;
    }
}
