//! Headless driver for the checkers core
//!
//! Replays a list of clicks against the grid pick oracle and prints the
//! resulting board and move history.

use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use checkers3d::core::settings_persistence::{save_settings, settings_path};
use checkers3d::core::{CorePlugin, GameSettings};
use checkers3d::game::events::PointerClick;
use checkers3d::game::resources::{GameBoard, MoveHistory, PickSlot};
use checkers3d::game::CheckersPlugin;
use checkers3d::rendering::picking::install_grid_oracle;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Frames to wait for a single pick before giving up
const MAX_SETTLE_FRAMES: u32 = 1_000;

/// Checkers core - replay clicks against a headless board
#[derive(Parser, Debug)]
#[command(name = "checkers3d")]
#[command(about = "Replay clicks against a headless 3D-click checkers board", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the default settings to the settings path and exit
    #[arg(long)]
    write_default_settings: bool,

    /// Click at pixel X,Y; repeat for a sequence of clicks
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_click)]
    clicks: Vec<(u32, u32)>,

    /// Size of one board cell in pixels
    #[arg(long, default_value = "64")]
    cell_px: u32,
}

fn parse_click(value: &str) -> Result<(u32, u32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {value:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {value:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {value:?}: {e}"))?;
    Ok((x, y))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let path = cli.settings.clone().unwrap_or_else(settings_path);

    if cli.write_default_settings {
        save_settings(&path, &GameSettings::default())
            .with_context(|| format!("writing default settings to {}", path.display()))?;
        println!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(CorePlugin::with_settings_path(path))
        .add_plugins(CheckersPlugin);
    install_grid_oracle(&mut app, cli.cell_px);

    // First frame draws the pick buffer
    app.update();

    for (x, y) in cli.clicks {
        app.world_mut().write_message(PointerClick { x, y });
        settle(&mut app).with_context(|| format!("click at ({x}, {y})"))?;
    }

    let board = app.world().resource::<GameBoard>();
    println!("{}", **board);

    let history = app.world().resource::<MoveHistory>();
    if history.moves.is_empty() {
        println!("No moves played");
    }
    for (n, record) in history.moves.iter().enumerate() {
        let capture = record
            .mv
            .captured
            .map(|cell| format!(" x{cell:?}"))
            .unwrap_or_default();
        println!("{:>3}. {:?} {:?} -> {:?}{}", n + 1, record.side, record.mv.from, record.mv.to, capture);
    }

    info!("[GAME] Replayed {} moves", history.moves.len());
    Ok(())
}

/// Run frames until the outstanding pick has been resolved
fn settle(app: &mut App) -> Result<()> {
    app.update();
    for frame in 0..MAX_SETTLE_FRAMES {
        if !app.world().resource::<PickSlot>().is_busy() {
            debug!("[PICK] Settled after {} extra frames", frame);
            return Ok(());
        }
        std::thread::sleep(Duration::from_millis(1));
        app.update();
    }
    bail!("pick did not resolve within {MAX_SETTLE_FRAMES} frames")
}
