/// fig3d terminal demo - animated pyramid, octahedron and scutoid
///
/// Controls:
///   - P / Space: Pause
///   - O: Toggle orthographic / perspective projection
///   - Q / ESC: Quit
use anyhow::Context;
use clap::Parser;
use fig3d_core::{ColorPalette, FigureContext, ProjectionConfig, Scene};
use fig3d_terminal::{Cli, FrameLoop};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::info!("starting with {:?}", cli);

    let mut ctx = FigureContext::new(ColorPalette::default(), cli.animation_config(), Duration::ZERO);
    let scene = Scene::build(&mut ctx, &cli.placements(), ProjectionConfig::default())
        .context("failed to build figures")?;

    let mut app = FrameLoop::new(scene, cli.fps)
        .context("failed to query terminal size")?
        .with_frame_limit(cli.frames);
    app.run().context("terminal frame loop failed")?;

    Ok(())
}
