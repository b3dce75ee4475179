// cli.rs - Command-line interface configuration
use std::time::Duration;

use clap::Parser;
use fig3d_core::{AnimationConfig, FigureKind, Placement};

#[derive(Parser, Debug, Clone)]
#[command(name = "fig3d-terminal")]
#[command(about = "Animated procedural figures in the terminal", long_about = None)]
pub struct Cli {
    /// Figures to show, comma separated (pyramid, octahedron, scutoid, scutoid-caps)
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_figure,
        default_value = "pyramid,octahedron,scutoid"
    )]
    pub figures: Vec<FigureKind>,

    /// Target frames per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Milliseconds per full rotation
    #[arg(long = "period-ms", default_value_t = 5000)]
    pub period_ms: u64,

    /// Vertical distance a bouncing figure moves each frame
    #[arg(long = "bounce-speed", default_value_t = fig3d_core::config::BOUNCE_SPEED)]
    pub bounce_speed: f32,

    /// Quit after this many frames
    #[arg(long)]
    pub frames: Option<u64>,
}

impl Cli {
    pub fn animation_config(&self) -> AnimationConfig {
        AnimationConfig {
            period: Duration::from_millis(self.period_ms),
            bounce_speed: self.bounce_speed,
            ..AnimationConfig::default()
        }
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.figures.iter().copied().map(Placement::demo).collect()
    }
}

fn parse_figure(name: &str) -> Result<FigureKind, String> {
    FigureKind::from_name(name.trim()).ok_or_else(|| {
        let known: Vec<_> = FigureKind::ALL.iter().map(|kind| kind.name()).collect();
        format!("unknown figure '{}', expected one of: {}", name, known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fig3d-terminal"]).unwrap();
        assert_eq!(
            cli.figures,
            vec![FigureKind::Pyramid, FigureKind::Octahedron, FigureKind::Scutoid]
        );
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.frames, None);
        assert_eq!(cli.animation_config(), AnimationConfig::default());
    }

    #[test]
    fn test_figure_list() {
        let cli =
            Cli::try_parse_from(["fig3d-terminal", "--figures", "scutoid-caps,octahedron"]).unwrap();
        let placements = cli.placements();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0], Placement::demo(FigureKind::ScutoidCaps));
        assert_eq!(placements[1].kind, FigureKind::Octahedron);
    }

    #[test]
    fn test_unknown_figure_rejected() {
        assert!(Cli::try_parse_from(["fig3d-terminal", "--figures", "cube"]).is_err());
        assert!(Cli::try_parse_from(["fig3d-terminal", "--fps", "0"]).is_err());
    }

    #[test]
    fn test_animation_overrides() {
        let cli = Cli::try_parse_from([
            "fig3d-terminal",
            "--period-ms",
            "1000",
            "--bounce-speed",
            "0.05",
            "--frames",
            "10",
        ])
        .unwrap();
        let config = cli.animation_config();
        assert_eq!(config.period, Duration::from_millis(1000));
        assert_eq!(config.bounce_speed, 0.05);
        assert_eq!(cli.frames, Some(10));
    }
}
