use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gridsnake::game::{BoundaryPolicy, GameConfig};
use gridsnake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Grid-based snake with a deterministic simulation core")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// What happens at the edge of the grid
    #[arg(long, default_value = "walled")]
    boundary: Boundary,

    /// Simulation speed in ticks per second
    #[arg(long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..))]
    tick_rate: u32,

    /// Score awarded per food eaten
    #[arg(long, default_value = "10")]
    reward: u32,

    /// Seed for food placement (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Boundary {
    /// Hitting the edge ends the game
    Walled,
    /// The grid wraps around like a torus
    Wrap,
}

impl From<Boundary> for BoundaryPolicy {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Walled => BoundaryPolicy::Walled,
            Boundary::Wrap => BoundaryPolicy::Wrap,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet by default so log lines don't fight the TUI; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config =
        GameConfig::new(cli.width as usize, cli.height as usize).with_boundary(cli.boundary.into());
    config.tick_rate_hz = cli.tick_rate;
    config.food_reward = cli.reward;
    config.seed = cli.seed;

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_are_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["gridsnake", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["gridsnake", "--height", "0"]).is_err());
        assert!(Cli::try_parse_from(["gridsnake", "--tick-rate", "0"]).is_err());
    }

    #[test]
    fn test_defaults_parse() {
        let cli = Cli::try_parse_from(["gridsnake"]).unwrap();
        assert_eq!(cli.width, 20);
        assert_eq!(cli.height, 20);
        assert_eq!(cli.tick_rate, 8);
        assert!(matches!(cli.boundary, Boundary::Walled));
    }

    #[test]
    fn test_wrap_boundary_parses() {
        let cli = Cli::try_parse_from(["gridsnake", "--boundary", "wrap", "--seed", "7"]).unwrap();
        assert!(matches!(cli.boundary, Boundary::Wrap));
        assert_eq!(cli.seed, Some(7));
    }
}
