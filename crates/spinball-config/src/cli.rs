//! Command-line overrides shared by the spinball binaries.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Global flags. Values override settings loaded from `config.ron`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// HUD width in pixels.
    #[arg(long, global = true)]
    pub hud_width: Option<f64>,

    /// HUD height in pixels.
    #[arg(long, global = true)]
    pub hud_height: Option<f64>,

    /// Newton steps for the Mollweide auxiliary angle.
    #[arg(long, global = true)]
    pub newton_steps: Option<u32>,

    /// Spin rate in revolutions per minute.
    #[arg(long, global = true)]
    pub rpm: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.hud_width {
            self.hud.width = w;
        }
        if let Some(h) = args.hud_height {
            self.hud.height = h;
        }
        if let Some(steps) = args.newton_steps {
            self.projection.newton_steps = steps;
        }
        if let Some(rpm) = args.rpm {
            self.ball.spin_rpm = rpm;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
