//! `spinball` command-line viewer.
//!
//! Configuration is loaded from `config.ron` and can be overridden via flags.
//! Run `spinball solve --tilt 1:30 --gyro 20` to print an orientation, or
//! `spinball click --x 180 --y 90` to interpret a HUD click.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use glam::DVec2;
use spinball_app::{PitchSession, PlatformDirs, PlatformError};
use spinball_config::{CliArgs, Config, ConfigError};
use spinball_hud::ClickOutcome;
use spinball_mollweide::GeoPoint;
use spinball_orient::TiltClock;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "spinball", about = "Baseball spin-axis and seam orientation viewer")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    #[command(subcommand)]
    command: Command,
}

/// Pitch fields that override the configured pitch.
#[derive(clap::Args, Debug, Clone, Default)]
struct PitchArgs {
    /// Clock-face tilt, e.g. `1:30`.
    #[arg(long)]
    tilt: Option<TiltClock>,

    /// Gyro angle in degrees.
    #[arg(long)]
    gyro: Option<f64>,

    /// Surface contact latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Surface contact longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the spin axis and alignment rotation for a pitch.
    Solve(PitchArgs),
    /// Project a surface point onto the HUD map.
    Project {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Interpret a click at client pixel coordinates.
    Click {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Print ball rotations for a run of animation frames.
    Animate {
        #[command(flatten)]
        pitch: PitchArgs,
        /// Number of frames to print.
        #[arg(long, default_value_t = 10)]
        frames: u32,
        /// Frames per second.
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
    },
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("surface point {0} is out of range")]
    Surface(GeoPoint),
    #[error("fps must be positive, got {0}")]
    Fps(f64),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("spinball: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let dirs = match cli.args.config.clone() {
        Some(dir) => PlatformDirs::from_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(&cli.args);
    config.validate()?;

    spinball_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!(config_dir = %dirs.config_dir.display(), "spinball starting");

    let mut session = PitchSession::from_config(&config);

    match cli.command {
        Command::Solve(pitch) => {
            apply_pitch(&mut session, &pitch)?;
            print_solution(&session);
        }
        Command::Project { lat, lon } => {
            if !session.set_surface(GeoPoint::new(lat, lon)) {
                return Err(AppError::Surface(GeoPoint::new(lat, lon)));
            }
            let marker = session.marker();
            println!("surface: {}", marker.geo);
            println!("map:     ({:.6}, {:.6})", marker.map.x, marker.map.y);
            println!(
                "pixel:   ({:.2}, {:.2})",
                marker.pixel.x, marker.pixel.y
            );
        }
        Command::Click { x, y } => match session.click_hud(DVec2::new(x, y)) {
            ClickOutcome::Accepted(geo) => {
                println!("surface: {geo} (lat {:.4}, lon {:.4})", geo.lat, geo.lon);
                print_solution(&session);
            }
            ClickOutcome::Ignored(reason) => {
                debug!(?reason, "click ignored");
                println!("ignored");
            }
        },
        Command::Animate { pitch, frames, fps } => {
            if !(fps.is_finite() && fps > 0.0) {
                return Err(AppError::Fps(fps));
            }
            apply_pitch(&mut session, &pitch)?;
            for i in 0..frames {
                let t = f64::from(i) / fps;
                let frame = session.frame(t);
                let q = frame.ball_rotation;
                println!(
                    "{i:>4} t={t:.4}s quat=({:.6}, {:.6}, {:.6}, {:.6})",
                    q.x, q.y, q.z, q.w
                );
            }
        }
    }

    Ok(())
}

fn apply_pitch(session: &mut PitchSession, pitch: &PitchArgs) -> Result<(), AppError> {
    if let Some(tilt) = pitch.tilt {
        session.set_tilt(tilt);
    }
    if let Some(gyro) = pitch.gyro {
        session.set_gyro(gyro);
    }
    if pitch.lat.is_some() || pitch.lon.is_some() {
        let current = session.surface();
        let geo = GeoPoint::new(
            pitch.lat.unwrap_or(current.lat),
            pitch.lon.unwrap_or(current.lon),
        );
        if !session.set_surface(geo) {
            return Err(AppError::Surface(geo));
        }
    }
    Ok(())
}

fn print_solution(session: &PitchSession) {
    let d = session.descriptor();
    let o = session.orientation();
    let (axis, angle) = o.alignment.to_axis_angle();
    let (tail, head) = session.frame(0.0).arrow;

    println!(
        "pitch:     tilt {} gyro {:.1}\u{00B0} surface {}",
        d.tilt,
        d.gyro_degrees,
        session.surface()
    );
    println!(
        "spin axis: ({:.6}, {:.6}, {:.6})",
        o.spin_axis.x, o.spin_axis.y, o.spin_axis.z
    );
    println!(
        "surface:   ({:.6}, {:.6}, {:.6})",
        o.surface.x, o.surface.y, o.surface.z
    );
    println!(
        "alignment: {:.4}\u{00B0} about ({:.6}, {:.6}, {:.6})",
        angle.to_degrees(),
        axis.x,
        axis.y,
        axis.z
    );
    println!(
        "arrow:     ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
        tail.x, tail.y, tail.z, head.x, head.y, head.z
    );
}
