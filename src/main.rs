mod emitter;
mod project;
mod source;

use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;

use crate::emitter::{ExhaustionPolicy, JsonLinesSink, ProfileTable, TrackEmitter};
use crate::project::{reprojector_for_wkid, WGS84_WKID};
use crate::source::{GeoJsonSource, TrackSource};

#[derive(Parser)]
#[command(name = "trackcast")]
#[command(about = "Replay polyline tracks as a JSON telemetry stream")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a GeoJSON track file
    Validate { tracks: String },
    /// Emit the telemetry stream for a track file to stdout
    Emit {
        tracks: String,
        /// YAML table of per-identifier altitude/speed overrides
        #[arg(long)]
        profiles: Option<String>,
        /// Spatial reference of the input coordinates (4326 or 3857)
        #[arg(long, default_value_t = WGS84_WKID)]
        wkid: u32,
        /// Stop the whole stream once any single track is exhausted
        #[arg(long)]
        stop_at_first_gap: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { tracks } => validate(&tracks),
        Commands::Emit {
            tracks,
            profiles,
            wkid,
            stop_at_first_gap,
        } => emit(&tracks, profiles.as_deref(), wkid, stop_at_first_gap),
    }
}

fn validate(path: &str) -> ExitCode {
    match GeoJsonSource::new(path).load() {
        Ok(tracks) => {
            println!("Track file is valid ({} tracks)", tracks.len());
            for (i, track) in tracks.iter().enumerate() {
                println!(
                    "  {}: {} ({}), {} points",
                    i + 1,
                    track.id,
                    track.track_type,
                    track.points.len()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error loading tracks: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn emit(path: &str, profiles: Option<&str>, wkid: u32, stop_at_first_gap: bool) -> ExitCode {
    let Some(reprojector) = reprojector_for_wkid(wkid) else {
        eprintln!("Unsupported spatial reference: wkid {}", wkid);
        return ExitCode::FAILURE;
    };

    let tracks = match GeoJsonSource::new(path).load() {
        Ok(tracks) => tracks,
        Err(e) => {
            eprintln!("Error loading tracks: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let profile_table = match profiles {
        Some(p) => match ProfileTable::from_file(p) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("Error loading profiles: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ProfileTable::builtin(),
    };

    let policy = if stop_at_first_gap {
        ExhaustionPolicy::StopAtFirstGap
    } else {
        ExhaustionPolicy::RunToLongest
    };

    let stdout = io::stdout();
    let mut sink = JsonLinesSink::new(stdout.lock());
    let result = TrackEmitter::new(&tracks, reprojector.as_ref(), &profile_table)
        .with_policy(policy)
        .emit_all(&mut sink);

    match result {
        Ok(count) => {
            log::info!("emitted {} records", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error emitting telemetry: {}", e);
            ExitCode::FAILURE
        }
    }
}
