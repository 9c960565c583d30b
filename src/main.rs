use clap::{Parser, Subcommand};
use file_moves::move_detection::TracedDataSource;
use file_moves::{load_snapshot, write_snapshot, MoveDetector, Snapshot, SnapshotDataSource};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "file-moves")]
#[command(about = "Detects files moved between two snapshots of a project by line similarity")]
struct Cli {
	/// Enable verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Write the line hash snapshot of a directory as JSON
	Snapshot {
		/// Directory to snapshot
		dir: PathBuf,

		/// Output file (stdout when omitted)
		#[arg(short, long)]
		output: Option<PathBuf>,
	},

	/// Report files moved between a previous and a current snapshot
	Detect {
		/// Previous snapshot: JSON file or directory
		previous: PathBuf,

		/// Current snapshot: JSON file or directory
		current: PathBuf,

		/// Print moves as a JSON object
		#[arg(long)]
		json: bool,

		/// Log detection statistics
		#[arg(long)]
		stats: bool,
	},
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Initialize tracing
	let level = if cli.verbose {
		Level::DEBUG
	} else {
		Level::INFO
	};
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(io::stderr)
		.init();

	match cli.command {
		Command::Snapshot { dir, output } => {
			let snapshot = Snapshot::from_directory(&dir)?;
			info!("Snapshot of {:?}: {} files", dir, snapshot.len());
			match output {
				Some(path) => write_snapshot(&snapshot, File::create(path)?)?,
				None => write_snapshot(&snapshot, io::stdout().lock())?,
			}
		}
		Command::Detect { previous, current, json, stats } => {
			let previous = load_snapshot(&previous)?;
			let current = load_snapshot(&current)?;
			let new_keys: Vec<String> = current.keys().cloned().collect();
			let source = TracedDataSource::new(SnapshotDataSource::new(previous, current));

			let (moves, detection_stats) =
				MoveDetector::lcs().detect_with_stats(&new_keys, &source)?;
			if stats {
				info!("Detection statistics: {:?}", detection_stats);
			}

			if json {
				println!("{}", serde_json::to_string_pretty(&moves)?);
			} else {
				let mut pairs: Vec<_> = moves.iter().collect();
				pairs.sort();
				for (new_key, old_key) in pairs {
					println!("{new_key} <- {old_key}");
				}
			}
		}
	}

	Ok(())
}
