use std::{io, path::PathBuf};

use bvh_motion_core::CHANNEL_GROUPS;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod prompt;
mod session;

use prompt::Prompter;
use session::NewOptions;

fn main() -> bvh_motion_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match cli.command {
        Commands::New {
            output,
            frames,
            config,
            values,
            force,
        } => {
            tracing::info!(?output, "generating new BVH file");
            let options = NewOptions {
                output,
                frames,
                config,
                values,
                force,
            };
            session::run_new(&mut prompter, &options)
        }
        Commands::Edit { file, edits } => {
            tracing::info!(?file, "editing BVH file");
            session::run_edit(&mut prompter, &file, edits.as_deref())
        }
        Commands::Groups => {
            for (number, group) in CHANNEL_GROUPS.iter().enumerate() {
                let (first, last) = group.display_range();
                prompter.say(format_args!(
                    "{:>2}) {:<16} channels {first}-{last}",
                    number + 1,
                    group.name
                ))?;
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate and edit 96-channel BVH motion files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a new file using the built-in skeleton.
    New {
        /// Output path. `.bvh` is appended when missing.
        output: PathBuf,
        /// Number of frames. Prompted for when omitted.
        #[arg(short, long)]
        frames: Option<usize>,
        /// JSON file overriding frame time and root position.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// JSON array with one entry per frame, each holding 14 rotation
        /// triples in channel group order. Skips the value prompts.
        #[arg(long)]
        values: Option<PathBuf>,
        /// Overwrite an existing file without asking.
        #[arg(long)]
        force: bool,
    },
    /// Change channel group values in an existing file.
    Edit {
        /// File to modify in place.
        file: PathBuf,
        /// JSON array of `{ "frame", "group", "values" }` edits. Runs the
        /// interactive menu when omitted.
        #[arg(short, long)]
        edits: Option<PathBuf>,
    },
    /// List the editable channel groups.
    Groups,
}
