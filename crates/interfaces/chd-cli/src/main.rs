use camino::Utf8PathBuf;
use chd_cli::{commands, parse_system, systems};
use chd_core::SystemProfile;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about = "Convert disc images to CHD with chdman")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported systems and their accepted extensions
    Systems {
        #[arg(long)]
        json: bool,
    },
    /// Convert a single disc image
    Convert {
        input: Utf8PathBuf,
        #[arg(short, long, help = "Output path (defaults to <input>.chd)")]
        output: Option<Utf8PathBuf>,
        #[arg(short, long, value_parser = parse_system, default_value = "ps1")]
        system: SystemProfile,
        #[arg(long, env = "CHDMAN", help = "Explicit path to the chdman binary")]
        chdman: Option<Utf8PathBuf>,
    },
    /// Convert every matching image directly inside a folder
    Batch {
        folder: Utf8PathBuf,
        #[arg(short, long, value_parser = parse_system, default_value = "ps1")]
        system: SystemProfile,
        #[arg(long, env = "CHDMAN", help = "Explicit path to the chdman binary")]
        chdman: Option<Utf8PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let summary = match cli.command {
        Commands::Systems { json } => return systems::handle_list(json),
        Commands::Convert {
            input,
            output,
            system,
            chdman,
        } => {
            let converter = commands::default_converter(chdman);
            commands::cmd_convert(converter, input, output, system).await?
        }
        Commands::Batch {
            folder,
            system,
            chdman,
        } => {
            let converter = commands::default_converter(chdman);
            commands::cmd_batch(converter, folder, system).await?
        }
    };

    if !summary.all_succeeded() {
        anyhow::bail!("{} of {} file(s) failed", summary.failed(), summary.total);
    }
    Ok(())
}
