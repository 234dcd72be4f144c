use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use svn_version::config;
use svn_version::resolver::VersionResolver;
use svn_version::svn::SvnClient;
use svn_version::ui;
use svn_version::version::SemverOrder;

#[derive(Parser)]
#[command(
    name = "svn-version",
    version,
    about = "Resolve the version identity of a Subversion working copy"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short = 'C', long, default_value = ".", help = "Working directory")]
    dir: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the project root url
    Url,
    /// Print the version id of the working directory
    Current,
    /// Print the version id of another directory
    VersionOf { dir: PathBuf },
    /// Print the known tags and branches in version order
    Versions,
    /// Print the absolute url of a project path
    Abs { path: String },
    /// Print the svn command diffing two project paths
    Diff {
        left: String,
        right: String,
        #[arg(long, help = "Full diff instead of a summary")]
        verbose: bool,
    },
    /// Print the highest revision in a working copy and the file carrying it
    LastChange { dir: Option<PathBuf> },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let resolver = VersionResolver::new(SvnClient::new(), SemverOrder, config, args.dir);

    match args.command {
        Commands::Url => println!("{}", resolver.project_url()?),
        Commands::Current => match resolver.current()? {
            Some(current) => {
                if let Some(warning) = &current.warning {
                    ui::display_warning(warning);
                }
                println!("{}", current.id);
            }
            None => ui::display_status("No version information available"),
        },
        Commands::VersionOf { dir } => match resolver.version_of(&dir)? {
            Some(id) => println!("{}", id),
            None => ui::display_status(&format!(
                "No version information available for {}",
                dir.display()
            )),
        },
        Commands::Versions => ui::display_versions(&resolver.versions()?),
        Commands::Abs { path } => println!("{}", resolver.abs(&path)?),
        Commands::Diff {
            left,
            right,
            verbose,
        } => println!("{}", resolver.diff(&left, &right, verbose)?),
        Commands::LastChange { dir } => {
            let dir = dir.unwrap_or_else(|| resolver.cwd().to_path_buf());
            let result = resolver.last_change(&dir)?;
            println!(
                "{} {}",
                result.max_revision,
                result.file.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}
