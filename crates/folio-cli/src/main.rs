mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, contact::ContactSubcommand, entry::EntrySubcommand,
    profile::ProfileSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Portfolio content engine — manage site content, the inbox, and the API server",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root (default: auto-detect from .folio/ or .git/)
    #[arg(long, global = true, env = "FOLIO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a folio workspace in the current project
    Init {
        /// Site owner's display name
        #[arg(long, default_value = "")]
        owner: String,
    },

    /// Launch the API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3737")]
        port: u16,

        /// Don't open the browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Summarize what the landing page renders right now
    Show,

    /// Manage content entries (projects, skills, certifications, ...)
    Entry {
        #[command(subcommand)]
        subcommand: EntrySubcommand,
    },

    /// Manage the owner profile
    Profile {
        #[command(subcommand)]
        subcommand: ProfileSubcommand,
    },

    /// Read the contact inbox
    Contact {
        #[command(subcommand)]
        subcommand: ContactSubcommand,
    },

    /// Inspect or adjust the site configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let root = root::resolve_root(cli.root.as_deref());

    match cli.command {
        Commands::Init { owner } => cmd::init(&root, &owner, cli.json),
        Commands::Serve { port, no_open } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(folio_server::serve(root, port, !no_open))
        }
        Commands::Show => cmd::show::run(&root, cli.json),
        Commands::Entry { subcommand } => cmd::entry::run(&root, subcommand, cli.json),
        Commands::Profile { subcommand } => cmd::profile::run(&root, subcommand, cli.json),
        Commands::Contact { subcommand } => cmd::contact::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    }
}
