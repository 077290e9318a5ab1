use crate::commands::{init_db, list_postings, upsert_posting, UpsertPostingArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use internship_portal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Portal",
    about = "Run and administer the internship application backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Create the database tables if they do not exist yet
    InitDb,
    /// Inspect or edit internship postings directly in the database
    Postings {
        #[command(subcommand)]
        command: PostingsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PostingsCommand {
    /// Print every posting as JSON
    List,
    /// Create a posting or overwrite its slot count
    Upsert(UpsertPostingArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::InitDb => init_db().await,
        Command::Postings {
            command: PostingsCommand::List,
        } => list_postings().await,
        Command::Postings {
            command: PostingsCommand::Upsert(args),
        } => upsert_posting(args).await,
    }
}
