mod commands;
mod http;
mod terminal;

use commands::{CommandLine, Commands, scan, serve};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    match commands.command {
        Commands::Scan(args) => scan::scan(args).await,
        Commands::Serve(args) => serve::serve(args.to_config()?).await,
    }
}
