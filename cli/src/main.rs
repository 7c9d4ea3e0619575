mod commands;
mod terminal;

use commands::{CommandLine, report};
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    print::header("daily traffic report");

    let dry_run: bool = commands.dry_run;
    report::report(commands.into_config(), dry_run).await
}
