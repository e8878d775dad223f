use backdrop::cli::{Cli, Commands};
use backdrop::discovery::Workspace;
use backdrop::logger::SessionLog;
use backdrop::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Completions(args) => return Ok(backdrop::cli::completions::run(args)?),
        command => command,
    };

    let ws = Workspace::open(&cli.root)?;
    let printer = match ws.log_dir() {
        Some(dir) if !cli.no_log => Printer::new().with_log(SessionLog::open(&dir)?),
        _ => Printer::new(),
    };

    let result = backdrop::cli::run(command, &ws, &printer);

    // The log is flushed on failure too, with the error as its last entry.
    if let (Err(e), Some(log)) = (&result, printer.log()) {
        log.log(&format!("Error: {}", e));
    }
    printer.flush_log()?;

    Ok(result?)
}
