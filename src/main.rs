use clap::Parser;
use iconsheet::cli::{Cli, Commands};
use iconsheet::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => iconsheet::cli::build::run(args, &printer)?,
        Commands::List(args) => iconsheet::cli::list::run(args, &printer)?,
        Commands::Completions(args) => iconsheet::cli::completions::run(args)?,
    }

    Ok(())
}
