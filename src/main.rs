use clap::Parser;
use miette::Result;
use pxgrid::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Html(args) => pxgrid::cli::html::run(args)?,
        Commands::Raster(args) => pxgrid::cli::raster::run(args)?,
        Commands::Completions(args) => pxgrid::cli::completions::run(args)?,
    }

    Ok(())
}
