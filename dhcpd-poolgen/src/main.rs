use anyhow::Result;
use clap::Parser;

mod assemble_cmd;
mod check_cmd;
mod cli;
mod render_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render_cmd::run_render(args),
        Command::Assemble(args) => assemble_cmd::run_assemble(args),
        Command::Check(args) => check_cmd::run_check(args),
    }
}
