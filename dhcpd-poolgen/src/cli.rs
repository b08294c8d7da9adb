use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dhcpd-poolgen")]
#[command(about = "Render dhcpd.conf subnet/pool blocks from a pools file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Render pool blocks to stdout or to one fragment file per pool.
    Render(RenderArgs),
    /// Render all pools and assemble them into one configuration file.
    Assemble(AssembleArgs),
    /// Validate every pool without writing any output.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Pools file (TOML, or JSON with a .json extension).
    pub file: PathBuf,
    /// Render only the named pool.
    #[arg(long)]
    pub pool: Option<String>,
    /// Write one `<priority>_<name>.dhcp` fragment per pool into this
    /// directory instead of printing to stdout.
    #[arg(long)]
    pub fragment_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AssembleArgs {
    /// Pools file (TOML, or JSON with a .json extension).
    pub file: PathBuf,
    /// Output configuration file.
    #[arg(long)]
    pub output: PathBuf,
    /// Overwrite the output file if it already exists.
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Pools file (TOML, or JSON with a .json extension).
    pub file: PathBuf,
    /// Only print failures and the summary line.
    #[arg(short, long)]
    pub quiet: bool,
}
