use std::fs;

use anyhow::{bail, Context, Result};
use dhcpd_poolgen::{assemble, load_pools, render_entries};

use crate::cli::AssembleArgs;

pub fn run_assemble(args: AssembleArgs) -> Result<()> {
    let entries = load_pools(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    if entries.is_empty() {
        bail!("no pools defined in {}", args.file.display());
    }

    if args.output.exists() && !args.force {
        bail!(
            "output file {} already exists; pass --force to overwrite",
            args.output.display()
        );
    }

    let rendered = render_entries(&entries)?;
    let conf = assemble(&rendered);
    fs::write(&args.output, conf)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
