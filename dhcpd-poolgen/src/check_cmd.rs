use anyhow::{bail, Context, Result};
use colored::Colorize;
use dhcpd_poolgen::load_pools;
use pool_block_core::render_pool;

use crate::cli::CheckArgs;

pub fn run_check(args: CheckArgs) -> Result<()> {
    let entries = load_pools(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let mut failed = 0usize;
    for entry in &entries {
        match render_pool(&entry.spec) {
            Ok(_) => {
                if !args.quiet {
                    println!("{}   {}", "ok".green(), entry.name);
                }
            }
            Err(err) => {
                failed += 1;
                println!("{} {}: {}", "FAIL".red(), entry.name, err);
            }
        }
    }

    println!(
        "checked={} ok={} failed={}",
        entries.len(),
        entries.len() - failed,
        failed
    );
    if failed > 0 {
        bail!("check failed: {failed} invalid pools");
    }
    Ok(())
}
