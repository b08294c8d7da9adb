use std::fs;

use anyhow::{bail, Context, Result};
use dhcpd_poolgen::{fragment_name, load_pools, render_entries};

use crate::cli::RenderArgs;

pub fn run_render(args: RenderArgs) -> Result<()> {
    let mut entries = load_pools(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    if let Some(name) = &args.pool {
        entries.retain(|entry| &entry.name == name);
        if entries.is_empty() {
            bail!("pool `{name}` not found in {}", args.file.display());
        }
    }

    let rendered = render_entries(&entries)?;

    let Some(dir) = &args.fragment_dir else {
        let blocks: Vec<&str> = rendered.iter().map(|block| block.text.as_str()).collect();
        println!("{}", blocks.join("\n\n"));
        return Ok(());
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create fragment dir {}", dir.display()))?;
    for block in &rendered {
        let path = dir.join(fragment_name(block.priority, &block.name));
        fs::write(&path, format!("{}\n", block.text))
            .with_context(|| format!("failed to write fragment {}", path.display()))?;
    }
    Ok(())
}
