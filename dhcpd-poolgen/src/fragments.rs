use pool_block_core::{render_pool_text, RenderError};
use thiserror::Error;

use crate::config::PoolEntry;

/// A rendered pool block together with the identity it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPool {
    pub name: String,
    pub priority: u32,
    pub text: String,
}

/// A render failure attributed to the pool it came from.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("pool `{pool}`: {source}")]
pub struct PoolRenderError {
    pub pool: String,
    pub source: RenderError,
}

/// Fragment file name for one pool: `<priority>_<name>.dhcp`.
pub fn fragment_name(priority: u32, name: &str) -> String {
    format!("{priority}_{name}.dhcp")
}

/// Render every entry, in (priority, name) order, failing on the first bad
/// pool.
pub fn render_entries(entries: &[PoolEntry]) -> Result<Vec<RenderedPool>, PoolRenderError> {
    let mut ordered: Vec<&PoolEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

    let mut rendered = Vec::with_capacity(ordered.len());
    for entry in ordered {
        let text = render_pool_text(&entry.spec).map_err(|source| PoolRenderError {
            pool: entry.name.clone(),
            source,
        })?;
        rendered.push(RenderedPool {
            name: entry.name.clone(),
            priority: entry.priority,
            text,
        });
    }
    Ok(rendered)
}

/// Join rendered blocks into one configuration artifact, one blank line
/// between blocks and a trailing newline.
pub fn assemble(blocks: &[RenderedPool]) -> String {
    let mut out = blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
