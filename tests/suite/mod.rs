mod config;
mod render_file;
mod sheets;

use turnstile_render::Block;

/// Presented output with trailing whitespace removed from every line.
pub fn shown(block: &Block) -> String {
    turnstile::present(block)
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
