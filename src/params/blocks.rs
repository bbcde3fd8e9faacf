use once_cell::sync::Lazy;
use regex::Regex;

// Blocks are separated by runs of two or more blank lines. `\s` also
// matches the newlines inside the run, so longer runs collapse into a
// single separator match.
static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").expect("block separator regex"));

/// Split a raw `.params` dump into trimmed, non-empty candidate blocks.
///
/// A dump without any separator run yields exactly one block; leading or
/// trailing blank runs yield no empty blocks.
pub fn split_blocks(content: &str) -> impl Iterator<Item = &str> {
    BLOCK_SEPARATOR
        .split(content)
        .map(str::trim)
        .filter(|block| !block.is_empty())
}
