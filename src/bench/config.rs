/*!
 * Benchmark Configuration
 * Compiled-in shape with startup overrides from the environment
 */

use crate::core::errors::{BenchError, BenchResult};
use crate::core::limits::{
    ENV_CHILDREN, ENV_DEPTH, ENV_JSON, MAX_SMALL_BLOCK_SIZE, MAX_TREE_DEPTH,
};
use crate::core::types::{NodeId, TreeShape};
use crate::memory::aligned_item_size;

/// Settings read once when the driver starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub shape: TreeShape,
    /// Print the report as JSON instead of a table
    pub json: bool,
}

impl BenchConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> BenchResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, falling back to compiled-in values
    pub fn from_lookup<F>(lookup: F) -> BenchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut shape = TreeShape::DEFAULT;
        if let Some(value) = lookup(ENV_CHILDREN) {
            shape.children = parse_usize(ENV_CHILDREN, &value)?;
        }
        if let Some(value) = lookup(ENV_DEPTH) {
            shape.depth = parse_usize(ENV_DEPTH, &value)?;
        }
        validate(shape)?;

        let json = lookup(ENV_JSON)
            .map(|v| v == "1" || v == "true")
            .unwrap_or(false);

        Ok(Self { shape, json })
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            shape: TreeShape::DEFAULT,
            json: false,
        }
    }
}

fn parse_usize(key: &str, value: &str) -> BenchResult<usize> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| BenchError::invalid_config(key, value, e.to_string()))
}

/// Reject shapes the region or the id counter cannot serve
pub fn validate(shape: TreeShape) -> BenchResult<()> {
    let child_list_bytes = shape
        .children
        .checked_mul(aligned_item_size::<&()>())
        .unwrap_or(usize::MAX);
    if child_list_bytes > MAX_SMALL_BLOCK_SIZE {
        return Err(BenchError::invalid_config(
            ENV_CHILDREN,
            shape.children.to_string(),
            format!("child list needs {child_list_bytes} bytes, region blocks are at most {MAX_SMALL_BLOCK_SIZE}"),
        ));
    }

    if shape.depth > MAX_TREE_DEPTH {
        return Err(BenchError::invalid_config(
            ENV_DEPTH,
            shape.depth.to_string(),
            format!("depth is limited to {MAX_TREE_DEPTH} levels"),
        ));
    }

    match shape.node_count() {
        Some(count) if count <= u64::from(NodeId::MAX) => Ok(()),
        _ => Err(BenchError::invalid_config(
            ENV_DEPTH,
            shape.depth.to_string(),
            format!("{shape} has more nodes than ids available"),
        )),
    }
}
