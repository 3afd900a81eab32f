//! JSON element tree loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use swgui_dom::{ElementData, ElementId, ElementTree};

/// One node of the JSON tree description.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonNode {
    /// Element tag, e.g. `Page` or `Button`.
    pub tag: String,
    /// Raw markup attributes.
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    /// Child elements in document order.
    #[serde(default)]
    pub children: Vec<JsonNode>,
}

/// A document is either a single top-level node or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonDocument {
    /// A single top-level element.
    One(JsonNode),
    /// Several top-level elements.
    Many(Vec<JsonNode>),
}

/// Parse a JSON document into an element tree.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or does not describe elements.
pub fn parse_tree(text: &str) -> Result<ElementTree> {
    let document: JsonDocument = serde_json::from_str(text).context("invalid element tree JSON")?;
    let roots = match document {
        JsonDocument::One(node) => vec![node],
        JsonDocument::Many(nodes) => nodes,
    };

    let mut tree = ElementTree::new();
    let mut pending: Vec<(ElementId, JsonNode)> =
        roots.into_iter().map(|node| (ElementId::ROOT, node)).collect();
    // Reverse so the first node is attached first.
    pending.reverse();

    while let Some((parent, node)) = pending.pop() {
        let data = ElementData {
            tag_name: node.tag,
            attrs: node.attrs,
        };
        let id = tree.append_element(parent, data)?;
        pending.extend(node.children.into_iter().rev().map(|child| (id, child)));
    }

    Ok(tree)
}

/// Read and parse a JSON element tree from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_tree(path: &Path) -> Result<ElementTree> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read element tree '{}'", path.display()))?;
    parse_tree(&text).with_context(|| format!("in '{}'", path.display()))
}
