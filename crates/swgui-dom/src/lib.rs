//! Element tree for the SWG UI editor core.
//!
//! This crate provides an arena-based tree of UI elements (pages, windows,
//! buttons, labels) as produced by the editor's markup loader.
//!
//! # Design
//!
//! The tree uses arena allocation with [`ElementId`] indices for all
//! relationships. Parents are stored as indices, never as owning pointers,
//! and [`ElementTree::append_child`] refuses any edge that would introduce a
//! cycle, so the parent relation is always a tree rooted at
//! [`ElementId::ROOT`].

use std::collections::HashMap;

use thiserror::Error;

/// Map of attribute names to raw attribute values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl ElementId {
    /// The root node is always at index 0. It stands for the authoring
    /// reference frame and carries no layout attributes of its own.
    pub const ROOT: Self = Self(0);
}

/// Errors raised when linking nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// One of the ids does not name a node in this tree.
    #[error("no node with id {0:?}")]
    UnknownNode(ElementId),
    /// The child already has a parent.
    #[error("node {0:?} is already attached")]
    AlreadyAttached(ElementId),
    /// The edge would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// The prospective parent.
        parent: ElementId,
        /// The node being attached.
        child: ElementId,
    },
}

/// A node in the element tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node is.
    pub node_type: NodeType,
    /// The enclosing node, `None` for the root and for detached nodes.
    pub parent: Option<ElementId>,
    /// Children in document order.
    pub children: Vec<ElementId>,
}

/// The kind of a node.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The root of the tree (the reference frame).
    Root,
    /// A UI element with attributes.
    Element(ElementData),
}

/// Element-specific data.
///
/// Attribute values are kept as the raw strings found in the markup
/// (`Location="10,10"`, `PackSize="a,f"`); interpreting them is the layout
/// engine's job.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// The element's tag, e.g. `Page`, `Button`, `Text`.
    pub tag_name: String,
    /// An element has an associated attribute list.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with the given tag and no attributes.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Look up an attribute by name, ignoring ASCII case.
    ///
    /// Markup written by hand mixes `ScrollExtent` and `scrollextent`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str).or_else(|| {
            self.attrs
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Returns the element's `Name` attribute if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attr("Name")
    }
}

/// Arena-based element tree with O(1) node access and traversal.
///
/// All nodes live in a contiguous vector and refer to each other by index:
/// - O(1) access to any node by [`ElementId`]
/// - O(1) parent traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone)]
pub struct ElementTree {
    /// All nodes in the tree, indexed by `ElementId`.
    /// The root node is always at index 0 (`ElementId::ROOT`).
    nodes: Vec<Node>,
}

impl ElementTree {
    /// Create a new tree containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> ElementId {
        ElementId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it always has at least the root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new element and return its ID.
    /// The element is not yet attached to the tree.
    pub fn alloc(&mut self, data: ElementData) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            node_type: NodeType::Element(data),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails if either id is unknown, if `child` is the root or already has a
    /// parent, or if `parent` is `child` or one of its descendants.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), TreeError> {
        if self.get(parent).is_none() {
            return Err(TreeError::UnknownNode(parent));
        }
        let Some(child_node) = self.get(child) else {
            return Err(TreeError::UnknownNode(child));
        };
        if child == ElementId::ROOT || child_node.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(TreeError::Cycle { parent, child });
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Allocate an element and append it under `parent` in one step.
    ///
    /// # Errors
    ///
    /// Fails if `parent` is not a node of this tree.
    pub fn append_element(
        &mut self,
        parent: ElementId,
        data: ElementData,
    ) -> Result<ElementId, TreeError> {
        if self.get(parent).is_none() {
            return Err(TreeError::UnknownNode(parent));
        }
        let id = self.alloc(data);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Check if `descendant` is a descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: ElementId, ancestor: ElementId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: ElementId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Number of edges between `id` and the root.
    #[must_use]
    pub fn depth(&self, id: ElementId) -> usize {
        self.ancestors(id).count()
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: ElementId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Root => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: ElementId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id.0).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Root => None,
        })
    }

    /// Iterate over every node reachable from the root in document order
    /// (pre-order, parents before children).
    #[must_use]
    pub fn iter_all(&self) -> PreorderIterator<'_> {
        PreorderIterator {
            tree: self,
            stack: vec![ElementId::ROOT],
        }
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a ElementTree,
    current: Option<ElementId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over the attached nodes of a tree.
pub struct PreorderIterator<'a> {
    tree: &'a ElementTree,
    stack: Vec<ElementId>,
}

impl Iterator for PreorderIterator<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
