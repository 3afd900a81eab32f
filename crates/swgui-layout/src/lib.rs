//! Layout resolution for the SWG UI editor.
//!
//! # Scope
//!
//! This crate turns a tree of UI elements, each carrying raw layout
//! attributes, into absolute pixel boxes in the editor's output canvas:
//! - **Scalar Parsers** ([`values`]) - `"x,y"` pairs and two-token mode strings
//! - **Pack Modes** ([`pack`]) - per-axis `PackSize` / `PackLocation` enums
//! - **Reference Frame** ([`frame`]) - authoring and output coordinate spaces
//! - **Layout Properties** ([`props`]) - typed view of an element's attributes
//! - **Resolvers** ([`resolve`]) - pack size, pack location, scroll-extent centering
//! - **Compositor** ([`compositor`]) - top-down tree walk producing [`ResolvedBox`]es
//!
//! Layout never fails: malformed attributes degrade to documented defaults
//! and are reported once through [`swgui_common::warning`].
//!
//! # Not Yet Implemented
//!
//! - Caching of resolved boxes across calls (the engine recomputes on every call)

/// Rectangles in reference and output space.
pub mod box_model;
/// Tree-level layout: resolves every element exactly once.
pub mod compositor;
/// Reference/output frame configuration.
pub mod frame;
/// `PackSize` and `PackLocation` modes.
pub mod pack;
/// Typed layout properties read from element attributes.
pub mod props;
/// Per-element resolvers.
pub mod resolve;
/// Scalar attribute parsers.
pub mod values;

// Re-exports for convenience
pub use box_model::{Rect, ResolvedBox};
pub use compositor::{LayoutTree, resolve, resolve_element, resolve_reference};
pub use frame::{FrameConfig, ReferenceFrame};
pub use pack::{AxisModes, PackLocationMode, PackSizeMode};
pub use props::LayoutProps;
pub use values::{Size, Vec2};
