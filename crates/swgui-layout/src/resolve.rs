//! Per-element resolvers.
//!
//! Each function handles one stage of positioning an element inside its
//! parent's reference-space box. They are pure and total: no input makes
//! them fail, and resolved dimensions are never negative.

use crate::box_model::Rect;
use crate::frame::ReferenceFrame;
use crate::pack::{PackLocationMode, PackSizeMode};
use crate::props::LayoutProps;
use crate::values::{Size, Vec2};

/// Resolve one axis of `PackSize`.
///
/// `declared` is the element's declared extent on this axis, `parent` the
/// parent's dimension and `reference` the reference frame's dimension.
#[must_use]
pub fn resolve_axis_size(mode: PackSizeMode, declared: f32, parent: f32, reference: f32) -> f32 {
    let resolved = match mode {
        PackSizeMode::Absolute => declared,
        // The declared value is a share of the reference frame, not of the parent.
        PackSizeMode::Percent => parent * (declared / reference),
        PackSizeMode::Fill => parent,
    };
    resolved.max(0.0)
}

/// Pack-Size Resolver: the element's width and height inside `parent`.
#[must_use]
pub fn pack_size(props: &LayoutProps, parent: &Rect, frame: &ReferenceFrame) -> Size {
    let declared = props.declared_extent();
    Size::new(
        resolve_axis_size(
            props.pack_size.horizontal,
            declared.width,
            parent.width,
            frame.reference_width(),
        ),
        resolve_axis_size(
            props.pack_size.vertical,
            declared.height,
            parent.height,
            frame.reference_height(),
        ),
    )
}

/// Resolve one axis of `PackLocation`: the base offset of a box of size
/// `resolved` inside a parent of size `parent`.
#[must_use]
pub fn resolve_axis_offset(mode: PackLocationMode, resolved: f32, parent: f32) -> f32 {
    match mode {
        PackLocationMode::Start => 0.0,
        PackLocationMode::Center => (parent - resolved) / 2.0,
        PackLocationMode::End => parent - resolved,
    }
}

/// Pack-Location Resolver: the anchor offset relative to the parent's origin.
#[must_use]
pub fn pack_location(props: &LayoutProps, size: Size, parent: &Rect) -> Vec2 {
    Vec2::new(
        resolve_axis_offset(props.pack_location.horizontal, size.width, parent.width),
        resolve_axis_offset(props.pack_location.vertical, size.height, parent.height),
    )
}

/// Scroll-Extent Centering: the correction that centers the resolved box
/// inside the element's reserved extent, `(reserved - resolved) / 2` per axis.
///
/// Negative when the box is larger than its reservation.
#[must_use]
pub fn scroll_extent_offset(props: &LayoutProps, size: Size) -> Vec2 {
    let reserved = props.reserved_extent();
    Vec2::new(
        (reserved.width - size.width) / 2.0,
        (reserved.height - size.height) / 2.0,
    )
}
