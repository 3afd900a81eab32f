//! Typed layout properties.
//!
//! [`LayoutProps`] is the layout engine's view of one element: the raw
//! attributes of [`ElementData`] run through the scalar parsers, with every
//! absent attribute replaced by its default.

use serde::Serialize;
use swgui_dom::ElementData;

use crate::pack::{AxisModes, PackLocationMode, PackSizeMode, parse_pack_location, parse_pack_size};
use crate::values::{Size, Vec2, parse_location, parse_size};

/// Attribute names read by [`LayoutProps::from_element`].
pub mod attr {
    /// Local offset, `"x,y"`.
    pub const LOCATION: &str = "Location";
    /// Declared size, `"w,h"`.
    pub const SIZE: &str = "Size";
    /// Reserved extent, `"w,h"`.
    pub const SCROLL_EXTENT: &str = "ScrollExtent";
    /// Sizing modes, `"h,v"`.
    pub const PACK_SIZE: &str = "PackSize";
    /// Anchoring modes, `"h,v"`.
    pub const PACK_LOCATION: &str = "PackLocation";
}

/// Layout inputs for a single element, in reference space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LayoutProps {
    /// Local offset added after anchoring.
    pub location: Vec2,
    /// Declared size; may be zero.
    pub size: Size,
    /// Declared reserved extent. `None` means "same as `size`".
    pub scroll_extent: Option<Size>,
    /// Per-axis sizing mode.
    pub pack_size: AxisModes<PackSizeMode>,
    /// Per-axis anchoring mode.
    pub pack_location: AxisModes<PackLocationMode>,
}

impl LayoutProps {
    /// Read layout properties from an element's attributes.
    #[must_use]
    pub fn from_element(element: &ElementData) -> Self {
        Self {
            location: parse_location(element.attr(attr::LOCATION)),
            size: parse_size(element.attr(attr::SIZE)),
            scroll_extent: element
                .attr(attr::SCROLL_EXTENT)
                .map(|text| parse_size(Some(text))),
            pack_size: parse_pack_size(element.attr(attr::PACK_SIZE)),
            pack_location: parse_pack_location(element.attr(attr::PACK_LOCATION)),
        }
    }

    /// Builder-style setter for `location`.
    #[must_use]
    pub const fn with_location(mut self, x: f32, y: f32) -> Self {
        self.location = Vec2::new(x, y);
        self
    }

    /// Builder-style setter for `size`.
    #[must_use]
    pub const fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Builder-style setter for `scroll_extent`.
    #[must_use]
    pub const fn with_scroll_extent(mut self, width: f32, height: f32) -> Self {
        self.scroll_extent = Some(Size::new(width, height));
        self
    }

    /// Builder-style setter for both sizing modes.
    #[must_use]
    pub const fn with_pack_size(mut self, horizontal: PackSizeMode, vertical: PackSizeMode) -> Self {
        self.pack_size = AxisModes {
            horizontal,
            vertical,
        };
        self
    }

    /// Builder-style setter for both anchoring modes.
    #[must_use]
    pub const fn with_pack_location(
        mut self,
        horizontal: PackLocationMode,
        vertical: PackLocationMode,
    ) -> Self {
        self.pack_location = AxisModes {
            horizontal,
            vertical,
        };
        self
    }

    /// The extent the element declares per axis: the scroll extent where it
    /// is present and nonzero, the size otherwise.
    #[must_use]
    pub fn declared_extent(&self) -> Size {
        let reserved = self.scroll_extent.unwrap_or(self.size);
        Size::new(
            if reserved.width == 0.0 {
                self.size.width
            } else {
                reserved.width
            },
            if reserved.height == 0.0 {
                self.size.height
            } else {
                reserved.height
            },
        )
    }

    /// The extent the element reserves for centering: the scroll extent
    /// exactly as declared (zero included), the size when it is absent.
    #[must_use]
    pub fn reserved_extent(&self) -> Size {
        self.scroll_extent.unwrap_or(self.size)
    }
}
