//! Reference and output frames.
//!
//! Authoring values (`Location`, `Size`, ...) are expressed in a reference
//! frame, the scroll extent of the map page the markup was written against.
//! The renderer draws into an output canvas of a different size. The ratio
//! between the two is the global scale applied once at the end of layout.
//!
//! Frames are explicit values passed into every resolve call, so several
//! frames can be in use at once.

use serde::Deserialize;
use swgui_common::warning::warn_once;

use crate::box_model::Rect;

/// Default reference frame width (the galaxy map page's scroll extent).
pub const DEFAULT_REFERENCE_WIDTH: f32 = 501.0;
/// Default reference frame height.
pub const DEFAULT_REFERENCE_HEIGHT: f32 = 486.0;
/// Default output canvas width.
pub const DEFAULT_OUTPUT_WIDTH: f32 = 512.0;
/// Default output canvas height.
pub const DEFAULT_OUTPUT_HEIGHT: f32 = 512.0;

/// User-facing frame configuration.
///
/// Every field is optional; missing fields take the defaults above.
///
/// ```
/// use swgui_layout::FrameConfig;
///
/// let config: FrameConfig = serde_json::from_str(r#"{ "outputWidth": 1024 }"#).unwrap();
/// assert_eq!(config.output_width, Some(1024.0));
/// assert_eq!(config.reference_width, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrameConfig {
    /// Width of the authoring coordinate space.
    pub reference_width: Option<f32>,
    /// Height of the authoring coordinate space.
    pub reference_height: Option<f32>,
    /// Width of the output coordinate space.
    pub output_width: Option<f32>,
    /// Height of the output coordinate space.
    pub output_height: Option<f32>,
}

/// Resolved reference/output frame used by every layout call.
///
/// All four dimensions are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    reference_width: f32,
    reference_height: f32,
    output_width: f32,
    output_height: f32,
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self {
            reference_width: DEFAULT_REFERENCE_WIDTH,
            reference_height: DEFAULT_REFERENCE_HEIGHT,
            output_width: DEFAULT_OUTPUT_WIDTH,
            output_height: DEFAULT_OUTPUT_HEIGHT,
        }
    }
}

/// Keep `value` if usable, otherwise warn and use `default`.
fn positive_or(value: Option<f32>, default: f32, field: &str) -> f32 {
    match value {
        None => default,
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            warn_once(
                "layout",
                &format!("{field} must be a positive number (got {v}), using {default}"),
            );
            default
        }
    }
}

impl ReferenceFrame {
    /// Build a frame from explicit dimensions. Non-positive or non-finite
    /// values fall back to the defaults.
    #[must_use]
    pub fn new(
        reference_width: f32,
        reference_height: f32,
        output_width: f32,
        output_height: f32,
    ) -> Self {
        Self::from_config(&FrameConfig {
            reference_width: Some(reference_width),
            reference_height: Some(reference_height),
            output_width: Some(output_width),
            output_height: Some(output_height),
        })
    }

    /// Build a frame from configuration, substituting defaults for missing
    /// or unusable fields.
    #[must_use]
    pub fn from_config(config: &FrameConfig) -> Self {
        let defaults = Self::default();
        Self {
            reference_width: positive_or(
                config.reference_width,
                defaults.reference_width,
                "referenceWidth",
            ),
            reference_height: positive_or(
                config.reference_height,
                defaults.reference_height,
                "referenceHeight",
            ),
            output_width: positive_or(config.output_width, defaults.output_width, "outputWidth"),
            output_height: positive_or(
                config.output_height,
                defaults.output_height,
                "outputHeight",
            ),
        }
    }

    /// Width of the authoring coordinate space.
    #[must_use]
    pub const fn reference_width(&self) -> f32 {
        self.reference_width
    }

    /// Height of the authoring coordinate space.
    #[must_use]
    pub const fn reference_height(&self) -> f32 {
        self.reference_height
    }

    /// Width of the output coordinate space.
    #[must_use]
    pub const fn output_width(&self) -> f32 {
        self.output_width
    }

    /// Height of the output coordinate space.
    #[must_use]
    pub const fn output_height(&self) -> f32 {
        self.output_height
    }

    /// `outputWidth / referenceWidth`.
    #[must_use]
    pub fn scale_x(&self) -> f32 {
        self.output_width / self.reference_width
    }

    /// `outputHeight / referenceHeight`.
    #[must_use]
    pub fn scale_y(&self) -> f32 {
        self.output_height / self.reference_height
    }

    /// The reference frame as a box at the origin. Top-level elements are
    /// laid out against it.
    #[must_use]
    pub const fn reference_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.reference_width, self.reference_height)
    }
}
