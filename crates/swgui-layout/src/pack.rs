//! `PackSize` and `PackLocation` modes.
//!
//! Each axis of an element carries one sizing mode and one anchoring mode,
//! written in markup as short tokens. The token set is closed: anything
//! unrecognized degrades to [`PackSizeMode::Absolute`] or
//! [`PackLocationMode::Start`] instead of failing, so the editor stays usable
//! with malformed authoring data.
//!
//! | Token | Meaning |
//! |---|---|
//! | `a` | [`PackSizeMode::Absolute`] |
//! | `p` | [`PackSizeMode::Percent`] |
//! | `f` | [`PackSizeMode::Fill`] |
//! | `nfn` | [`PackLocationMode::Start`] |
//! | `cpc` | [`PackLocationMode::Center`] |
//! | `nfp`, `pfp`, `pfn` | [`PackLocationMode::End`] |

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString};
use swgui_common::warning::warn_once;

use crate::values::parse_mode_pair;

/// How an element's size along one axis is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum PackSizeMode {
    /// Use the declared extent as-is.
    #[default]
    #[strum(to_string = "a")]
    Absolute,
    /// Scale the parent's dimension by the declared extent's share of the
    /// reference frame.
    #[strum(to_string = "p")]
    Percent,
    /// Take the parent's dimension exactly.
    #[strum(to_string = "f")]
    Fill,
}

/// Where an element is anchored inside its parent along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum PackLocationMode {
    /// Flush with the near edge.
    #[default]
    #[strum(to_string = "nfn")]
    Start,
    /// Centered within the parent.
    #[strum(to_string = "cpc")]
    Center,
    /// Flush with the far edge.
    #[strum(to_string = "nfp", serialize = "pfp", serialize = "pfn")]
    End,
}

/// A pair of per-axis modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AxisModes<T> {
    /// Mode along the x axis.
    pub horizontal: T,
    /// Mode along the y axis.
    pub vertical: T,
}

impl<T: Copy> AxisModes<T> {
    /// Use the same mode on both axes.
    #[must_use]
    pub const fn both(mode: T) -> Self {
        Self {
            horizontal: mode,
            vertical: mode,
        }
    }
}

/// Parse one token, falling back to the mode's default on anything unknown.
fn parse_token<T>(token: &str, attribute: &str) -> T
where
    T: FromStr + Default,
{
    token.trim().parse().unwrap_or_else(|_| {
        warn_once(
            "layout",
            &format!("unknown {attribute} token '{token}', using default"),
        );
        T::default()
    })
}

/// Parse a `PackSize` attribute such as `"a,f"`. `None` means `a,a`.
#[must_use]
pub fn parse_pack_size(text: Option<&str>) -> AxisModes<PackSizeMode> {
    let default = PackSizeMode::default().to_string();
    let (h, v) = parse_mode_pair(text, &default);
    AxisModes {
        horizontal: parse_token(h, "PackSize"),
        vertical: parse_token(v, "PackSize"),
    }
}

/// Parse a `PackLocation` attribute such as `"cpc,pfp"`. `None` means
/// `nfn,nfn`.
#[must_use]
pub fn parse_pack_location(text: Option<&str>) -> AxisModes<PackLocationMode> {
    let default = PackLocationMode::default().to_string();
    let (h, v) = parse_mode_pair(text, &default);
    AxisModes {
        horizontal: parse_token(h, "PackLocation"),
        vertical: parse_token(v, "PackLocation"),
    }
}
