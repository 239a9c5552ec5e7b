//! Image descriptor classification.
//!
//! Candidate strings arrive as opaque URIs and are parsed once, before any
//! bridge call, into a tagged [`ImageDescriptor`] variant. Classification
//! failures are contract violations (see
//! [`DescriptorError`](crate::utils::DescriptorError)), never candidate
//! misses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::DescriptorError;

/// Scheme prefix naming a bundled asset.
pub const ASSET_PREFIX: &str = "asset://";
/// Scheme prefix for overlay-composited network images.
pub const OVERLAY_PREFIX: &str = "overlay-image://";

const DIRECTION_PARAM: &str = "direction";
const URL_PARAM: &str = "url";

/// Edge on which an overlay is composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayDirection {
    /// Overlay on the start (leading) edge
    Start,
    /// Overlay on the end (trailing) edge
    End,
}

impl OverlayDirection {
    fn parse(value: &str) -> Result<Self, DescriptorError> {
        // Case-sensitive: the wire grammar only admits the lowercase forms.
        match value {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            other => Err(DescriptorError::invalid_direction(other)),
        }
    }
}

impl fmt::Display for OverlayDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// A classified image candidate.
///
/// Any string not carrying the asset or overlay scheme is treated as a
/// direct network URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageDescriptor {
    /// Bundled, locally available image identified by name
    Asset { name: String },
    /// Remotely fetched image
    Network { url: String },
    /// Network image with a directional overlay composited after fetch
    Overlay {
        direction: OverlayDirection,
        url: String,
    },
}

impl ImageDescriptor {
    /// Classifies a raw descriptor string.
    ///
    /// Overlay descriptors require both a `url` and a `direction` query
    /// parameter; parameter order is not significant and duplicates resolve
    /// to the first occurrence.
    pub fn parse(raw: &str) -> Result<Self, DescriptorError> {
        if let Some(name) = raw.strip_prefix(ASSET_PREFIX) {
            return Ok(Self::Asset {
                name: name.to_string(),
            });
        }

        if raw.starts_with(OVERLAY_PREFIX) {
            return Self::parse_overlay(raw);
        }

        Ok(Self::Network {
            url: raw.to_string(),
        })
    }

    fn parse_overlay(raw: &str) -> Result<Self, DescriptorError> {
        let parsed = Url::parse(raw).map_err(|_| DescriptorError::unparsable(raw))?;

        let mut direction = None;
        let mut url = None;
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                // First occurrence wins
                DIRECTION_PARAM if direction.is_none() => direction = Some(value.into_owned()),
                URL_PARAM if url.is_none() => url = Some(value.into_owned()),
                _ => {}
            }
        }

        let url = url.ok_or_else(|| DescriptorError::missing_url(raw))?;
        let direction = direction.ok_or_else(|| DescriptorError::missing_direction(raw))?;

        Ok(Self::Overlay {
            direction: OverlayDirection::parse(&direction)?,
            url,
        })
    }
}

impl FromStr for ImageDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ImageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset { name } => write!(f, "{ASSET_PREFIX}{name}"),
            Self::Network { url } => f.write_str(url),
            Self::Overlay { direction, url } => {
                write!(f, "{OVERLAY_PREFIX}?direction={direction}&url={url}")
            }
        }
    }
}
