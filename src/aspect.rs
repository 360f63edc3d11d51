//! Aspect lock: rational width:height ratios and region correction.
//!
//! Ratios apply in percentage space, so `16:9` means `width / height == 16 / 9`
//! measured in percent of the container, not in image pixels.
//!
//! Correction is a single pass. The driving axis keeps its size and the other
//! axis is derived from it; if the derived size would run past the far edge
//! it is clamped to the remaining space and the driving axis is recomputed
//! from the clamped value. There is no iteration after that, so when both
//! axes are constrained at once (or the `MIN_SIZE` floor kicks in) the final
//! ratio can be off.
//!
//! # Example
//!
//! ```
//! use zencrop::{AspectRatio, CropRegion};
//!
//! let ratio: AspectRatio = "16:9".parse().unwrap();
//! let r = zencrop::aspect::conform(CropRegion::DEFAULT, ratio);
//! assert_eq!(r, CropRegion::new(10.0, 10.0, 80.0, 45.0));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::region::{CropRegion, EXTENT};

/// A width:height ratio, both components finite and positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

/// Error parsing a `"W:H"` token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseAspectRatioError {
    /// No `:` between the two components.
    #[error("aspect ratio must be written as W:H")]
    MissingSeparator,
    /// A component is not a number.
    #[error("aspect ratio component is not a number")]
    InvalidComponent,
    /// A component is zero, negative, or not finite.
    #[error("aspect ratio components must be positive and finite")]
    NonPositive,
}

/// A named ratio offered by the crop settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectPreset {
    /// Short label.
    pub label: &'static str,
    /// What the ratio is typically used for.
    pub description: &'static str,
    /// `None` = freeform.
    pub ratio: Option<AspectRatio>,
}

impl AspectRatio {
    pub const SQUARE: Self = Self::from_parts(1.0, 1.0);
    pub const STANDARD: Self = Self::from_parts(4.0, 3.0);
    pub const WIDESCREEN: Self = Self::from_parts(16.0, 9.0);
    pub const PHOTO: Self = Self::from_parts(3.0, 2.0);
    pub const STORY: Self = Self::from_parts(9.0, 16.0);
    pub const ULTRAWIDE: Self = Self::from_parts(21.0, 9.0);

    /// Ratios offered by the settings panel, freeform first.
    pub const PRESETS: [AspectPreset; 7] = [
        AspectPreset {
            label: "Free",
            description: "Any size",
            ratio: None,
        },
        AspectPreset {
            label: "Square",
            description: "Instagram post",
            ratio: Some(Self::SQUARE),
        },
        AspectPreset {
            label: "4:3",
            description: "Standard photo",
            ratio: Some(Self::STANDARD),
        },
        AspectPreset {
            label: "16:9",
            description: "Widescreen",
            ratio: Some(Self::WIDESCREEN),
        },
        AspectPreset {
            label: "3:2",
            description: "DSLR photo",
            ratio: Some(Self::PHOTO),
        },
        AspectPreset {
            label: "9:16",
            description: "Story format",
            ratio: Some(Self::STORY),
        },
        AspectPreset {
            label: "21:9",
            description: "Cinematic",
            ratio: Some(Self::ULTRAWIDE),
        },
    ];

    const fn from_parts(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a ratio. Both components must be positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, ParseAspectRatioError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(width) && ok(height) {
            Ok(Self { width, height })
        } else {
            Err(ParseAspectRatioError::NonPositive)
        }
    }

    /// Parse a settings value where `""` and `"free"` mean no lock.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ParseAspectRatioError> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("free") {
            return Ok(None);
        }
        s.parse().map(Some)
    }

    /// Width component.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height component.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// `width / height`.
    pub fn value(&self) -> f64 {
        self.width / self.height
    }

    /// The same ratio in the other orientation (`16:9` ↔ `9:16`).
    pub const fn flipped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Height matching `width`.
    pub fn height_for(&self, width: f64) -> f64 {
        width * self.height / self.width
    }

    /// Width matching `height`.
    pub fn width_for(&self, height: f64) -> f64 {
        height * self.width / self.height
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(':')
            .ok_or(ParseAspectRatioError::MissingSeparator)?;
        let num = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| ParseAspectRatioError::InvalidComponent)
        };
        Self::new(num(w)?, num(h)?)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AspectRatio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AspectRatio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatioVisitor;

        impl serde::de::Visitor<'_> for RatioVisitor {
            type Value = AspectRatio;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an aspect ratio like \"16:9\"")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(RatioVisitor)
    }
}

/// Which dimension keeps its size during correction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

/// Force `region` into `ratio`, keeping the `driving` axis where possible.
///
/// The result is normalized into the region invariants.
pub fn correct(region: CropRegion, driving: Axis, ratio: AspectRatio) -> CropRegion {
    let mut r = region;
    match driving {
        Axis::Width => {
            r.height = ratio.height_for(r.width);
            if r.y + r.height > EXTENT {
                r.height = EXTENT - r.y;
                r.width = ratio.width_for(r.height);
            }
        }
        Axis::Height => {
            r.width = ratio.width_for(r.height);
            if r.x + r.width > EXTENT {
                r.width = EXTENT - r.x;
                r.height = ratio.height_for(r.width);
            }
        }
    }
    r.normalized()
}

/// Apply a newly selected ratio to an existing region.
///
/// A region wider than the target keeps its height and loses width; a region
/// taller than the target keeps its width and loses height.
pub fn conform(region: CropRegion, ratio: AspectRatio) -> CropRegion {
    let region = region.normalized();
    let driving = if region.ratio() > ratio.value() {
        Axis::Height
    } else {
        Axis::Width
    };
    correct(region, driving, ratio)
}
