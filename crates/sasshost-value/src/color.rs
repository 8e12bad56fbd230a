use strum::{Display, EnumString};

use crate::{ValueError, error::InvalidAlphaSnafu, fuzzy_equals};

/// The closed set of color spaces the protocol can carry.
///
/// The string forms are the lowercase names used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
pub enum ColorSpace {
  Rgb,
  Srgb,
  SrgbLinear,
  DisplayP3,
  A98Rgb,
  ProphotoRgb,
  Rec2020,
  Hsl,
  Hwb,
  Lab,
  Oklab,
  Lch,
  Oklch,
  Xyz,
  XyzD50,
  XyzD65,
}

/// A Sass color: three channels plus alpha, interpreted in a color space.
///
/// Channels are stored exactly as given. `rgb` channels run 0-255, every
/// other space uses its natural ranges. A NaN channel is "missing" in the
/// CSS Color 4 sense; two missing channels compare equal.
#[derive(Debug, Clone)]
pub struct SassColor {
  space: ColorSpace,
  channels: [f64; 3],
  alpha: f64,
}

impl SassColor {
  /// Creates a color in the given space.
  ///
  /// The alpha channel must lie between zero and one (or be NaN for a
  /// missing alpha).
  pub fn new(
    space: ColorSpace,
    channel1: f64,
    channel2: f64,
    channel3: f64,
    alpha: f64,
  ) -> Result<Self, ValueError> {
    if !alpha.is_nan() && !(0.0..=1.0).contains(&alpha) {
      return InvalidAlphaSnafu { alpha }.fail();
    }
    Ok(Self {
      space,
      channels: [channel1, channel2, channel3],
      alpha,
    })
  }

  /// Creates an opaque `rgb` color.
  pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
    // Alpha 1.0 always passes validation.
    Self {
      space: ColorSpace::Rgb,
      channels: [red, green, blue],
      alpha: 1.0,
    }
  }

  pub fn space(&self) -> ColorSpace {
    self.space
  }

  pub fn channels(&self) -> [f64; 3] {
    self.channels
  }

  pub fn alpha(&self) -> f64 {
    self.alpha
  }

  /// Whether the channel at `index` (0-2) or the alpha (3) is missing.
  pub fn is_channel_missing(&self, index: usize) -> bool {
    match index {
      0..=2 => self.channels[index].is_nan(),
      _ => self.alpha.is_nan(),
    }
  }
}

impl PartialEq for SassColor {
  /// Colors compare fuzzily per channel within the same space. No color
  /// space conversion is attempted; that is the compiler's business.
  fn eq(&self, other: &Self) -> bool {
    self.space == other.space
      && fuzzy_equals(self.channels[0], other.channels[0])
      && fuzzy_equals(self.channels[1], other.channels[1])
      && fuzzy_equals(self.channels[2], other.channels[2])
      && fuzzy_equals(self.alpha, other.alpha)
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use rstest::rstest;

  use super::*;

  /* ---------------- space names ---------------- */

  #[rstest]
  #[case(ColorSpace::Rgb, "rgb")]
  #[case(ColorSpace::SrgbLinear, "srgb-linear")]
  #[case(ColorSpace::DisplayP3, "display-p3")]
  #[case(ColorSpace::A98Rgb, "a98-rgb")]
  #[case(ColorSpace::ProphotoRgb, "prophoto-rgb")]
  #[case(ColorSpace::Rec2020, "rec2020")]
  #[case(ColorSpace::Oklch, "oklch")]
  #[case(ColorSpace::XyzD50, "xyz-d50")]
  #[case(ColorSpace::XyzD65, "xyz-d65")]
  fn space_names_round_trip(#[case] space: ColorSpace, #[case] name: &str) {
    assert_eq!(space.to_string(), name);
    assert_eq!(ColorSpace::from_str(name).unwrap(), space);
  }

  #[test]
  fn unknown_space_name_fails() {
    assert!(ColorSpace::from_str("cmyk").is_err());
  }

  /* ---------------- construction ---------------- */

  #[test]
  fn alpha_out_of_range_is_rejected() {
    let err = SassColor::new(ColorSpace::Rgb, 0.0, 0.0, 0.0, -0.1).unwrap_err();
    assert_eq!(err.to_string(), "Alpha channel -0.1 must be between 0 and 1");
    assert!(SassColor::new(ColorSpace::Rgb, 0.0, 0.0, 0.0, 1.1).is_err());
    assert!(SassColor::new(ColorSpace::Rgb, 0.0, 0.0, 0.0, 0.5).is_ok());
  }

  #[test]
  fn nan_alpha_is_missing_not_invalid() {
    let c = SassColor::new(ColorSpace::Hsl, 120.0, 50.0, 50.0, f64::NAN).unwrap();
    assert!(c.is_channel_missing(3));
    assert!(!c.is_channel_missing(0));
  }

  /* ---------------- equality ---------------- */

  #[test]
  fn missing_channels_compare_equal() {
    let a = SassColor::new(ColorSpace::Lab, f64::NAN, 1.0, 2.0, 1.0).unwrap();
    let b = SassColor::new(ColorSpace::Lab, f64::NAN, 1.0, 2.0, 1.0).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn spaces_do_not_cross_compare() {
    let rgb = SassColor::rgb(255.0, 0.0, 0.0);
    let srgb = SassColor::new(ColorSpace::Srgb, 1.0, 0.0, 0.0, 1.0).unwrap();
    assert_ne!(rgb, srgb);
  }
}
