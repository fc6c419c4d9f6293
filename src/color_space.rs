// Copyright 2019 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

// Permission is hereby granted, free of charge, to any person obtaining a copy of this
// software and associated documentation files (the "Software"), to deal in the Software
// without restriction, including without limitation the rights to use, copy, modify,
// merge, publish, distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED,
// INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT
// HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// An enumeration of color spaces.
///
/// It includes:
/// * Color model (RGB or YCbCr)
/// * Range (headroom / footroom)
/// * Colorimetry
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub enum ColorSpace {
    /// Unspecified color space
    Any,
    /// R'G'B', full range (0-255)
    Srgb,
    /// R'G'B', studio range (16-235)
    Strgb,
    /// YCbCr, ITU-R Recommendation BT.601 (standard video system)
    Bt601,
    /// YCbCr, ITU-R Recommendation BT.709 (CSC systems)
    Bt709,
    /// YCbCr, BT.601 (full range)
    Bt601FullRange,
    /// YCbCr, BT.709 (full range)
    Bt709FullRange,
    /// Extended-gamut YCbCr, IEC 61966-2-4 with BT.601 colorimetry
    XvYcc601,
    /// Extended-gamut YCbCr, IEC 61966-2-4 with BT.709 colorimetry
    XvYcc709,
    /// Luma only, BT.601
    Bt601Gray,
    /// Luma only, BT.601 (full range)
    Bt601GrayFullRange,
    /// YCbCr, ITU-R Recommendation BT.2020
    Bt2020,
    /// YCbCr, BT.2020 (full range)
    Bt2020FullRange,
    /// R'G'B' with BT.2020 primaries, full range
    Bt2020Rgb,
    /// R'G'B' with BT.2020 primaries, studio range
    Bt2020Strgb,
}

/// Number of variants of [`ColorSpace`].
pub const COLOR_SPACE_COUNT: usize = ColorSpace::Bt2020Strgb as usize + 1;

/// How the three color channels of a sample are read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorModel {
    /// Channels are R, G, B
    Rgb,
    /// Channels are Y, U (Cb), V (Cr)
    Yuv,
}

/// Inclusive per-channel bounds a converted sample is clamped to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutputRange {
    /// How the clamped channels are named
    pub model: ColorModel,
    /// Lower bound of each channel
    pub low: [i32; 3],
    /// Upper bound of each channel
    pub high: [i32; 3],
}

impl OutputRange {
    const fn uniform(model: ColorModel, low: i32, high: i32) -> Self {
        OutputRange {
            model,
            low: [low; 3],
            high: [high; 3],
        }
    }

    /// Clamp the three channels independently and narrow them to bytes.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp(&self, channels: [i32; 3]) -> [u8; 3] {
        // Bounds never exceed 0..=255, so the narrowing is lossless
        let mut out = [0u8; 3];
        for (i, value) in channels.iter().enumerate() {
            out[i] = (*value).max(self.low[i]).min(self.high[i]) as u8;
        }

        out
    }
}

const FULL_RANGE_RGB: OutputRange = OutputRange::uniform(ColorModel::Rgb, 0, 255);
const STUDIO_RANGE_RGB: OutputRange = OutputRange::uniform(ColorModel::Rgb, 16, 235);
const STUDIO_RANGE_YUV: OutputRange = OutputRange {
    model: ColorModel::Yuv,
    low: [16, 16, 16],
    high: [235, 240, 240],
};
const FULL_RANGE_YUV: OutputRange = OutputRange::uniform(ColorModel::Yuv, 0, 255);

impl ColorSpace {
    /// All color spaces, in declaration order.
    pub const ALL: [ColorSpace; COLOR_SPACE_COUNT] = [
        ColorSpace::Any,
        ColorSpace::Srgb,
        ColorSpace::Strgb,
        ColorSpace::Bt601,
        ColorSpace::Bt709,
        ColorSpace::Bt601FullRange,
        ColorSpace::Bt709FullRange,
        ColorSpace::XvYcc601,
        ColorSpace::XvYcc709,
        ColorSpace::Bt601Gray,
        ColorSpace::Bt601GrayFullRange,
        ColorSpace::Bt2020,
        ColorSpace::Bt2020FullRange,
        ColorSpace::Bt2020Rgb,
        ColorSpace::Bt2020Strgb,
    ];

    /// Returns true if samples in this color space are R'G'B' triplets.
    pub const fn is_rgb(self) -> bool {
        matches!(
            self,
            ColorSpace::Srgb | ColorSpace::Strgb | ColorSpace::Bt2020Rgb | ColorSpace::Bt2020Strgb
        )
    }

    /// Returns the color model samples in this color space are read with.
    pub const fn model(self) -> ColorModel {
        if self.is_rgb() {
            ColorModel::Rgb
        } else {
            ColorModel::Yuv
        }
    }

    /// Legal output range when converting into this color space.
    ///
    /// color space                                  | channels | c0     | c1, c2
    /// ---------------------------------------------|----------|--------|-------
    /// `Srgb`                                       | R, G, B  | 0-255  | 0-255
    /// `Strgb`                                      | R, G, B  | 16-235 | 16-235
    /// `Bt601`, `Bt709`                             | Y, U, V  | 16-235 | 16-240
    /// `XvYcc601`, `XvYcc709`, `Bt601FullRange`, `Bt709FullRange` | Y, U, V | 0-255 | 0-255
    ///
    /// Any other color space is not a supported conversion target and yields `None`.
    pub const fn output_range(self) -> Option<OutputRange> {
        match self {
            ColorSpace::Srgb => Some(FULL_RANGE_RGB),
            ColorSpace::Strgb => Some(STUDIO_RANGE_RGB),
            ColorSpace::Bt601 | ColorSpace::Bt709 => Some(STUDIO_RANGE_YUV),
            ColorSpace::XvYcc601
            | ColorSpace::XvYcc709
            | ColorSpace::Bt601FullRange
            | ColorSpace::Bt709FullRange => Some(FULL_RANGE_YUV),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ColorSpace::Any => write!(f, "any"),
            ColorSpace::Srgb => write!(f, "srgb"),
            ColorSpace::Strgb => write!(f, "strgb"),
            ColorSpace::Bt601 => write!(f, "bt-601"),
            ColorSpace::Bt709 => write!(f, "bt-709"),
            ColorSpace::Bt601FullRange => write!(f, "bt-601-fr"),
            ColorSpace::Bt709FullRange => write!(f, "bt-709-fr"),
            ColorSpace::XvYcc601 => write!(f, "xvycc-601"),
            ColorSpace::XvYcc709 => write!(f, "xvycc-709"),
            ColorSpace::Bt601Gray => write!(f, "bt-601-gray"),
            ColorSpace::Bt601GrayFullRange => write!(f, "bt-601-gray-fr"),
            ColorSpace::Bt2020 => write!(f, "bt-2020"),
            ColorSpace::Bt2020FullRange => write!(f, "bt-2020-fr"),
            ColorSpace::Bt2020Rgb => write!(f, "bt-2020-rgb"),
            ColorSpace::Bt2020Strgb => write!(f, "bt-2020-strgb"),
        }
    }
}

impl TryFrom<i32> for ColorSpace {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| ColorSpace::ALL.get(index).copied())
            .ok_or(())
    }
}
