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
use crate::pixel_format::PixelFormat;
use core::fmt;
use paste::paste;

/// Chroma subsampling family of a pixel format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub enum ColorPack {
    /// Luma only (4:0:0)
    Pack400,
    /// Chroma halved in both dimensions (4:2:0)
    Pack420,
    /// Chroma halved horizontally (4:2:2)
    Pack422,
    /// No chroma subsampling (4:4:4)
    Pack444,
    /// Chroma quartered horizontally (4:1:1)
    Pack411,
    /// The pixel format is not listed in any family
    Unknown,
}

impl fmt::Display for ColorPack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorPack::Pack400 => write!(f, "4:0:0"),
            ColorPack::Pack420 => write!(f, "4:2:0"),
            ColorPack::Pack422 => write!(f, "4:2:2"),
            ColorPack::Pack444 => write!(f, "4:4:4"),
            ColorPack::Pack411 => write!(f, "4:1:1"),
            ColorPack::Unknown => write!(f, "unknown"),
        }
    }
}

type FormatSet = &'static [PixelFormat];

macro_rules! color_pack_table {
    ($($pack:literal => [$($format:ident),* $(,)?]),* $(,)?) => {
        paste! {
            $(
                const [<COLOR_PACK_ $pack>]: FormatSet = &[$(PixelFormat::$format),*];
            )*

            /// Color pack tables, scanned in declaration order.
            static COLOR_PACKS: &[(ColorPack, FormatSet)] = &[
                $((ColorPack::[<Pack $pack>], [<COLOR_PACK_ $pack>])),*
            ];
        }
    };
}

macro_rules! bit_depth_table {
    ($($depth:literal => [$($format:ident),* $(,)?]),* $(,)?) => {
        paste! {
            $(
                const [<BIT_DEPTH_ $depth>]: FormatSet = &[$(PixelFormat::$format),*];
            )*

            /// Bit depth tables, scanned in declaration order.
            static BIT_DEPTHS: &[(u32, FormatSet)] = &[
                $(($depth, [<BIT_DEPTH_ $depth>])),*
            ];
        }
    };
}

color_pack_table! {
    400 => [Y8, Y16S, Y16U, P400],
    420 => [Imc1, Imc2, Imc3, Imc4, Nv12, Nv21, Yv12, I420, Iyuv, P010, P016],
    422 => [Yuy2, Yuyv, Yvyu, Uyvy, Vyuy, P208, P422H, P422V, Y210, Y216],
    444 => [
        A8R8G8B8,
        X8R8G8B8,
        A8B8G8R8,
        X8B8G8R8,
        A16B16G16R16,
        A16R16G16B16,
        R5G6B5,
        R8G8B8,
        Rgbp,
        Bgrp,
        Y416,
        Y410,
        Ayuv,
        Auyv,
        P444,
        R10G10B10A2,
        B10G10R10A2,
        A16B16G16R16F,
        A16R16G16B16F,
    ],
    411 => [P411],
}

bit_depth_table! {
    8 => [
        Imc1,
        Imc2,
        Imc3,
        Imc4,
        Nv12,
        Nv21,
        Yv12,
        I420,
        Iyuv,
        Yuy2,
        Yuyv,
        Yvyu,
        Uyvy,
        Vyuy,
        P208,
        P422H,
        P422V,
        R5G6B5,
        R8G8B8,
        A8R8G8B8,
        X8R8G8B8,
        A8B8G8R8,
        X8B8G8R8,
        P444,
        Ayuv,
        Auyv,
        Rgbp,
        Bgrp,
    ],
    10 => [P010, R10G10B10A2, B10G10R10A2, Y210, Y410, P210],
    16 => [
        A16B16G16R16,
        A16R16G16B16,
        A16B16G16R16F,
        A16R16G16B16F,
        P016,
        Y416,
        Y216,
        P216,
    ],
}

/// Returns the tag of the first table that lists `format`.
fn find_first<T: Copy>(tables: &[(T, FormatSet)], format: PixelFormat) -> Option<T> {
    tables
        .iter()
        .find(|(_, formats)| formats.contains(&format))
        .map(|&(tag, _)| tag)
}

/// Returns the chroma subsampling family of a pixel format.
///
/// Families are tested in the order 4:0:0, 4:2:0, 4:2:2, 4:4:4, 4:1:1 and the
/// first one listing `format` is returned.
///
/// Formats not listed in any family yield [`ColorPack::Unknown`] and a warning
/// is logged.
///
/// # Examples
/// ```
/// use vp_color_utils::{get_color_pack, ColorPack, PixelFormat};
///
/// assert_eq!(get_color_pack(PixelFormat::Nv12), ColorPack::Pack420);
/// assert_eq!(get_color_pack(PixelFormat::Buffer), ColorPack::Unknown);
/// ```
pub fn get_color_pack(format: PixelFormat) -> ColorPack {
    find_first(COLOR_PACKS, format).unwrap_or_else(|| unknown_color_pack(&format))
}

/// Returns the number of bits per channel of a pixel format.
///
/// Depths are tested in the order 8, 10, 16 and the first one listing `format`
/// is returned.
///
/// Formats not listed in any depth yield `0` and a warning is logged.
///
/// # Examples
/// ```
/// use vp_color_utils::{get_bit_depth, PixelFormat};
///
/// assert_eq!(get_bit_depth(PixelFormat::P010), 10);
/// assert_eq!(get_bit_depth(PixelFormat::Y8), 0);
/// ```
pub fn get_bit_depth(format: PixelFormat) -> u32 {
    find_first(BIT_DEPTHS, format).unwrap_or_else(|| unknown_bit_depth(&format))
}

/// Color pack of a format no family lists. Also used by the C API for
/// integers that are not a [`PixelFormat`].
pub(crate) fn unknown_color_pack(format: &dyn fmt::Display) -> ColorPack {
    tracing::warn!(%format, "input format color pack unknown");
    ColorPack::Unknown
}

/// Bit depth of a format no depth lists.
pub(crate) fn unknown_bit_depth(format: &dyn fmt::Display) -> u32 {
    tracing::warn!(%format, "unknown input format for bit depth");
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_scanned_in_declaration_order() {
        let packs: Vec<ColorPack> = COLOR_PACKS.iter().map(|&(pack, _)| pack).collect();
        assert_eq!(
            packs,
            [
                ColorPack::Pack400,
                ColorPack::Pack420,
                ColorPack::Pack422,
                ColorPack::Pack444,
                ColorPack::Pack411,
            ]
        );

        let depths: Vec<u32> = BIT_DEPTHS.iter().map(|&(depth, _)| depth).collect();
        assert_eq!(depths, [8, 10, 16]);
    }

    #[test]
    fn first_table_wins_on_overlap() {
        const OVERLAPPING: &[(u32, FormatSet)] = &[
            (1, &[PixelFormat::Nv12, PixelFormat::P010]),
            (2, &[PixelFormat::P010]),
        ];

        assert_eq!(find_first(OVERLAPPING, PixelFormat::P010), Some(1));
        assert_eq!(find_first(OVERLAPPING, PixelFormat::Nv12), Some(1));
        assert_eq!(find_first(OVERLAPPING, PixelFormat::Y8), None);
    }

    #[test]
    fn tables_are_disjoint() {
        for format in PixelFormat::ALL {
            let packs = COLOR_PACKS
                .iter()
                .filter(|(_, formats)| formats.contains(&format))
                .count();
            let depths = BIT_DEPTHS
                .iter()
                .filter(|(_, formats)| formats.contains(&format))
                .count();

            assert!(packs <= 1, "{format} is listed in {packs} color packs");
            assert!(depths <= 1, "{format} is listed in {depths} bit depths");
        }
    }
}
