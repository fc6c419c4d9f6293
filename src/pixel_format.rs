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
use core::fmt;

/// An enumeration of surface pixel formats.
///
/// Only the layout is described here. Chroma subsampling and bit depth are
/// looked up through [`get_color_pack`] and [`get_bit_depth`].
///
/// [`get_color_pack`]: ./fn.get_color_pack.html
/// [`get_bit_depth`]: ./fn.get_bit_depth.html
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub enum PixelFormat {
    /// Luma only, 8 bits per pixel
    Y8,
    /// Luma only, signed 16 bits per pixel
    Y16S,
    /// Luma only, unsigned 16 bits per pixel
    Y16U,
    /// Planar luma only (4:0:0)
    P400,
    /// Planar 4:2:0, V and U planes padded to the luma pitch
    Imc1,
    /// Planar 4:2:0, V and U interleaved line by line in the padding of the luma pitch
    Imc2,
    /// Planar 4:2:0, U and V planes padded to the luma pitch
    Imc3,
    /// Planar 4:2:0, U and V interleaved line by line in the padding of the luma pitch
    Imc4,
    /// YUV with one luma plane Y then one plane with U and V values interleaved.
    /// Chroma planes are subsampled in both the horizontal and vertical dimensions by a factor of 2.
    ///
    /// 12 bits per pixel
    Nv12,
    /// As [`Nv12`](#variant.Nv12) with V and U swapped
    Nv21,
    /// Planar 4:2:0 with V plane before U plane
    Yv12,
    /// YUV with one luma plane Y then U chroma plane and last the V chroma plane.
    /// The two chroma planes are sub-sampled in both the horizontal and vertical dimensions by a factor of 2.
    ///
    /// 12 bits per pixel
    I420,
    /// Same layout as [`I420`](#variant.I420)
    Iyuv,
    /// As [`Nv12`](#variant.Nv12) with 10 significant bits stored in 16-bit words
    P010,
    /// As [`Nv12`](#variant.Nv12) with 16-bit words
    P016,
    /// Packed 4:2:2, Y0 U Y1 V
    Yuy2,
    /// Same layout as [`Yuy2`](#variant.Yuy2)
    Yuyv,
    /// Packed 4:2:2, Y0 V Y1 U
    Yvyu,
    /// Packed 4:2:2, U Y0 V Y1
    Uyvy,
    /// Packed 4:2:2, V Y0 U Y1
    Vyuy,
    /// Semi-planar 4:2:2
    P208,
    /// Planar 4:2:2, chroma sub-sampled horizontally
    P422H,
    /// Planar 4:2:2, chroma sub-sampled vertically
    P422V,
    /// Packed 4:2:2 with 10 significant bits per component
    Y210,
    /// Packed 4:2:2 with 16 bits per component
    Y216,
    /// Packed 4:4:4 with 10 bits per component and 2 bits of alpha
    Y410,
    /// Packed 4:4:4 with 16 bits per component
    Y416,
    /// Packed 4:4:4, V U Y A in memory
    Ayuv,
    /// Packed 4:4:4, A U Y V in memory
    Auyv,
    /// Planar 4:4:4
    P444,
    /// Planar 4:1:1
    P411,
    /// Semi-planar 4:2:2 with 10 significant bits per component
    P210,
    /// Semi-planar 4:2:2 with 16 bits per component
    P216,
    /// 32 bits per pixel, alpha first
    A8R8G8B8,
    /// 32 bits per pixel, unused padding byte first
    X8R8G8B8,
    /// Reverse RGB with alpha, 32 bits per pixel
    A8B8G8R8,
    /// Reverse RGB with padding, 32 bits per pixel
    X8B8G8R8,
    /// Reverse RGB with alpha, 64 bits per pixel
    A16B16G16R16,
    /// RGB with alpha, 64 bits per pixel
    A16R16G16B16,
    /// 16 bits per pixel, 5-6-5 packing
    R5G6B5,
    /// RGB packed into 24 bits without padding
    R8G8B8,
    /// Planar RGB
    Rgbp,
    /// Planar reverse RGB
    Bgrp,
    /// 10 bits per color, 2 bits of alpha
    R10G10B10A2,
    /// Reverse 10 bits per color, 2 bits of alpha
    B10G10R10A2,
    /// Reverse RGB with alpha, half float per component
    A16B16G16R16F,
    /// RGB with alpha, half float per component
    A16R16G16B16F,
    /// Linear buffer with no pixel layout
    Buffer,
    /// Placeholder for surfaces whose format is not set
    Invalid,
}

/// Number of variants of [`PixelFormat`].
pub const PIXEL_FORMAT_COUNT: usize = PixelFormat::Invalid as usize + 1;

impl PixelFormat {
    /// All pixel formats, in declaration order.
    pub const ALL: [PixelFormat; PIXEL_FORMAT_COUNT] = [
        PixelFormat::Y8,
        PixelFormat::Y16S,
        PixelFormat::Y16U,
        PixelFormat::P400,
        PixelFormat::Imc1,
        PixelFormat::Imc2,
        PixelFormat::Imc3,
        PixelFormat::Imc4,
        PixelFormat::Nv12,
        PixelFormat::Nv21,
        PixelFormat::Yv12,
        PixelFormat::I420,
        PixelFormat::Iyuv,
        PixelFormat::P010,
        PixelFormat::P016,
        PixelFormat::Yuy2,
        PixelFormat::Yuyv,
        PixelFormat::Yvyu,
        PixelFormat::Uyvy,
        PixelFormat::Vyuy,
        PixelFormat::P208,
        PixelFormat::P422H,
        PixelFormat::P422V,
        PixelFormat::Y210,
        PixelFormat::Y216,
        PixelFormat::Y410,
        PixelFormat::Y416,
        PixelFormat::Ayuv,
        PixelFormat::Auyv,
        PixelFormat::P444,
        PixelFormat::P411,
        PixelFormat::P210,
        PixelFormat::P216,
        PixelFormat::A8R8G8B8,
        PixelFormat::X8R8G8B8,
        PixelFormat::A8B8G8R8,
        PixelFormat::X8B8G8R8,
        PixelFormat::A16B16G16R16,
        PixelFormat::A16R16G16B16,
        PixelFormat::R5G6B5,
        PixelFormat::R8G8B8,
        PixelFormat::Rgbp,
        PixelFormat::Bgrp,
        PixelFormat::R10G10B10A2,
        PixelFormat::B10G10R10A2,
        PixelFormat::A16B16G16R16F,
        PixelFormat::A16R16G16B16F,
        PixelFormat::Buffer,
        PixelFormat::Invalid,
    ];
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PixelFormat::Y8 => "y8",
            PixelFormat::Y16S => "y16s",
            PixelFormat::Y16U => "y16u",
            PixelFormat::P400 => "400p",
            PixelFormat::Imc1 => "imc1",
            PixelFormat::Imc2 => "imc2",
            PixelFormat::Imc3 => "imc3",
            PixelFormat::Imc4 => "imc4",
            PixelFormat::Nv12 => "nv12",
            PixelFormat::Nv21 => "nv21",
            PixelFormat::Yv12 => "yv12",
            PixelFormat::I420 => "i420",
            PixelFormat::Iyuv => "iyuv",
            PixelFormat::P010 => "p010",
            PixelFormat::P016 => "p016",
            PixelFormat::Yuy2 => "yuy2",
            PixelFormat::Yuyv => "yuyv",
            PixelFormat::Yvyu => "yvyu",
            PixelFormat::Uyvy => "uyvy",
            PixelFormat::Vyuy => "vyuy",
            PixelFormat::P208 => "p208",
            PixelFormat::P422H => "422h",
            PixelFormat::P422V => "422v",
            PixelFormat::Y210 => "y210",
            PixelFormat::Y216 => "y216",
            PixelFormat::Y410 => "y410",
            PixelFormat::Y416 => "y416",
            PixelFormat::Ayuv => "ayuv",
            PixelFormat::Auyv => "auyv",
            PixelFormat::P444 => "444p",
            PixelFormat::P411 => "411p",
            PixelFormat::P210 => "p210",
            PixelFormat::P216 => "p216",
            PixelFormat::A8R8G8B8 => "a8r8g8b8",
            PixelFormat::X8R8G8B8 => "x8r8g8b8",
            PixelFormat::A8B8G8R8 => "a8b8g8r8",
            PixelFormat::X8B8G8R8 => "x8b8g8r8",
            PixelFormat::A16B16G16R16 => "a16b16g16r16",
            PixelFormat::A16R16G16B16 => "a16r16g16b16",
            PixelFormat::R5G6B5 => "r5g6b5",
            PixelFormat::R8G8B8 => "r8g8b8",
            PixelFormat::Rgbp => "rgbp",
            PixelFormat::Bgrp => "bgrp",
            PixelFormat::R10G10B10A2 => "r10g10b10a2",
            PixelFormat::B10G10R10A2 => "b10g10r10a2",
            PixelFormat::A16B16G16R16F => "a16b16g16r16f",
            PixelFormat::A16R16G16B16F => "a16r16g16b16f",
            PixelFormat::Buffer => "buffer",
            PixelFormat::Invalid => "invalid",
        };

        f.write_str(name)
    }
}

impl TryFrom<i32> for PixelFormat {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| PixelFormat::ALL.get(index).copied())
            .ok_or(())
    }
}
