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
#![warn(missing_docs)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unstable_features)]
#![deny(unused_import_braces)]
#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]
#![allow(
    clippy::missing_safety_doc, // Until we add them...
    clippy::similar_names, // r, g, b / y, u, v
    // Yield false positives
    clippy::must_use_candidate,
)]

//! VP color utils is a library to classify surface pixel formats and to
//! convert single pixel samples between color spaces.
//!
//! Pixel formats are classified by chroma subsampling family and by bit depth:
//!
//! | Family | Pixel formats                                                   |
//! | ------ | --------------------------------------------------------------- |
//! | 4:0:0  | Y8, Y16S, Y16U, 400P                                            |
//! | 4:2:0  | IMC1-4, NV12, NV21, YV12, I420, IYUV, P010, P016                |
//! | 4:2:2  | YUY2, YUYV, YVYU, UYVY, VYUY, P208, 422H, 422V, Y210, Y216      |
//! | 4:4:4  | packed and planar RGB, Y410, Y416, AYUV, AUYV, 444P              |
//! | 4:1:1  | 411P                                                            |
//!
//! Sample conversion works on 8-bit samples with 12.20 fixed point arithmetic.
//! The supported destination color spaces are:
//! * sRGB (full range) and stRGB (studio range)
//! * ycbcr, ITU-R Recommendation BT.601 and BT.709, studio range
//! * ycbcr, BT.601 and BT.709 full range, xvYCC 601 and xvYCC 709
//!
//! Conversion coefficients are not computed by this library: callers supply a
//! floating point 3x4 matrix for each pair of color spaces.
//!
//! # Examples
//!
//! Classify a pixel format:
//! ```
//! use vp_color_utils::{get_bit_depth, get_color_pack, ColorPack, PixelFormat};
//!
//! assert_eq!(get_color_pack(PixelFormat::P010), ColorPack::Pack420);
//! assert_eq!(get_bit_depth(PixelFormat::P010), 10);
//! ```
//!
//! Convert a studio range BT.601 sample to sRGB:
//! ```
//! use vp_color_utils::{
//!     build_fixed_point_matrix, convert_sample, ColorSample, ColorSpace, FloatMatrix,
//! };
//! use std::error;
//!
//! fn convert() -> Result<(), Box<dyn error::Error>> {
//!     let bt601_to_srgb: FloatMatrix = [
//!         1.164, 0.0, 1.596, -222.912,
//!         1.164, -0.392, -0.813, 135.488,
//!         1.164, 2.017, 0.0, -276.8,
//!     ];
//!     let matrix = build_fixed_point_matrix(&bt601_to_srgb);
//!
//!     let white = ColorSample::from_ayuv(255, 235, 128, 128);
//!     let output = convert_sample(white, ColorSpace::Bt601, ColorSpace::Srgb, Some(&matrix))?;
//!     assert_eq!(output.alpha, 255);
//!     assert!(output.r() >= 254 && output.g() >= 254 && output.b() >= 254);
//!
//!     Ok(())
//! }
//! # convert().unwrap();
//! ```
//!
//! Let a collaborator supply the coefficients:
//! ```
//! use vp_color_utils::{
//!     convert_sample_with_provider, ColorSample, ColorSpace, ErrorKind, FloatMatrix,
//! };
//!
//! let full_to_studio = |_src: ColorSpace, _dst: ColorSpace| -> FloatMatrix {
//!     let scale = 219.0 / 255.0;
//!     [
//!         scale, 0.0, 0.0, 16.0,
//!         0.0, scale, 0.0, 16.0,
//!         0.0, 0.0, scale, 16.0,
//!     ]
//! };
//!
//! let black = ColorSample::from_argb(255, 0, 0, 0);
//! let output =
//!     convert_sample_with_provider(black, ColorSpace::Srgb, ColorSpace::Strgb, &full_to_studio)?;
//! assert_eq!(output, ColorSample::from_argb(255, 16, 16, 16));
//!
//! let error =
//!     convert_sample_with_provider(black, ColorSpace::Srgb, ColorSpace::Bt2020, &full_to_studio);
//! assert!(matches!(error, Err(ErrorKind::UnsupportedDestinationSpace)));
//! # Ok::<(), ErrorKind>(())
//! ```
//!
//! # Diagnostics
//!
//! Unknown pixel formats and unsupported destination color spaces are reported
//! through [`tracing`](https://docs.rs/tracing). No subscriber is installed by
//! this library.
mod classification;
mod color_space;
mod csc;
mod pixel_format;
mod surface;

pub use classification::{get_bit_depth, get_color_pack, ColorPack};
pub use color_space::{ColorModel, ColorSpace, OutputRange, COLOR_SPACE_COUNT};
pub use csc::{
    build_fixed_point_matrix, convert_sample, convert_sample_with_provider, ColorSample,
    FixedPointMatrix, FloatMatrix, MatrixProvider, FIX20, FIX20_HALF,
};
pub use pixel_format::{PixelFormat, PIXEL_FORMAT_COUNT};
pub use surface::{CompressionMode, ResourceHandle, Surface, SurfaceInfo, TileType};

/// An enumeration of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(C)]
pub enum ErrorKind {
    /// One or more parameters have invalid values for the called function
    #[error("One or more parameters have not legal values for the command")]
    InvalidValue,
    /// The destination color space has no defined output range
    #[error("The destination color space is not supported for sample conversion")]
    UnsupportedDestinationSpace,
    /// Source and destination color spaces differ but no conversion matrix was provided
    #[error("A conversion matrix is required when color spaces differ")]
    MissingMatrix,
}

#[doc(hidden)]
pub mod c_api {
    #![allow(clippy::wildcard_imports)]
    use super::*; // We are importing everything
    use std::ptr;

    #[repr(C)]
    pub enum Result {
        Ok,
        Err,
    }

    unsafe fn set_error(error: *mut ErrorKind, value: ErrorKind) -> self::Result {
        if !error.is_null() {
            *error = value;
        }

        self::Result::Err
    }

    // C enums are untrusted in the sense you can cast any value to an enum type,
    // so they cross the boundary as plain integers

    #[no_mangle]
    pub extern "C" fn vpcu_get_color_pack(format: i32) -> ColorPack {
        PixelFormat::try_from(format).map_or_else(
            |()| classification::unknown_color_pack(&format),
            get_color_pack,
        )
    }

    #[no_mangle]
    pub extern "C" fn vpcu_get_bit_depth(format: i32) -> u32 {
        PixelFormat::try_from(format).map_or_else(
            |()| classification::unknown_bit_depth(&format),
            get_bit_depth,
        )
    }

    #[no_mangle]
    pub unsafe extern "C" fn vpcu_build_fixed_point_matrix(
        matrix: *const f32,
        fixed_matrix: *mut i32,
        error: *mut ErrorKind,
    ) -> self::Result {
        // Protect from C null pointers
        if matrix.is_null() || fixed_matrix.is_null() {
            return set_error(error, ErrorKind::InvalidValue);
        }

        let matrix: FloatMatrix = ptr::read_unaligned(matrix.cast::<FloatMatrix>());
        ptr::write_unaligned(
            fixed_matrix.cast::<FixedPointMatrix>(),
            build_fixed_point_matrix(&matrix),
        );

        self::Result::Ok
    }

    #[no_mangle]
    pub unsafe extern "C" fn vpcu_convert_sample(
        input: *const ColorSample,
        src_color_space: i32,
        dst_color_space: i32,
        fixed_matrix: *const i32,
        output: *mut ColorSample,
        error: *mut ErrorKind,
    ) -> self::Result {
        if input.is_null() || output.is_null() {
            return set_error(error, ErrorKind::InvalidValue);
        }

        let (Ok(src), Ok(dst)) = (
            ColorSpace::try_from(src_color_space),
            ColorSpace::try_from(dst_color_space),
        ) else {
            return set_error(error, ErrorKind::InvalidValue);
        };

        // Convert nullable type to Option
        let fixed_matrix = if fixed_matrix.is_null() {
            None
        } else {
            Some(ptr::read_unaligned(fixed_matrix.cast::<FixedPointMatrix>()))
        };

        match convert_sample(*input, src, dst, fixed_matrix.as_ref()) {
            Ok(sample) => {
                *output = sample;
                self::Result::Ok
            }
            Err(error_kind) => set_error(error, error_kind),
        }
    }
}
