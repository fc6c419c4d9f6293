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
use crate::color_space::{ColorModel, ColorSpace};
use crate::ErrorKind;

/// Number of fractional bits of a [`FixedPointMatrix`] coefficient.
pub const FIX20: i32 = 20;
/// Half of one unit in 12.20 fixed point, used to round before shifting.
pub const FIX20_HALF: i32 = 1 << (FIX20 - 1);

const FIX20_MULT_F32: f32 = 1_048_576.0;

/// 3x4 affine transform, row-major.
///
/// Each row holds three input weights followed by a constant offset, in
/// 8-bit channel units.
pub type FloatMatrix = [f32; 12];

/// [`FloatMatrix`] with every coefficient scaled by 2^20 and rounded.
pub type FixedPointMatrix = [i32; 12];

/// One 8-bit pixel sample: an alpha value followed by three color channels.
///
/// Whether the channels are (R, G, B) or (Y, U, V) depends on the color space
/// the sample is declared against; the sample itself carries no tag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct ColorSample {
    /// Alpha channel, never converted nor clamped
    pub alpha: u8,
    /// Color channels, in (R, G, B) or (Y, U, V) order
    pub channels: [u8; 3],
}

impl ColorSample {
    /// Creates a sample from an alpha value and three color channels.
    pub const fn new(alpha: u8, channels: [u8; 3]) -> Self {
        ColorSample { alpha, channels }
    }

    /// Creates an R'G'B' sample.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        ColorSample::new(a, [r, g, b])
    }

    /// Creates a YCbCr sample.
    pub const fn from_ayuv(a: u8, y: u8, u: u8, v: u8) -> Self {
        ColorSample::new(a, [y, u, v])
    }

    /// Red, first channel of an R'G'B' sample.
    pub const fn r(&self) -> u8 {
        self.channels[0]
    }

    /// Green channel.
    pub const fn g(&self) -> u8 {
        self.channels[1]
    }

    /// Blue channel.
    pub const fn b(&self) -> u8 {
        self.channels[2]
    }

    /// Luma, first channel of a YCbCr sample.
    pub const fn y(&self) -> u8 {
        self.channels[0]
    }

    /// Cb channel.
    pub const fn u(&self) -> u8 {
        self.channels[1]
    }

    /// Cr channel.
    pub const fn v(&self) -> u8 {
        self.channels[2]
    }
}

/// Source of floating point conversion coefficients.
///
/// Implementors return the 3x4 matrix converting samples of `src` into `dst`.
/// Closures with the signature `Fn(ColorSpace, ColorSpace) -> FloatMatrix`
/// implement this trait.
pub trait MatrixProvider {
    /// Returns the conversion matrix for the given pair of color spaces.
    fn base_matrix(&self, src: ColorSpace, dst: ColorSpace) -> FloatMatrix;
}

impl<F> MatrixProvider for F
where
    F: Fn(ColorSpace, ColorSpace) -> FloatMatrix,
{
    fn base_matrix(&self, src: ColorSpace, dst: ColorSpace) -> FloatMatrix {
        self(src, dst)
    }
}

/// Converts a floating point conversion matrix to 12.20 fixed point.
///
/// Each coefficient is multiplied by 2^20, incremented by one half and
/// truncated toward zero. Negative coefficients therefore round half toward
/// positive infinity: `-0.0000005` becomes `0`, not `-1`.
///
/// Coefficients must be finite.
///
/// # Examples
/// ```
/// use vp_color_utils::build_fixed_point_matrix;
///
/// let mut matrix = [0.0f32; 12];
/// matrix[0] = 1.0;
/// matrix[1] = -0.5;
///
/// let fixed = build_fixed_point_matrix(&matrix);
/// assert_eq!(fixed[0], 1_048_576);
/// assert_eq!(fixed[1], -524_287);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn build_fixed_point_matrix(matrix: &FloatMatrix) -> FixedPointMatrix {
    matrix.map(|coefficient| (coefficient * FIX20_MULT_F32 + 0.5) as i32)
}

/// Perform affine transformation y = Ax + b, where:
/// - A = (row[0], row[1], row[2])
/// - x = (x, y, z)
/// - b = row[3]
///
/// The result is rounded to the nearest integer and converted back from 12.20
/// fixed point. Arithmetic wraps on 32 bits.
fn affine_transform(x: i32, y: i32, z: i32, row: &[i32]) -> i32 {
    x.wrapping_mul(row[0])
        .wrapping_add(y.wrapping_mul(row[1]))
        .wrapping_add(z.wrapping_mul(row[2]))
        .wrapping_add(row[3])
        .wrapping_add(FIX20_HALF)
        >> FIX20
}

/// Converts one sample from `src` to `dst` color space.
///
/// If `src` and `dst` are the same color space, the sample is returned
/// unchanged: no clamping takes place, even if the channels lie outside the
/// legal range of `dst`.
///
/// Otherwise the channels of `input` are transformed by `matrix`, taken in
/// input order regardless of the model of `src`, and each result is clamped to
/// the range of `dst` (see [`ColorSpace::output_range`]). The alpha channel is
/// always copied unchanged.
///
/// # Errors
///
/// * [`UnsupportedDestinationSpace`] if `src` and `dst` differ and `dst` has no
///   defined output range
/// * [`MissingMatrix`] if `src` and `dst` differ and no matrix was given
///
/// # Examples
/// ```
/// use vp_color_utils::{convert_sample, ColorSample, ColorSpace};
///
/// // Studio range R'G'B' to full range, all channels expanded by 255/219
/// let gain = (255.0f32 / 219.0 * 1_048_576.0) as i32;
/// let offset = -16 * gain;
/// let matrix = [
///     gain, 0, 0, offset,
///     0, gain, 0, offset,
///     0, 0, gain, offset,
/// ];
///
/// let input = ColorSample::from_argb(255, 235, 16, 126);
/// let output = convert_sample(input, ColorSpace::Strgb, ColorSpace::Srgb, Some(&matrix))?;
/// assert_eq!(output, ColorSample::from_argb(255, 255, 0, 128));
/// # Ok::<(), vp_color_utils::ErrorKind>(())
/// ```
///
/// [`MissingMatrix`]: ./enum.ErrorKind.html#variant.MissingMatrix
/// [`UnsupportedDestinationSpace`]: ./enum.ErrorKind.html#variant.UnsupportedDestinationSpace
pub fn convert_sample(
    input: ColorSample,
    src: ColorSpace,
    dst: ColorSpace,
    matrix: Option<&FixedPointMatrix>,
) -> Result<ColorSample, ErrorKind> {
    if src == dst {
        tracing::trace!(
            color_space = %dst,
            rgb = matches!(dst.model(), ColorModel::Rgb),
            "no conversion needed"
        );
        return Ok(input);
    }

    let Some(range) = dst.output_range() else {
        tracing::info!(color_space = %dst, "unsupported output color space");
        return Err(ErrorKind::UnsupportedDestinationSpace);
    };
    let matrix = matrix.ok_or(ErrorKind::MissingMatrix)?;

    let [x, y, z] = input.channels.map(i32::from);
    let converted = [
        affine_transform(x, y, z, &matrix[0..4]),
        affine_transform(x, y, z, &matrix[4..8]),
        affine_transform(x, y, z, &matrix[8..12]),
    ];

    Ok(ColorSample::new(input.alpha, range.clamp(converted)))
}

/// Converts one sample from `src` to `dst` color space, fetching the
/// conversion coefficients from `provider`.
///
/// The floating point matrix returned by the provider goes through
/// [`build_fixed_point_matrix`] and then [`convert_sample`]. When `src` and
/// `dst` are the same color space, or `dst` has no defined output range, the
/// provider is not consulted.
///
/// # Errors
///
/// * [`UnsupportedDestinationSpace`] if `dst` has no defined output range
///
/// [`UnsupportedDestinationSpace`]: ./enum.ErrorKind.html#variant.UnsupportedDestinationSpace
pub fn convert_sample_with_provider<P>(
    input: ColorSample,
    src: ColorSpace,
    dst: ColorSpace,
    provider: &P,
) -> Result<ColorSample, ErrorKind>
where
    P: MatrixProvider + ?Sized,
{
    if src == dst || dst.output_range().is_none() {
        return convert_sample(input, src, dst, None);
    }

    let matrix = build_fixed_point_matrix(&provider.base_matrix(src, dst));
    convert_sample(input, src, dst, Some(&matrix))
}
