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
use crate::classification::{get_bit_depth, get_color_pack, ColorPack};
use crate::color_space::ColorSpace;
use crate::pixel_format::PixelFormat;

/// Opaque handle of the memory backing a surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ResourceHandle(pub u64);

/// Memory tiling of a surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub enum TileType {
    /// Row-major, no tiling
    #[default]
    Linear,
    /// Legacy X-major tiling
    X,
    /// Legacy Y-major tiling
    Y,
    /// 4 KiB Y-major tiles with fixed layout
    Yf,
    /// 64 KiB Y-major tiles with fixed layout
    Ys,
    /// 4 KiB tiles
    Tile4,
    /// 64 KiB tiles
    Tile64,
}

/// Memory compression scheme applied to a surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub enum CompressionMode {
    /// Not compressed
    #[default]
    Disabled,
    /// Horizontal lossless compression
    Horizontal,
    /// Vertical lossless compression
    Vertical,
    /// Media compression
    Media,
    /// Render compression
    Render,
}

/// A surface as tracked by the video processing pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    /// Backing memory
    pub resource: ResourceHandle,
    /// Pixel layout
    pub format: PixelFormat,
    /// Color space of the samples
    pub color_space: ColorSpace,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Depth in slices, for volume surfaces
    pub depth: u32,
    /// Distance in bytes between two rows
    pub pitch: u32,
    /// Distance in bytes between two slices
    pub slice_pitch: u32,
    /// Offset in bytes of the first pixel in the resource
    pub offset: u32,
    /// Memory tiling
    pub tile_type: TileType,
    /// Tile mode as understood by the graphics memory manager
    pub gmm_tile_mode: u32,
    /// Whether `gmm_tile_mode` overrides `tile_type`
    pub gmm_tile_enabled: bool,
    /// Whether the resource may be compressed
    pub compressible: bool,
    /// Whether the content is currently compressed
    pub is_compressed: bool,
    /// Compression scheme
    pub compression_mode: CompressionMode,
    /// Compression format identifier
    pub compression_format: u32,
    /// Identifier of the frame held by the surface
    pub frame_id: i32,
}

/// The memory layout subset of a [`Surface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceInfo {
    /// Handle of the underlying resource
    pub resource: ResourceHandle,
    /// Pixel format
    pub format: PixelFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Number of slices
    pub depth: u32,
    /// Distance in bytes between two rows
    pub pitch: u32,
    /// Distance in bytes between two slices
    pub slice_pitch: u32,
    /// Offset in bytes of the first pixel in the resource
    pub offset: u32,
    /// Memory tiling
    pub tile_type: TileType,
    /// Tile mode as understood by the graphics memory manager
    pub gmm_tile_mode: u32,
    /// Whether `gmm_tile_mode` overrides `tile_type`
    pub gmm_tile_enabled: bool,
    /// Whether the resource may be compressed
    pub compressible: bool,
    /// Whether the content is currently compressed
    pub is_compressed: bool,
    /// Compression scheme
    pub compression_mode: CompressionMode,
    /// Compression format identifier
    pub compression_format: u32,
}

impl Default for SurfaceInfo {
    fn default() -> Self {
        SurfaceInfo {
            resource: ResourceHandle::default(),
            format: PixelFormat::Invalid,
            width: 0,
            height: 0,
            depth: 0,
            pitch: 0,
            slice_pitch: 0,
            offset: 0,
            tile_type: TileType::default(),
            gmm_tile_mode: 0,
            gmm_tile_enabled: false,
            compressible: false,
            is_compressed: false,
            compression_mode: CompressionMode::default(),
            compression_format: 0,
        }
    }
}

impl SurfaceInfo {
    /// Projects a surface onto its memory layout.
    ///
    /// A missing surface projects to [`SurfaceInfo::default`], whose format is
    /// [`PixelFormat::Invalid`].
    pub fn from_surface(surface: Option<&Surface>) -> Self {
        surface.map(SurfaceInfo::from).unwrap_or_default()
    }

    /// Chroma subsampling family of the surface format.
    pub fn color_pack(&self) -> ColorPack {
        get_color_pack(self.format)
    }

    /// Bits per channel of the surface format, 0 if unknown.
    pub fn bit_depth(&self) -> u32 {
        get_bit_depth(self.format)
    }
}

impl From<&Surface> for SurfaceInfo {
    fn from(surface: &Surface) -> Self {
        SurfaceInfo {
            resource: surface.resource,
            format: surface.format,
            width: surface.width,
            height: surface.height,
            depth: surface.depth,
            pitch: surface.pitch,
            slice_pitch: surface.slice_pitch,
            offset: surface.offset,
            tile_type: surface.tile_type,
            gmm_tile_mode: surface.gmm_tile_mode,
            gmm_tile_enabled: surface.gmm_tile_enabled,
            compressible: surface.compressible,
            is_compressed: surface.is_compressed,
            compression_mode: surface.compression_mode,
            compression_format: surface.compression_format,
        }
    }
}
