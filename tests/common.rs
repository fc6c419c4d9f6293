#![allow(dead_code)]

use vp_color_utils::FloatMatrix;

use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

pub const FIX20_MULT_F64: f64 = 1_048_576.0;

/// Luma weights (kr, kg, kb)
pub type Weights = (f64, f64, f64);

pub const BT601: Weights = (0.299, 0.587, 0.114);
pub const BT709: Weights = (0.2126, 0.7152, 0.0722);

const Y_MIN: f64 = 16.0;
const C_HALF: f64 = 128.0;
const Y_RANGE: f64 = 219.0;
const C_RANGE: f64 = 224.0;
const FULL_RANGE: f64 = 255.0;

#[allow(clippy::cast_possible_truncation)]
fn to_f32(rows: [[f64; 4]; 3]) -> FloatMatrix {
    let mut matrix = [0f32; 12];
    for (i, row) in rows.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            matrix[4 * i + j] = *value as f32;
        }
    }

    matrix
}

/// Matrix converting ycbcr (studio or full range) to R'G'B' (studio or full range)
pub fn yuv_to_rgb_matrix(
    (kr, kg, kb): Weights,
    studio_src: bool,
    studio_dst: bool,
) -> FloatMatrix {
    let (y_min, y_scale, c_scale) = if studio_src {
        (Y_MIN, FULL_RANGE / Y_RANGE, FULL_RANGE / C_RANGE)
    } else {
        (0.0, 1.0, 1.0)
    };
    let (out_scale, out_offset) = if studio_dst {
        (Y_RANGE / FULL_RANGE, Y_MIN)
    } else {
        (1.0, 0.0)
    };

    let rv = c_scale * 2.0 * (1.0 - kr);
    let gu = -c_scale * 2.0 * (1.0 - kb) * kb / kg;
    let gv = -c_scale * 2.0 * (1.0 - kr) * kr / kg;
    let bu = c_scale * 2.0 * (1.0 - kb);

    let row = |ay: f64, au: f64, av: f64| {
        let (ay, au, av) = (out_scale * ay, out_scale * au, out_scale * av);
        [ay, au, av, out_offset - ay * y_min - (au + av) * C_HALF]
    };

    to_f32([
        row(y_scale, 0.0, rv),
        row(y_scale, gu, gv),
        row(y_scale, bu, 0.0),
    ])
}

/// Matrix converting full range R'G'B' to ycbcr (studio or full range)
pub fn rgb_to_yuv_matrix((kr, kg, kb): Weights, studio_dst: bool) -> FloatMatrix {
    let (y_min, y_scale, c_scale) = if studio_dst {
        (Y_MIN, Y_RANGE / FULL_RANGE, C_RANGE / FULL_RANGE)
    } else {
        (0.0, 1.0, 1.0)
    };

    let ikb = 2.0 * (1.0 - kb);
    let ikr = 2.0 * (1.0 - kr);

    to_f32([
        [y_scale * kr, y_scale * kg, y_scale * kb, y_min],
        [
            c_scale * (-kr / ikb),
            c_scale * (-kg / ikb),
            c_scale * 0.5,
            C_HALF,
        ],
        [
            c_scale * 0.5,
            c_scale * (-kg / ikr),
            c_scale * (-kb / ikr),
            C_HALF,
        ],
    ])
}

/// Matrix whose outputs are the given constants, whatever the input
pub fn constant_matrix(values: [i32; 3]) -> [i32; 12] {
    let mut matrix = [0i32; 12];
    for (i, value) in values.iter().enumerate() {
        matrix[4 * i + 3] = value << 20;
    }

    matrix
}

/// Floating point reference of the fixed point sample conversion, before clamping
pub fn reference_convert(matrix: &FloatMatrix, channels: [u8; 3]) -> [f64; 3] {
    let [x, y, z] = channels.map(f64::from);
    let mut out = [0f64; 3];
    for (i, row) in matrix.chunks_exact(4).enumerate() {
        out[i] = f64::from(row[0]) * x
            + f64::from(row[1]) * y
            + f64::from(row[2]) * z
            + f64::from(row[3]);
    }

    out
}

/// Formatted tracing output, shared between a subscriber and the test reading it
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread local subscriber and returns its result along with
/// everything logged meanwhile
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.contents())
}
