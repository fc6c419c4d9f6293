use criterion::*;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

use vp::*;
use vp_color_utils as vp;

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;
const SAMPLE_SIZE: usize = 22;

// Studio range BT.601 to full range R'G'B'
const BT601_TO_SRGB: FloatMatrix = [
    1.164_383_6,
    0.0,
    1.596_026_8,
    -222.921_57,
    1.164_383_6,
    -0.391_762_3,
    -0.812_967_6,
    135.575_29,
    1.164_383_6,
    2.017_232_2,
    0.0,
    -276.835_85,
];

fn random_frame() -> Vec<ColorSample> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    (0..WIDTH * HEIGHT)
        .map(|_| ColorSample::new(rng.gen(), rng.gen()))
        .collect()
}

fn convert_frame(
    input: &[ColorSample],
    output: &mut [ColorSample],
    src: ColorSpace,
    dst: ColorSpace,
    matrix: Option<&FixedPointMatrix>,
) -> Duration {
    let start = Instant::now();
    for (dst_sample, src_sample) in output.iter_mut().zip(input) {
        *dst_sample = convert_sample(*src_sample, src, dst, matrix)
            .expect("Benchmark conversion failed");
    }

    let elapsed = start.elapsed();
    black_box(output);
    elapsed
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("vp-color-utils");
    group.sample_size(SAMPLE_SIZE);

    {
        group.throughput(Throughput::Elements(PixelFormat::ALL.len() as u64));
        group.bench_function("classify", |b| {
            b.iter(|| {
                for format in PixelFormat::ALL {
                    black_box(get_color_pack(black_box(format)));
                    black_box(get_bit_depth(black_box(format)));
                }
            });
        });
    }

    {
        group.throughput(Throughput::Elements(12));
        group.bench_function("build-matrix", |b| {
            b.iter(|| build_fixed_point_matrix(black_box(&BT601_TO_SRGB)));
        });
    }

    {
        let input = random_frame();
        let mut output = vec![ColorSample::default(); input.len()];
        let matrix = build_fixed_point_matrix(&BT601_TO_SRGB);

        group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));
        group.bench_function("bt601>srgb", move |b| {
            b.iter_custom(|iters| {
                let mut total = Duration::new(0, 0);
                for _i in 0..iters {
                    total += convert_frame(
                        &input,
                        &mut output,
                        ColorSpace::Bt601,
                        ColorSpace::Srgb,
                        Some(&matrix),
                    );
                }

                total
            });
        });
    }

    {
        let input = random_frame();
        let mut output = vec![ColorSample::default(); input.len()];

        group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));
        group.bench_function("srgb>srgb", move |b| {
            b.iter_custom(|iters| {
                let mut total = Duration::new(0, 0);
                for _i in 0..iters {
                    total += convert_frame(
                        &input,
                        &mut output,
                        ColorSpace::Srgb,
                        ColorSpace::Srgb,
                        None,
                    );
                }

                total
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
