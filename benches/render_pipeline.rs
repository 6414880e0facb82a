use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_animator::{
    Complex, MandelbrotAlgorithm, RenderParams, generate_fractal, generate_fractal_parallel_rayon,
    map_viewport, render_frame,
};

fn bench_field_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_generation");
    let algorithm = MandelbrotAlgorithm::new(200.0).unwrap();

    for number_points in [100, 300] {
        let (_, grid) = map_viewport(Complex::new(-0.5, 0.0), 1.0, number_points).unwrap();

        group.bench_with_input(BenchmarkId::new("serial", number_points), &grid, |b, grid| {
            b.iter(|| generate_fractal(black_box(grid), &algorithm))
        });
        group.bench_with_input(BenchmarkId::new("rayon", number_points), &grid, |b, grid| {
            b.iter(|| generate_fractal_parallel_rayon(black_box(grid), &algorithm))
        });
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let params = RenderParams {
        smoothing: true,
        ..RenderParams::julia(Complex::new(-0.8, 0.156))
    };

    c.bench_function("render_frame_julia_300", |b| {
        b.iter(|| render_frame(black_box(&params)).unwrap())
    });
}

criterion_group!(benches, bench_field_generation, bench_render_frame);
criterion_main!(benches);
