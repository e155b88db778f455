use criterion::{Criterion, criterion_group, criterion_main};
use rangeframe::api::PlotBuilder;
use rangeframe::core::{AxisLayout, nice_step};
use rangeframe::render::NullRenderer;
use rangeframe::{Plot, PlotConfig};
use std::hint::black_box;

fn wave_plot(points: usize, config: PlotConfig) -> Plot {
    let xs: Vec<f64> = (0..points).map(|i| i as f64 * 0.1).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.37).sin() * 50.0 + 100.0).collect();
    PlotBuilder::new()
        .with_config(config)
        .add_series(&xs, &ys)
        .and_then(|builder| builder.build())
        .expect("valid generated plot")
}

fn bench_nice_step(c: &mut Criterion) {
    c.bench_function("nice_step", |b| {
        b.iter(|| nice_step(black_box(7.0 / 3.0)).expect("valid raw step"))
    });
}

fn bench_axis_layout(c: &mut Criterion) {
    c.bench_function("axis_layout_12_ticks", |b| {
        b.iter(|| AxisLayout::compute(black_box((-1_234.5, 98_765.4)), 12).expect("layout"))
    });
}

fn bench_render_frame_10k(c: &mut Criterion) {
    let plot = wave_plot(10_000, PlotConfig::default());
    let mut renderer = NullRenderer::default();

    c.bench_function("render_frame_10k", |b| {
        b.iter(|| plot.render(&mut renderer).expect("render"))
    });
}

fn bench_draw_svg_10k_subsampled(c: &mut Criterion) {
    let plot = wave_plot(10_000, PlotConfig::default().with_subsample_distance(1.0));

    c.bench_function("draw_svg_10k_subsampled", |b| {
        b.iter(|| black_box(plot.draw().expect("draw")))
    });
}

criterion_group!(
    benches,
    bench_nice_step,
    bench_axis_layout,
    bench_render_frame_10k,
    bench_draw_svg_10k_subsampled
);
criterion_main!(benches);
