use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_solar::{boundary_date, classify, solar_longitude};
use saju_time::CalendarDate;

fn position_bench(c: &mut Criterion) {
    let date = CalendarDate::new(1990, 5, 15).unwrap();

    let mut group = c.benchmark_group("solar_position");
    group.bench_function("solar_longitude", |b| {
        b.iter(|| solar_longitude(black_box(date), black_box(12.0)))
    });
    group.bench_function("classify", |b| b.iter(|| classify(black_box(date))));
    group.finish();
}

fn boundary_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_term_search");
    group.bench_function("boundary_date_ipchun", |b| {
        b.iter(|| boundary_date(black_box(2024), black_box(315.0)))
    });
    group.finish();
}

criterion_group!(benches, position_bench, boundary_bench);
criterion_main!(benches);
