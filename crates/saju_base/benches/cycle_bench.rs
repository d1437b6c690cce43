use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    Gender, Stem, day_pillar, hour_pillar, major_fortune_sequence, month_pillar, twelve_stage,
    year_pillar,
};
use saju_time::CalendarDate;

fn pillar_bench(c: &mut Criterion) {
    let date = CalendarDate::new(1990, 5, 15).unwrap();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(1990))));
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(Stem::Gyeong), black_box(date)))
    });
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(date))));
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(Stem::Mu), black_box(13)))
    });
    group.finish();
}

fn derived_bench(c: &mut Criterion) {
    let month = month_pillar(Stem::Gyeong, CalendarDate::new(1990, 5, 15).unwrap()).unwrap();
    let day = day_pillar(CalendarDate::new(1990, 5, 15).unwrap());

    let mut group = c.benchmark_group("derived");
    group.bench_function("twelve_stage", |b| {
        b.iter(|| twelve_stage(black_box(day.stem), black_box(month.branch)))
    });
    group.bench_function("major_fortune_sequence", |b| {
        b.iter(|| major_fortune_sequence(Stem::Gyeong, black_box(month), 1990, Gender::Male))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, derived_bench);
criterion_main!(benches);
