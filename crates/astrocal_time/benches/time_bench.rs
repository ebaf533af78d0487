use astrocal_time::{
    Instant, format_utc, instant_to_jd, jd_to_instant, jd_to_msd, msd_to_jd, seconds_to_instant,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn julian_bench(c: &mut Criterion) {
    let t = Instant::new(1_700_000_000, 123_456_789);
    let mut group = c.benchmark_group("julian");
    group.bench_function("instant_to_jd", |b| b.iter(|| instant_to_jd(black_box(t))));
    group.bench_function("jd_to_instant", |b| {
        b.iter(|| jd_to_instant(black_box(2_460_000.25)))
    });
    group.bench_function("seconds_to_instant", |b| {
        b.iter(|| seconds_to_instant(black_box(1_700_000_000.123)))
    });
    group.finish();
}

fn mars_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("mars");
    group.bench_function("jd_to_msd", |b| b.iter(|| jd_to_msd(black_box(2_460_000.25))));
    group.bench_function("msd_to_jd", |b| b.iter(|| msd_to_jd(black_box(53_000.5))));
    group.finish();
}

fn format_bench(c: &mut Criterion) {
    let t = Instant::new(1_700_000_000, 123_456_789);
    c.bench_function("format_utc", |b| {
        b.iter(|| format_utc(black_box(t)).expect("in range"))
    });
}

criterion_group!(benches, julian_bench, mars_bench, format_bench);
criterion_main!(benches);
