use handrange::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_range_notation,
        encoding_random_range,
        encoding_full_range,
        counting_cell_states,
        applying_bulk_presets,
}

fn parsing_range_notation(c: &mut criterion::Criterion) {
    c.bench_function("parse a typical opening range", |b| {
        b.iter(|| Range::try_from("22+,A2s+,K9s+,Q9s+,J9s+,T8s+,97s+,86s+,75s+,64s+,54s,ATo+,KTo+,QTo+,JTo"))
    });
}

fn encoding_random_range(c: &mut criterion::Criterion) {
    let range = Range::random();
    c.bench_function("encode a random Range", |b| b.iter(|| range.to_string()));
}

fn encoding_full_range(c: &mut criterion::Criterion) {
    let mut range = Range::empty();
    range.set_all(true);
    c.bench_function("encode the full Range", |b| b.iter(|| range.to_string()));
}

fn counting_cell_states(c: &mut criterion::Criterion) {
    let range = Range::random();
    c.bench_function("collect all 169 cell states", |b| {
        b.iter(|| range.cell_states())
    });
}

fn applying_bulk_presets(c: &mut criterion::Criterion) {
    c.bench_function("apply pairs and broadway presets", |b| {
        b.iter(|| {
            let mut range = Range::empty();
            range.set_pairs(true);
            range.set_broadway(true);
            range.combo_count()
        })
    });
}
