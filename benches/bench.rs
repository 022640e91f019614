use criterion::{criterion_group, criterion_main};

const NIDS: &[&str] = &[
    "0911794829",
    "091179-4829",
    "091179 4829",
    "1301102230",
    "6005111490",
    "5703003340",
    "1401833029",
    "BBBBBBBBBB",
    "091179.4829",
];

mod checksum_benchmark {
    use super::NIDS;
    use criterion::{black_box, Criterion};
    use nid::{NidChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        c.bench_function("nid-checksum", |b| {
            b.iter(|| {
                for id in NIDS {
                    black_box(NidChecksum.is_valid_match(black_box(id)));
                }
            })
        });
    }
}

mod birthdate_benchmark {
    use super::NIDS;
    use chrono::NaiveDate;
    use criterion::{black_box, Criterion};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let reference = NaiveDate::from_ymd_opt(2012, 5, 1);

        c.bench_function("nid-age", |b| {
            b.iter(|| {
                for id in NIDS {
                    let _ = black_box(nid::age(black_box(Some(*id)), reference));
                }
            })
        });

        c.bench_function("nid-format", |b| {
            b.iter(|| {
                for id in NIDS {
                    black_box(nid::format(black_box(Some(*id))));
                }
            })
        });
    }
}

criterion_group!(
    benches,
    checksum_benchmark::criterion_benchmark,
    birthdate_benchmark::criterion_benchmark
);
criterion_main!(benches);
