use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strict_semver::constraint::{and, eq, gte, lt, or, Constraint};
use strict_semver::Version;

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "0.0.0",
        "1.2.3",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-0.3.7",
        "1.2.3+build.5",
        "1.0.0-rc.1+exp.sha.5114f85",
        "10.20.30-beta.11",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(black_box(version).parse::<Version>().ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs = [
        ("1.2.3", "1.2.4"),
        ("1.0.0-alpha", "1.0.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.0.0-rc.1", "1.0.0-rc.1"),
        ("2.0.0+build.1", "2.0.0+build.2"),
    ];

    let parsed: Vec<(Version, Version)> = pairs
        .iter()
        .map(|(a, b)| (a.parse().expect("version"), b.parse().expect("version")))
        .collect();

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (left, right) in &parsed {
                black_box(black_box(left).cmp(black_box(right)));
            }
        })
    });
}

fn bench_constraint_apply(c: &mut Criterion) {
    let constraint = or([
        and([
            gte("1.0.0").expect("constraint").boxed(),
            lt("2.0.0").expect("constraint").boxed(),
        ])
        .boxed(),
        eq("9.9.9").expect("constraint").boxed(),
    ]);

    let versions: Vec<Version> = [
        "0.9.0",
        "1.0.0",
        "1.5.0",
        "1.9.9-rc.1",
        "2.0.0",
        "9.9.9",
    ]
    .iter()
    .map(|v| v.parse().expect("version"))
    .collect();

    c.bench_function("constraint_apply", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(constraint.apply(black_box(version)));
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_compare, bench_constraint_apply);
criterion_main!(benches);
