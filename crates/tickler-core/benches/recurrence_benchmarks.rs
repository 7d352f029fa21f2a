use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tickler_core::date::parse_date;
use tickler_core::recurrence::{next_date, EvaluationContext, RecurrenceManager};
use tickler_core::rule::parse_rule;

const RULES: &[(&str, &str)] = &[
    ("yearly", "y"),
    ("daily", "d 7"),
    ("weekly", "w 1,3,5"),
    ("monthly", "m 1,15,-1"),
    ("monthly_with_months", "m 29 2"),
];

fn day(value: &str) -> NaiveDate {
    parse_date(value).unwrap()
}

fn bench_rule_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_parsing");
    for (name, rule) in RULES {
        group.bench_with_input(BenchmarkId::from_parameter(name), rule, |b, rule| {
            b.iter(|| parse_rule(black_box(rule)).unwrap())
        });
    }
    group.finish();
}

fn bench_next_occurrence(c: &mut Criterion) {
    let now = day("20240601");
    let anchor = day("20240101");
    let ctx = EvaluationContext::Done;

    let mut group = c.benchmark_group("next_occurrence");
    for (name, rule) in RULES {
        let manager = RecurrenceManager::new(rule).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &manager, |b, manager| {
            b.iter(|| {
                manager
                    .next_occurrence_after(black_box(now), black_box(anchor), &ctx)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_far_overdue_daily(c: &mut Criterion) {
    // Anchors decades in the past must not walk day by day.
    let now = day("20990101");
    c.bench_function("far_overdue_daily", |b| {
        b.iter(|| {
            next_date(
                black_box(now),
                black_box("19000101"),
                black_box("d 1"),
                &EvaluationContext::List,
            )
            .unwrap()
        })
    });
}

fn bench_preview(c: &mut Criterion) {
    let now = day("20240601");
    let anchor = day("20240601");
    let manager = RecurrenceManager::new("m 29 2").unwrap();

    c.bench_function("preview_leap_days", |b| {
        b.iter(|| {
            manager
                .preview_occurrences(black_box(now), anchor, &EvaluationContext::default(), black_box(10))
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_rule_parsing,
    bench_next_occurrence,
    bench_far_overdue_daily,
    bench_preview
);
criterion_main!(benches);
