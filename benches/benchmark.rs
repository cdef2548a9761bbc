// Performance benchmarks for fitting and ranking
use chrono::NaiveDate;
use coursematch::{DataSet, RecommenderEngine, SyntheticConfig, SyntheticData, TfidfModel};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_engine(courses: usize, trainees: usize) -> RecommenderEngine {
    let config = SyntheticConfig {
        seed: 7,
        courses,
        trainees,
        interactions: 0,
        today: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    };
    let synthetic = SyntheticData::generate(&config);
    let data = DataSet::from_parts(
        synthetic.courses,
        synthetic.trainees,
        synthetic.intake,
        synthetic.interactions,
        synthetic.role_tags,
    )
    .unwrap();
    RecommenderEngine::new(data)
}

fn benchmark_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [80, 1000, 10000].iter() {
        let engine = synthetic_engine(*size, 1);
        let texts: Vec<&str> = engine.data().courses().iter().map(|c| c.text()).collect();

        group.bench_with_input(BenchmarkId::new("tfidf", size), &texts, |b, texts| {
            b.iter(|| TfidfModel::fit(black_box(texts.as_slice())));
        });
    }

    group.finish();
}

fn benchmark_recommend_for_trainee(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_for_trainee");

    for size in [80, 1000, 10000].iter() {
        let engine = synthetic_engine(*size, 200);
        group.bench_with_input(BenchmarkId::new("courses", size), size, |b, _| {
            b.iter(|| engine.recommend_for_trainee(black_box("Trainee-17"), 10).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend_for_course(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_for_course");

    for size in [200, 2000, 20000].iter() {
        let engine = synthetic_engine(80, *size);
        group.bench_with_input(BenchmarkId::new("trainees", size), size, |b, _| {
            b.iter(|| engine.recommend_for_course(black_box("C001"), 10).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fit,
    benchmark_recommend_for_trainee,
    benchmark_recommend_for_course
);
criterion_main!(benches);
