// Criterion benchmarks for the recommender core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use provider_recommender::core::{
    scoring::content_score,
    similarity::{pearson_correlation, RatingMatrix, RatingVector},
    Recommender,
};
use provider_recommender::models::{Client, Provider, Rating, ScoringWeights};

const LOCATIONS: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Miami", "Houston"];
const GENDERS: [&str; 3] = ["Female", "Male", "Non-binary"];
const BACKGROUNDS: [&str; 4] = ["American", "Latino", "Canadian", "Cuban"];

fn create_provider(id: usize) -> Provider {
    Provider {
        id: id as i64,
        name: format!("Dr. {}", id),
        specialization: "Therapist".to_string(),
        location: LOCATIONS[id % LOCATIONS.len()].to_string(),
        gender: Some(GENDERS[id % GENDERS.len()].to_string()),
        language: Some("English".to_string()),
        cultural_background: Some(BACKGROUNDS[id % BACKGROUNDS.len()].to_string()),
    }
}

fn create_client() -> Client {
    Client {
        id: 1,
        name: "John Doe".to_string(),
        need: "Anxiety".to_string(),
        location: "New York".to_string(),
        gender: Some("Male".to_string()),
        language: Some("English".to_string()),
        cultural_background: Some("American".to_string()),
        preferred_gender: Some("Female".to_string()),
        preferred_cultural_background: Some("American".to_string()),
    }
}

/// Every client rates a deterministic slice of the providers
fn create_ratings(clients: usize, providers: usize, per_client: usize) -> Vec<Rating> {
    let mut rows = Vec::with_capacity(clients * per_client);
    for client in 1..=clients {
        for k in 0..per_client {
            let provider = (client * 7 + k * 3) % providers + 1;
            rows.push(Rating {
                id: rows.len() as i64 + 1,
                client_id: client as i64,
                provider_id: provider as i64,
                rating: Some(((client + k) % 5 + 1) as i64),
            });
        }
    }
    rows
}

fn bench_pearson(c: &mut Criterion) {
    let a: RatingVector = (0..50).map(|i| (i, (i % 5 + 1) as f64)).collect();
    let b: RatingVector = (0..50).map(|i| (i, ((i * 3) % 5 + 1) as f64)).collect();

    c.bench_function("pearson_correlation_50", |bench| {
        bench.iter(|| pearson_correlation(black_box(&a), black_box(&b)));
    });
}

fn bench_content_score(c: &mut Criterion) {
    let client = create_client();
    let provider = create_provider(0);
    let weights = ScoringWeights::default();

    c.bench_function("content_score", |b| {
        b.iter(|| content_score(black_box(&client), black_box(&provider), black_box(&weights)));
    });
}

fn bench_rating_matrix(c: &mut Criterion) {
    let rows = create_ratings(500, 200, 10);

    c.bench_function("rating_matrix_5000_rows", |b| {
        b.iter(|| RatingMatrix::from_ratings(black_box(&rows)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_default_weights();
    let client = create_client();

    let mut group = c.benchmark_group("recommend");

    for provider_count in [10, 50, 100, 500, 1000].iter() {
        let providers: Vec<Provider> = (1..=*provider_count).map(create_provider).collect();
        let rows = create_ratings(200, *provider_count, 8);

        group.bench_with_input(
            BenchmarkId::new("providers", provider_count),
            provider_count,
            |b, _| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(&client),
                        black_box(providers.clone()),
                        black_box(&rows),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pearson,
    bench_content_score,
    bench_rating_matrix,
    bench_recommend
);

criterion_main!(benches);
