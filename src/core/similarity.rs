use std::collections::{BTreeMap, HashMap};

use crate::models::Rating;

/// Sparse ratings of one client: provider id -> rating
pub type RatingVector = BTreeMap<i64, f64>;

/// Pearson correlation of two clients' ratings over the providers both have rated
///
/// Returns 0 when the clients share no provider or when either side has no
/// variance over the shared providers. Otherwise the result lies in [-1, 1].
pub fn pearson_correlation(a: &RatingVector, b: &RatingVector) -> f64 {
    let mut n = 0usize;
    let (mut sum_a, mut sum_b) = (0.0_f64, 0.0_f64);
    let (mut sum_a_sq, mut sum_b_sq) = (0.0_f64, 0.0_f64);
    let mut sum_products = 0.0_f64;

    for (provider_id, &x) in a {
        let Some(&y) = b.get(provider_id) else {
            continue;
        };
        n += 1;
        sum_a += x;
        sum_b += y;
        sum_a_sq += x * x;
        sum_b_sq += y * y;
        sum_products += x * y;
    }

    if n == 0 {
        return 0.0;
    }

    let n = n as f64;
    let numerator = sum_products - (sum_a * sum_b / n);
    let denominator = ((sum_a_sq - sum_a * sum_a / n) * (sum_b_sq - sum_b * sum_b / n)).sqrt();

    // NaN covers a negative radicand left behind by rounding
    if denominator == 0.0 || denominator.is_nan() {
        return 0.0;
    }

    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Ratings of every client that has rated at least one provider
#[derive(Debug, Clone, Default)]
pub struct RatingMatrix {
    by_client: BTreeMap<i64, RatingVector>,
}

impl RatingMatrix {
    /// Build the matrix from stored mapping rows
    ///
    /// Rows without a rating are skipped. When a client rated the same provider
    /// more than once, the row with the highest id wins.
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let mut latest: HashMap<(i64, i64), (i64, i64)> = HashMap::new();

        for row in ratings {
            let Some(value) = row.rating else {
                continue;
            };
            latest
                .entry((row.client_id, row.provider_id))
                .and_modify(|current| {
                    if row.id > current.0 {
                        *current = (row.id, value);
                    }
                })
                .or_insert((row.id, value));
        }

        let mut by_client: BTreeMap<i64, RatingVector> = BTreeMap::new();
        for ((client_id, provider_id), (_, value)) in latest {
            by_client
                .entry(client_id)
                .or_default()
                .insert(provider_id, value as f64);
        }

        Self { by_client }
    }

    /// Ratings of one client, empty if the client rated nothing
    pub fn ratings_of(&self, client_id: i64) -> RatingVector {
        self.by_client.get(&client_id).cloned().unwrap_or_default()
    }

    /// Iterate clients in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &RatingVector)> {
        self.by_client.iter().map(|(id, ratings)| (*id, ratings))
    }

    pub fn client_count(&self) -> usize {
        self.by_client.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_client.is_empty()
    }
}
