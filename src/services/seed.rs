use crate::models::{NewClient, NewProvider};

/// Rating between two dataset entries, addressed by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRating {
    pub client: usize,
    pub provider: usize,
    pub rating: Option<i64>,
}

/// A dataset that can be inserted in one go
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub providers: Vec<NewProvider>,
    pub clients: Vec<NewClient>,
    pub ratings: Vec<SeedRating>,
}

fn provider(
    name: &str,
    specialization: &str,
    location: &str,
    gender: &str,
    language: &str,
    cultural_background: &str,
) -> NewProvider {
    NewProvider {
        name: name.to_string(),
        specialization: specialization.to_string(),
        location: location.to_string(),
        gender: Some(gender.to_string()),
        language: Some(language.to_string()),
        cultural_background: Some(cultural_background.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn client(
    name: &str,
    need: &str,
    location: &str,
    gender: &str,
    language: &str,
    cultural_background: &str,
    preferred_gender: &str,
    preferred_cultural_background: &str,
) -> NewClient {
    NewClient {
        name: name.to_string(),
        need: need.to_string(),
        location: location.to_string(),
        gender: Some(gender.to_string()),
        language: Some(language.to_string()),
        cultural_background: Some(cultural_background.to_string()),
        preferred_gender: Some(preferred_gender.to_string()),
        preferred_cultural_background: Some(preferred_cultural_background.to_string()),
    }
}

/// Fixed demo dataset: 10 providers, 10 clients, 4 ratings
pub fn dummy_dataset() -> SeedData {
    let providers = vec![
        provider("Dr. Alice", "Psychologist", "New York", "Female", "English", "American"),
        provider("Dr. Bob", "Therapist", "Los Angeles", "Male", "Spanish", "Latino"),
        provider("Dr. Charlie", "Counselor", "Chicago", "Non-binary", "French", "Canadian"),
        provider("Dr. Diana", "Psychiatrist", "Miami", "Female", "English", "Cuban"),
        provider("Dr. Edward", "Life Coach", "Houston", "Male", "English", "British"),
        provider("Dr. Fiona", "Psychologist", "New York", "Female", "Spanish", "Mexican"),
        provider("Dr. George", "Therapist", "San Francisco", "Male", "Mandarin", "Chinese"),
        provider("Dr. Helen", "Counselor", "Los Angeles", "Female", "English", "Latino"),
        provider("Dr. Ian", "Psychologist", "Chicago", "Male", "French", "Canadian"),
        provider("Dr. Jane", "Psychiatrist", "New York", "Female", "English", "American"),
    ];

    let clients = vec![
        client("John Doe", "Anxiety", "New York", "Male", "English", "American", "Female", "American"),
        client("Jane Smith", "Depression", "Los Angeles", "Female", "Spanish", "Latino", "Male", "Latino"),
        client("Michael Lee", "Stress", "San Francisco", "Male", "Mandarin", "Chinese", "Female", "Chinese"),
        client("Emily Davis", "Grief", "Miami", "Female", "English", "American", "Male", "Cuban"),
        client("Laura Garcia", "Relationship Issues", "Houston", "Female", "Spanish", "Mexican", "Male", "Mexican"),
        client("David Nguyen", "Trauma", "Chicago", "Male", "English", "Canadian", "Female", "Canadian"),
        client("Sarah Johnson", "Anxiety", "New York", "Female", "English", "American", "Male", "American"),
        client("Robert Wilson", "Depression", "Los Angeles", "Male", "Spanish", "Latino", "Female", "Latino"),
        client("Jessica Taylor", "Stress", "San Francisco", "Female", "Mandarin", "Chinese", "Male", "Chinese"),
        client("Michael Brown", "Grief", "Miami", "Male", "English", "American", "Female", "Cuban"),
    ];

    // John Doe -> Alice, Bob; Jane Smith -> Bob, Charlie
    let ratings = vec![
        SeedRating { client: 0, provider: 0, rating: Some(5) },
        SeedRating { client: 0, provider: 1, rating: Some(3) },
        SeedRating { client: 1, provider: 1, rating: Some(4) },
        SeedRating { client: 1, provider: 2, rating: Some(5) },
    ];

    SeedData { providers, clients, ratings }
}
