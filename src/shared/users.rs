use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::clock::Clock;
use super::timestamp::format_timestamp;

/// Placeholder user record produced by [`generate_mock_user`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

const NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "Diana", "Eve"];
const DOMAINS: [&str; 3] = ["example.com", "test.org", "demo.net"];

/// Builds the deterministic sample user for `id`.
///
/// The name and email domain are picked by wrapping `id` around two fixed
/// lists, so the same id always yields the same name and address. Only
/// `created_at` varies between calls, stamped from `clock`. Indexing uses
/// `rem_euclid`, so negative ids wrap from the end of each list: `-1`
/// selects `Eve` and `demo.net`.
pub fn generate_mock_user(id: i64, clock: &impl Clock) -> MockUser {
    let name = NAMES[id.rem_euclid(NAMES.len() as i64) as usize];
    let domain = DOMAINS[id.rem_euclid(DOMAINS.len() as i64) as usize];

    MockUser {
        id,
        name: name.to_string(),
        email: format!("{}{}@{}", name.to_lowercase(), id, domain),
        created_at: format_timestamp(&clock.now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::MockClock;
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .return_const(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        clock
    }

    #[test]
    fn test_user_for_id_one() {
        let user = generate_mock_user(1, &fixed_clock());

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "bob1@test.org");
        assert_eq!(user.created_at, "2024-01-15 10:30:00 UTC");
    }

    #[test]
    fn test_lists_wrap_independently() {
        // 5 names versus 3 domains: the indices drift apart as ids grow.
        let user = generate_mock_user(0, &fixed_clock());
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice0@example.com");

        let user = generate_mock_user(5, &fixed_clock());
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice5@demo.net");

        let user = generate_mock_user(7, &fixed_clock());
        assert_eq!(user.name, "Charlie");
        assert_eq!(user.email, "charlie7@test.org");
    }

    #[test]
    fn test_negative_ids_wrap_from_the_end() {
        let user = generate_mock_user(-1, &fixed_clock());
        assert_eq!(user.name, "Eve");
        assert_eq!(user.email, "eve-1@demo.net");

        let user = generate_mock_user(-3, &fixed_clock());
        assert_eq!(user.name, "Charlie");
        assert_eq!(user.email, "charlie-3@example.com");
    }

    #[test]
    fn test_same_id_is_deterministic_apart_from_created_at() {
        let first = generate_mock_user(42, &fixed_clock());
        let second = generate_mock_user(42, &fixed_clock());

        assert_eq!(first, second);
    }

    #[test]
    fn test_email_always_uses_a_fixed_domain() {
        for id in -20..20 {
            let user = generate_mock_user(id, &fixed_clock());
            let domain = user.email.split('@').next_back().unwrap();
            assert!(
                DOMAINS.contains(&domain),
                "unexpected domain in {}",
                user.email
            );
            assert!(user.email.starts_with(&user.name.to_lowercase()));
        }
    }

    #[test]
    fn test_serializes_created_at_in_camel_case() {
        let user = generate_mock_user(1, &fixed_clock());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["createdAt"], "2024-01-15 10:30:00 UTC");
        assert!(json.get("created_at").is_none());
    }
}
