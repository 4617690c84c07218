//! Random, Kubernetes-safe names for generated pull secrets.

use pkg_constants::names::PULL_SECRET_NAME_PREFIX;
use rand::Rng;

#[rustfmt::skip]
const ADJECTIVES: &[&str] = &[
    "brave", "calm", "eager", "fancy", "gentle",
    "happy", "jolly", "kind", "lucky", "mighty",
    "nice", "proud", "quick", "sharp", "smart",
    "sunny", "swift", "wise", "bold", "cool",
];

#[rustfmt::skip]
const FIRST_NAMES: &[&str] = &[
    "john", "james", "robert", "michael", "william",
    "david", "richard", "joseph", "thomas", "charles",
    "daniel", "matthew", "anthony", "mark", "steven",
    "paul", "andrew", "joshua", "kevin", "brian",
    "george", "edward", "timothy", "jason", "ryan",
    "jacob", "nicholas", "eric", "jonathan", "justin",
    "scott", "brandon", "benjamin", "samuel", "patrick",
    "jack", "tyler", "aaron", "henry", "adam",
    "nathan", "kyle", "jeremy", "sean", "ethan",
    "noah", "jordan", "dylan", "gabriel", "vincent",

    "oliver", "leo", "liam", "lucas", "felix",
    "max", "emil", "anton", "leon", "lukas",
    "tobias", "jonas", "simon", "fabian", "marco",
    "sebastian", "manuel", "ivan", "nikola", "milan",
    "stefano", "lorenzo", "giovanni", "pierre", "luc",
    "antoine", "julien", "carlos", "miguel", "diego",
    "javier", "antonio", "rafael", "pablo", "andres",
    "oleg", "dmitri", "alexei", "roman", "kasper",
    "anders", "lars", "mikkel", "henrik", "oskar", "christian",

    "emma", "olivia", "ava", "sophia", "isabella",
    "mia", "amelia", "charlotte", "harper", "evelyn",
    "abigail", "emily", "elizabeth", "sofia", "avery",
    "scarlett", "grace", "chloe", "victoria", "riley",
    "arabella", "lily", "hannah", "ella", "nora",
    "zoe", "lila", "clara", "julia", "sarah",
    "maria", "anna", "kate", "paula", "laura",
    "lucia", "isabel", "camila", "alice", "amelie",
    "sophie", "leonie", "marie", "mia", "emilia",
    "eva", "elena", "katharina", "lena", "julia",
];

/// Generate a pull secret name like `pullsecret-brave-john-1a2b`.
///
/// Every segment is lowercase ASCII and the suffix is 4 hex chars, so
/// the result always passes Kubernetes name validation.
pub fn generate_pull_secret_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let suffix: u16 = rng.r#gen();

    format!(
        "{}-{}-{}-{:04x}",
        PULL_SECRET_NAME_PREFIX, adjective, name, suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::validate::validate_name;
    use std::collections::HashSet;

    #[test]
    fn test_name_starts_with_prefix() {
        assert!(generate_pull_secret_name().starts_with("pullsecret-"));
    }

    #[test]
    fn test_name_has_expected_format() {
        let name = generate_pull_secret_name();
        let parts: Vec<&str> = name.split('-').collect();
        assert_eq!(parts.len(), 4, "unexpected shape: {}", name);
        assert_eq!(parts[0], "pullsecret");
        assert!(ADJECTIVES.contains(&parts[1]));
        assert!(FIRST_NAMES.contains(&parts[2]));
        assert_eq!(parts[3].len(), 4);
        assert!(parts[3].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_name_only_uses_allowed_chars() {
        let name = generate_pull_secret_name();
        assert!(
            name.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "invalid char in: {}",
            name
        );
    }

    #[test]
    fn test_name_passes_kubernetes_validation() {
        for _ in 0..20 {
            let name = generate_pull_secret_name();
            assert!(validate_name(&name).is_ok(), "invalid name: {}", name);
        }
    }

    #[test]
    fn test_repeated_generation_is_unique() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let name = generate_pull_secret_name();
            assert!(seen.insert(name.clone()), "duplicate name: {}", name);
        }
    }
}
