use rand::{distributions::Alphanumeric, Rng};

pub const SLUG_LEN: usize = 10;

/// Random `[A-Za-z0-9]{10}` token. Uniqueness is enforced by the database.
pub fn generate_slug() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SLUG_LEN)
        .map(char::from)
        .collect()
}

/// Cheap shape check so obviously malformed paths skip the lookup.
pub fn is_well_formed(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= 64 && slug.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slug_shape() {
        let slug = generate_slug();
        assert_eq!(slug.len(), SLUG_LEN);
        assert!(is_well_formed(&slug));
    }

    #[test]
    fn test_slugs_do_not_repeat() {
        let slugs: HashSet<String> = (0..1000).map(|_| generate_slug()).collect();
        assert_eq!(slugs.len(), 1000);
    }

    #[test]
    fn test_malformed_slugs() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("../etc"));
        assert!(!is_well_formed("has space"));
        assert!(!is_well_formed(&"a".repeat(65)));
    }
}
