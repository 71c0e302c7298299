//! Pattern-based identifier generator.
//!
//! Supports placeholders:
//! - `{upper:N}` - N random uppercase letters
//! - `{digit:N}` - N random digits
//! - `{alnum:N}` - N random uppercase letters or digits
//!
//! Anything else, including malformed placeholders, is copied through
//! unchanged.

use rand::Rng;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };

        match expand_placeholder(&tail[1..end], rng) {
            Some(expanded) => result.push_str(&expanded),
            None => result.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    // Whatever is left has no complete placeholder in it
    result.push_str(rest);
    result
}

fn expand_placeholder<R: Rng>(spec: &str, rng: &mut R) -> Option<String> {
    let (class, count) = spec.split_once(':')?;
    let count: usize = count.parse().ok()?;
    let alphabet = match class {
        "upper" => UPPER,
        "digit" => DIGITS,
        "alnum" => ALNUM,
        _ => return None,
    };
    Some(random_chars(rng, alphabet, count))
}

/// Generate `count` characters drawn uniformly from `alphabet`.
pub fn random_chars<R: Rng>(rng: &mut R, alphabet: &[u8], count: usize) -> String {
    (0..count)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("code-{digit:6}", &mut rng);

        assert!(s.starts_with("code-"));
        assert_eq!(s.len(), 5 + 6);
        assert!(s[5..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_pattern_multiple_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("US{alnum:9}{digit:1}", &mut rng);

        assert_eq!(s.len(), 12);
        assert!(s.starts_with("US"));
        assert!(s[2..11]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert!(s[11..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_pattern_upper() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = generate_pattern("{upper:4}", &mut rng);

        assert_eq!(s.len(), 4);
        assert!(s.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(generate_pattern("a{bogus:3}b", &mut rng), "a{bogus:3}b");
        assert_eq!(generate_pattern("a{digit:x}b", &mut rng), "a{digit:x}b");
        assert_eq!(generate_pattern("open {digit:2", &mut rng), "open {digit:2");
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_pattern("{alnum:9}", &mut rng1),
            generate_pattern("{alnum:9}", &mut rng2)
        );
    }
}
