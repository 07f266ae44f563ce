//! Utility functions for common operations.

use rand::Rng;

use crate::models::knowledge::{ESTIMATE_SCALE, VELOCITY_MAX, VELOCITY_MIN};

/// Strip control characters from user-entered text so it is safe to hand
/// to the rendering surface. Escape sequences in pasted text would
/// otherwise be written straight into terminal cells. Printable content
/// passes through unchanged.
pub fn sanitize_display(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Sample a sprint velocity uniformly from the inclusive range [20, 35].
pub fn sample_velocity<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(VELOCITY_MIN..=VELOCITY_MAX)
}

/// Sample a simulated team estimate uniformly from the fixed scale.
pub fn sample_estimate<R: Rng>(rng: &mut R) -> u32 {
    ESTIMATE_SCALE[rng.gen_range(0..ESTIMATE_SCALE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sanitize_display_plain_text() {
        assert_eq!(sanitize_display("hello world"), "hello world");
    }

    #[test]
    fn test_sanitize_display_strips_escape_sequences() {
        assert_eq!(sanitize_display("a\x1b[31mred\x1b[0mb"), "a[31mred[0mb");
    }

    #[test]
    fn test_sanitize_display_strips_newlines_and_tabs() {
        assert_eq!(sanitize_display("one\ntwo\tthree"), "onetwothree");
    }

    #[test]
    fn test_sanitize_display_keeps_unicode() {
        assert_eq!(sanitize_display("vélocité ✨"), "vélocité ✨");
    }

    #[test]
    fn test_sample_velocity_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = sample_velocity(&mut rng);
            assert!((VELOCITY_MIN..=VELOCITY_MAX).contains(&v));
        }
    }

    #[test]
    fn test_sample_velocity_reaches_both_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..10_000 {
            match sample_velocity(&mut rng) {
                VELOCITY_MIN => saw_min = true,
                VELOCITY_MAX => saw_max = true,
                _ => {}
            }
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn test_sample_estimate_is_on_scale() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = sample_estimate(&mut rng);
            assert!(ESTIMATE_SCALE.contains(&v));
        }
    }
}
