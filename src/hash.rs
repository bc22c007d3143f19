/// Polynomial rolling hash used to seed the daily selection.
///
/// Runs `h = h * 31 + unit` over UTF-16 code units with 32-bit signed wrapping and
/// returns the magnitude, so `"2024-01-10"` maps to the same index on every run.
pub fn seed_hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(seed_hash(""), 0);
    }

    #[test]
    fn matches_small_hand_computed_values() {
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn is_stable_for_date_keys() {
        let first = seed_hash("2024-01-10");
        for _ in 0..10 {
            assert_eq!(seed_hash("2024-01-10"), first);
        }
        assert_ne!(seed_hash("2024-01-10"), seed_hash("2024-01-11"));
    }

    #[test]
    fn wraps_in_signed_32_bits_then_takes_magnitude() {
        // The i32 accumulator ends at -613341602 for this key.
        assert_eq!(seed_hash("2024-01-10"), 613341602);
        assert_eq!(seed_hash("2024-01-11"), 613341601);
        assert_eq!(seed_hash("2024-01-13") % 100, 99);
    }

    #[test]
    fn i32_min_maps_to_its_magnitude() {
        assert_eq!(seed_hash("I<F;H@"), 2147483648);
    }
}
