//! Operand generation
//!
//! Produces the four base numbers for a round. Duplicates are permitted and
//! expected; each value is drawn independently.

use rand::Rng;

use crate::consts::{OPERAND_COUNT, OPERAND_MAX, OPERAND_MIN};

/// Generate the four board operands, each uniform in [OPERAND_MIN, OPERAND_MAX].
pub fn generate_operands<R: Rng>(rng: &mut R) -> [i64; OPERAND_COUNT] {
    std::array::from_fn(|_| rng.random_range(OPERAND_MIN..=OPERAND_MAX))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_operands_in_range() {
        let mut rng = Pcg32::seed_from_u64(12345);
        for _ in 0..2_500 {
            for value in generate_operands(&mut rng) {
                assert!((OPERAND_MIN..=OPERAND_MAX).contains(&value));
            }
        }
    }

    #[test]
    fn test_operands_approximately_uniform() {
        // Chi-square goodness of fit over 10,000 draws. Critical value for
        // 9 degrees of freedom at p = 0.01 is 21.67.
        let mut rng = Pcg32::seed_from_u64(6789);
        let mut counts = [0u32; 10];
        for _ in 0..2_500 {
            for value in generate_operands(&mut rng) {
                counts[(value - OPERAND_MIN) as usize] += 1;
            }
        }

        let expected = 1_000.0;
        let chi2: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi2 < 21.67, "chi-square too high: {chi2}");
    }
}
