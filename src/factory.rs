//! Kind-specific exercise constructors.
//!
//! Invalid exercises are made impossible by construction rather than filtered:
//! subtraction orders its operands, division builds the dividend as a product.

use rand::Rng;

use crate::domain::{Exercise, ExerciseKind, OperandRange};
use crate::random::sample;

pub fn addition<R: Rng + ?Sized>(range: OperandRange, rng: &mut R) -> Exercise {
    let a = sample(rng, range.min(), range.max());
    let b = sample(rng, range.min(), range.max());
    Exercise::new(ExerciseKind::Add, a.into(), b.into())
}

/// Minuend is never smaller than the subtrahend.
pub fn subtraction<R: Rng + ?Sized>(range: OperandRange, rng: &mut R) -> Exercise {
    let mut a = sample(rng, range.min(), range.max());
    let mut b = sample(rng, range.min(), range.max());
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    Exercise::new(ExerciseKind::Sub, a.into(), b.into())
}

pub fn multiplication<R: Rng + ?Sized>(range: OperandRange, rng: &mut R) -> Exercise {
    let a = sample(rng, range.min(), range.max());
    let b = sample(rng, range.min(), range.max());
    Exercise::new(ExerciseKind::Mult, a.into(), b.into())
}

/// `dividend = divisor * quotient`, so the result is always a whole number in range.
pub fn division<R: Rng + ?Sized>(range: OperandRange, rng: &mut R) -> Exercise {
    let divisor = u64::from(sample(rng, range.min(), range.max()));
    let quotient = u64::from(sample(rng, range.min(), range.max()));
    Exercise::new(ExerciseKind::Div, divisor * quotient, divisor)
}

pub fn make_exercise<R: Rng + ?Sized>(kind: ExerciseKind, range: OperandRange, rng: &mut R) -> Exercise {
    match kind {
        ExerciseKind::Add => addition(range, rng),
        ExerciseKind::Sub => subtraction(range, rng),
        ExerciseKind::Mult => multiplication(range, rng),
        ExerciseKind::Div => division(range, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn range(min: u32, max: u32) -> OperandRange {
        OperandRange::new(min, max).unwrap()
    }

    #[test]
    fn test_addition_format_and_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let r = range(1, 99);
        for _ in 0..500 {
            let ex = addition(r, &mut rng);
            assert_eq!(ex.kind(), ExerciseKind::Add);
            assert!(r.contains(ex.left()) && r.contains(ex.right()));
            assert_eq!(ex.display_text(), format!("{} + {} = ", ex.left(), ex.right()));
            assert_eq!(ex.dedup_key(), format!("{}+{}", ex.left(), ex.right()));
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut rng = StdRng::seed_from_u64(12);
        let r = range(1, 99);
        for _ in 0..2_000 {
            let ex = subtraction(r, &mut rng);
            assert!(ex.left() >= ex.right(), "{} would go negative", ex.display_text());
            assert!(r.contains(ex.left()) && r.contains(ex.right()));
            assert_eq!(ex.dedup_key(), format!("{}-{}", ex.left(), ex.right()));
            assert!(ex.display_text().ends_with("= "));
        }
    }

    #[test]
    fn test_multiplication_uses_times_glyph() {
        let mut rng = StdRng::seed_from_u64(13);
        let ex = multiplication(range(1, 11), &mut rng);
        assert_eq!(ex.display_text(), format!("{} × {} = ", ex.left(), ex.right()));
        assert_eq!(ex.dedup_key(), format!("{}×{}", ex.left(), ex.right()));
    }

    #[test]
    fn test_division_is_always_exact() {
        let mut rng = StdRng::seed_from_u64(14);
        let r = range(1, 11);
        for _ in 0..2_000 {
            let ex = division(r, &mut rng);
            let (dividend, divisor) = (ex.left(), ex.right());
            assert_eq!(dividend % divisor, 0, "{} leaves a remainder", ex.display_text());
            assert!(r.contains(divisor));
            assert!(r.contains(dividend / divisor));
            assert_eq!(ex.dedup_key(), format!("{}:{}", dividend, divisor));
        }
    }

    #[test]
    fn test_division_large_range_does_not_overflow() {
        let mut rng = StdRng::seed_from_u64(15);
        let ex = division(range(u32::MAX, u32::MAX), &mut rng);
        assert_eq!(ex.left(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_make_exercise_dispatches_by_kind() {
        let mut rng = StdRng::seed_from_u64(16);
        for kind in [ExerciseKind::Add, ExerciseKind::Sub, ExerciseKind::Mult, ExerciseKind::Div] {
            assert_eq!(make_exercise(kind, range(1, 5), &mut rng).kind(), kind);
        }
    }
}
