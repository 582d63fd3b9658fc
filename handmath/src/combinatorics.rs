use crate::error::MathError;

/// Recursive factorial over reals. Negative arguments keep the source
/// convention `(-n)! == -(n!)`; only integer-valued inputs terminate.
pub fn factorial(n: f64) -> f64 {
    if n == 0.0 || n == 1.0 {
        1.0
    } else if n > 1.0 {
        n * factorial(n - 1.0)
    } else {
        let n = -n;
        -(n * factorial(n - 1.0))
    }
}

/// Exponentiation by squaring. A negative exponent divides the squared
/// sub-result by the base, which is exact only when divisible.
pub fn int_pow(base: i64, exponent: i32) -> Result<i64, MathError> {
    if exponent == 0 {
        return Ok(1);
    }
    if base == 0 && exponent < 0 {
        return Err(MathError::Domain(format!(
            "0 cannot be raised to negative exponent {}",
            exponent
        )));
    }
    let half = int_pow(base, exponent / 2)?;
    let squared = half
        .checked_mul(half)
        .ok_or_else(|| overflow(base, exponent))?;
    if exponent % 2 == 0 {
        Ok(squared)
    } else if exponent > 0 {
        base.checked_mul(squared)
            .ok_or_else(|| overflow(base, exponent))
    } else {
        Ok(squared / base)
    }
}

fn overflow(base: i64, exponent: i32) -> MathError {
    MathError::Overflow(format!("{}^{} exceeds i64", base, exponent))
}

/// Naive power by repeated multiplication; the exponent only makes sense
/// as a non-negative integer count of factors.
pub fn float_pow(base: f64, exponent: f64) -> f64 {
    let mut product = 1.0;
    let mut i = 0.0;
    while i < exponent {
        product *= base;
        i += 1.0;
    }
    product
}

/// nPk: the product `n * (n-1) * ... * (n-k+1)`.
pub fn permutation(n: i64, k: i64) -> Result<i64, MathError> {
    if k > n || k < 0 {
        return Err(MathError::Domain(format!(
            "nPk needs 0 <= k <= n, got n={} k={}",
            n, k
        )));
    }
    let mut product: i64 = 1;
    let mut i = n;
    while i > n - k {
        product = product
            .checked_mul(i)
            .ok_or_else(|| MathError::Overflow(format!("{}P{} exceeds i64", n, k)))?;
        i -= 1;
    }
    Ok(product)
}

/// nCk via a floating-point running product seeded with the reciprocal
/// of the smaller half's factorial, so no intermediate integer overflows;
/// rounded up to recover the exact count.
pub fn combination(n: i64, k: i64) -> Result<i64, MathError> {
    if k > n || k < 0 {
        return Err(MathError::Domain(format!(
            "nCk needs 0 <= k <= n, got n={} k={}",
            n, k
        )));
    }
    let (limit, smaller) = if k > n - k { (k, n - k) } else { (n - k, k) };
    let mut product = 1.0 / factorial(smaller as f64);
    let mut i = n;
    while i > limit {
        product *= i as f64;
        i -= 1;
    }
    Ok(product.ceil() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorials() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(9.0), 362880.0);
        // negative-argument sign convention
        assert_eq!(factorial(-4.0), -24.0);
    }

    #[test]
    fn integer_power() -> Result<(), MathError> {
        assert_eq!(int_pow(2, 5)?, 32);
        assert_eq!(int_pow(10, 0)?, 1);
        assert_eq!(int_pow(-3, 3)?, -27);
        assert_eq!(int_pow(7, 1)?, 7);
        // negative exponents are truncating, not rational
        assert_eq!(int_pow(2, -1)?, 0);
        Ok(())
    }

    #[test]
    fn integer_power_errors() {
        assert!(matches!(int_pow(0, -2), Err(MathError::Domain(_))));
        assert!(matches!(int_pow(10, 40), Err(MathError::Overflow(_))));
    }

    #[test]
    fn float_power() {
        assert_eq!(float_pow(2.0, 5.0), 32.0);
        assert_eq!(float_pow(2.0, 0.0), 1.0);
        assert_eq!(float_pow(1.5, 2.0), 2.25);
    }

    #[test]
    fn permutations_and_combinations() -> Result<(), MathError> {
        assert_eq!(permutation(8, 4)?, 1680);
        assert_eq!(permutation(5, 0)?, 1);
        assert_eq!(combination(8, 4)?, 70);
        assert_eq!(combination(52, 5)?, 2_598_960);
        assert_eq!(combination(6, 0)?, 1);
        Ok(())
    }

    #[test]
    fn k_larger_than_n_rejected() {
        assert!(matches!(permutation(4, 8), Err(MathError::Domain(_))));
        assert!(matches!(combination(4, 8), Err(MathError::Domain(_))));
    }
}
