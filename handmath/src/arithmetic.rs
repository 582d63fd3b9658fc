use crate::digits::{count_digits_fast, from_digits, to_digits};
use crate::error::MathError;

/// Addition by carry propagation: xor adds without carries, the and picks
/// the carry bits to re-feed shifted left. Terminates once the carry dies.
pub fn bitwise_add(x: i64, y: i64) -> Result<i64, MathError> {
    let (mut a, mut b) = (x, y);
    while b != 0 {
        let carry = a & b;
        a ^= b;
        b = carry << 1;
    }
    if ((x ^ a) & (y ^ a)) < 0 {
        return Err(MathError::Overflow(format!("{} + {} exceeds i64", x, y)));
    }
    Ok(a)
}

/// Subtraction via borrow propagation; `!a & b` marks positions that
/// need to borrow from the next bit up.
pub fn bitwise_sub(x: i64, y: i64) -> Result<i64, MathError> {
    let (mut a, mut b) = (x, y);
    while b != 0 {
        let borrow = !a & b;
        a ^= b;
        b = borrow << 1;
    }
    check_sub_overflow(x, y, a)
}

/// Subtraction by two's-complement negation feeding the addition carry
/// loop. Must agree bit for bit with [`bitwise_sub`].
pub fn bitwise_sub_fast(x: i64, y: i64) -> Result<i64, MathError> {
    let (mut a, mut b) = (x, y.wrapping_neg());
    while b != 0 {
        let carry = a & b;
        a ^= b;
        b = carry << 1;
    }
    check_sub_overflow(x, y, a)
}

fn check_sub_overflow(x: i64, y: i64, result: i64) -> Result<i64, MathError> {
    if ((x ^ y) & (x ^ result)) < 0 {
        return Err(MathError::Overflow(format!("{} - {} exceeds i64", x, y)));
    }
    Ok(result)
}

/// Naive baseline: multiplication as repeated addition of `x`, `y` times.
pub fn slow_mul(x: i64, y: i64) -> Result<i64, MathError> {
    let mut result: i64 = 0;
    for _ in 0..y {
        result = result
            .checked_add(x)
            .ok_or_else(|| MathError::Overflow(format!("{} * {} exceeds i64", x, y)))?;
    }
    Ok(result)
}

/// Schoolbook multiplication over little-endian digit arrays, carrying
/// per position exactly as done by hand. Non-negative operands only.
pub fn long_mul(x: i64, y: i64) -> Result<i64, MathError> {
    if x < 0 || y < 0 {
        return Err(MathError::Domain(format!(
            "long multiplication takes non-negative operands, got {} * {}",
            x, y
        )));
    }
    let xd = to_digits(x);
    let yd = to_digits(y);
    let mut product = vec![0u32; xd.len() + yd.len()];
    for (yi, &dy) in yd.iter().enumerate() {
        let mut carry = 0u32;
        for (xi, &dx) in xd.iter().enumerate() {
            let cell = product[xi + yi] + carry + dx as u32 * dy as u32;
            product[xi + yi] = cell % 10;
            carry = cell / 10;
        }
        product[yi + xd.len()] += carry;
    }
    let digits: Vec<u8> = product.into_iter().map(|d| d as u8).collect();
    from_digits(&digits)
}

/// Divide-and-conquer multiplication: split both operands at half the
/// wider one's digit count and recombine three recursive sub-products.
/// Accepts any sign; the magnitudes are multiplied and the sign patched
/// back on afterwards.
pub fn karatsuba_mul(x: i64, y: i64) -> Result<i64, MathError> {
    if x == i64::MIN || y == i64::MIN {
        return Err(MathError::Overflow(format!("{} * {} exceeds i64", x, y)));
    }
    let product = karatsuba(x.abs(), y.abs())?;
    if (x < 0) != (y < 0) {
        Ok(-product)
    } else {
        Ok(product)
    }
}

fn karatsuba(x: i64, y: i64) -> Result<i64, MathError> {
    if x < 10 || y < 10 {
        return checked_mul(x, y);
    }
    let m = count_digits_fast(x.max(y)) / 2;
    let split = pow10(m)?;

    let (high1, low1) = (x / split, x % split);
    let (high2, low2) = (y / split, y % split);

    let a = karatsuba(high1, high2)?;
    let c = karatsuba(low1, low2)?;
    let d = karatsuba(high1 + low1, high2 + low2)?;

    let high_term = checked_mul(a, pow10(2 * m)?)?;
    let mid_term = checked_mul(d - a - c, split)?;
    high_term
        .checked_add(mid_term)
        .and_then(|s| s.checked_add(c))
        .ok_or_else(|| MathError::Overflow(format!("{} * {} exceeds i64", x, y)))
}

fn checked_mul(x: i64, y: i64) -> Result<i64, MathError> {
    x.checked_mul(y)
        .ok_or_else(|| MathError::Overflow(format!("{} * {} exceeds i64", x, y)))
}

fn pow10(exponent: usize) -> Result<i64, MathError> {
    let mut power: i64 = 1;
    for _ in 0..exponent {
        power = power
            .checked_mul(10)
            .ok_or_else(|| MathError::Overflow(format!("10^{} exceeds i64", exponent)))?;
    }
    Ok(power)
}

/// Naive baseline: division as repeated subtraction.
pub fn slow_div(dividend: i64, divisor: i64) -> Result<i64, MathError> {
    if dividend < 0 || divisor <= 0 {
        return Err(MathError::Domain(format!(
            "slow division takes dividend >= 0 and divisor > 0, got {} / {}",
            dividend, divisor
        )));
    }
    let mut dividend = dividend;
    let mut quotient = 0;
    while dividend >= divisor {
        dividend -= divisor;
        quotient += 1;
    }
    Ok(quotient)
}

/// Restoring binary long division. Finds the largest power-of-two
/// multiple of the divisor fitting the dividend, then walks back down
/// subtracting and setting quotient bits. Truncates toward zero.
pub fn long_div(dividend: i64, divisor: i64) -> Result<i64, MathError> {
    if divisor == 0 {
        return Err(MathError::Domain(format!("division by zero: {} / 0", dividend)));
    }
    let negative = (dividend < 0) != (divisor < 0);
    let magnitude = long_div_magnitude(dividend.unsigned_abs(), divisor.unsigned_abs());
    if negative {
        Ok((magnitude as i64).wrapping_neg())
    } else if magnitude > i64::MAX as u64 {
        // only i64::MIN / -1 lands here
        Err(MathError::Overflow(format!("{} / {} exceeds i64", dividend, divisor)))
    } else {
        Ok(magnitude as i64)
    }
}

fn long_div_magnitude(mut dividend: u64, divisor: u64) -> u64 {
    if divisor > dividend {
        return 0;
    }
    if divisor == dividend {
        return 1;
    }
    // Shift divisor and a unit bit up in lockstep while a doubling still
    // fits under the dividend.
    let mut denominator = divisor;
    let mut current: u64 = 1;
    while denominator <= dividend >> 1 {
        denominator <<= 1;
        current <<= 1;
    }
    let mut quotient = 0;
    while current != 0 {
        if dividend >= denominator {
            dividend -= denominator;
            quotient |= current;
        }
        current >>= 1;
        denominator >>= 1;
    }
    quotient
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub() -> Result<(), MathError> {
        assert_eq!(bitwise_add(24, 89)?, 113);
        assert_eq!(bitwise_add(-24, 89)?, 65);
        assert_eq!(bitwise_add(0, 0)?, 0);
        assert_eq!(bitwise_sub(89, 24)?, 65);
        assert_eq!(bitwise_sub(24, 89)?, -65);
        assert_eq!(bitwise_sub_fast(89, 24)?, 65);
        assert_eq!(bitwise_sub_fast(-5, -9)?, 4);
        Ok(())
    }

    #[test]
    fn sub_variants_agree() -> Result<(), MathError> {
        for (x, y) in [(0, 0), (7, 3), (3, 7), (-12, 5), (5, -12), (-4, -9)] {
            assert_eq!(bitwise_sub(x, y)?, bitwise_sub_fast(x, y)?);
        }
        Ok(())
    }

    #[test]
    fn add_overflow_detected() {
        assert!(matches!(
            bitwise_add(i64::MAX, 1),
            Err(MathError::Overflow(_))
        ));
        assert!(matches!(
            bitwise_sub(i64::MIN, 1),
            Err(MathError::Overflow(_))
        ));
        assert!(matches!(
            bitwise_sub_fast(1, i64::MIN),
            Err(MathError::Overflow(_))
        ));
    }

    #[test]
    fn multiplication_variants() -> Result<(), MathError> {
        assert_eq!(long_mul(24, 89)?, 2136);
        assert_eq!(long_mul(0, 89)?, 0);
        assert_eq!(long_mul(1003, 70_009)?, 1003 * 70_009);
        assert_eq!(karatsuba_mul(24, 89)?, 2136);
        assert_eq!(karatsuba_mul(-24, 89)?, -2136);
        assert_eq!(karatsuba_mul(-24, -89)?, 2136);
        assert_eq!(karatsuba_mul(12_345_678, 98_765_432)?, 12_345_678 * 98_765_432);
        assert_eq!(slow_mul(24, 89)?, 2136);
        Ok(())
    }

    #[test]
    fn long_mul_rejects_negatives() {
        assert!(matches!(long_mul(-2, 3), Err(MathError::Domain(_))));
    }

    #[test]
    fn division() -> Result<(), MathError> {
        assert_eq!(long_div(89, 24)?, 3);
        assert_eq!(long_div(24, 89)?, 0);
        assert_eq!(long_div(24, 24)?, 1);
        // truncation toward zero, same as native integer division
        assert_eq!(long_div(-7, 2)?, -3);
        assert_eq!(long_div(7, -2)?, -3);
        assert_eq!(long_div(-7, -2)?, 3);
        assert_eq!(long_div(i64::MIN, 2)?, i64::MIN / 2);
        assert_eq!(slow_div(89, 24)?, 3);
        Ok(())
    }

    #[test]
    fn division_errors() {
        assert!(matches!(long_div(5, 0), Err(MathError::Domain(_))));
        assert!(matches!(
            long_div(i64::MIN, -1),
            Err(MathError::Overflow(_))
        ));
    }
}
