use crate::error::MathError;

/// Decimal digits of `x`, least significant first. Zero maps to `[0]`.
/// Negative input is the caller's problem; only the magnitude's digits
/// are meaningful here.
pub fn to_digits(mut x: i64) -> Vec<u8> {
    if x == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while x != 0 {
        digits.push((x % 10) as u8);
        x /= 10;
    }
    digits
}

/// Reassembles a little-endian digit sequence into an integer.
pub fn from_digits(digits: &[u8]) -> Result<i64, MathError> {
    let mut number: i64 = 0;
    for &digit in digits.iter().rev() {
        number = number
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit as i64))
            .ok_or_else(|| {
                MathError::Overflow(format!("digit sequence {:?} exceeds i64", digits))
            })?;
    }
    Ok(number)
}

/// Digit count by repeated division.
pub fn count_digits(mut x: i64) -> usize {
    if x == 0 {
        return 1;
    }
    let mut count = 0;
    while x != 0 {
        x /= 10;
        count += 1;
    }
    count
}

/// Digit count via the decimal rendering; agrees with [`count_digits`].
pub fn count_digits_fast(x: i64) -> usize {
    if x < 0 {
        x.to_string().len() - 1
    } else {
        x.to_string().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_round_trip() -> Result<(), MathError> {
        for x in [0, 1, 9, 10, 23, 99, 100, 12345, 1_000_000_007, i64::MAX] {
            assert_eq!(from_digits(&to_digits(x))?, x);
        }
        Ok(())
    }

    #[test]
    fn little_endian_order() {
        assert_eq!(to_digits(23), vec![3, 2]);
        assert_eq!(to_digits(0), vec![0]);
        assert_eq!(to_digits(905), vec![5, 0, 9]);
    }

    #[test]
    fn digit_counts_agree() {
        for x in [0, 5, 9, 10, 99, 100, 101, 999_999, 1_000_000, i64::MAX] {
            assert_eq!(count_digits(x), count_digits_fast(x), "x={}", x);
        }
        assert_eq!(count_digits(-345), count_digits_fast(-345));
    }

    #[test]
    fn from_digits_overflow() {
        // twenty nines cannot fit in an i64
        let digits = vec![9u8; 20];
        assert!(matches!(from_digits(&digits), Err(MathError::Overflow(_))));
    }
}
