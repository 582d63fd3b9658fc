use crate::combinatorics::{factorial, float_pow};
use crate::error::MathError;
use std::f64::consts::{LN_10, PI};

/// Step cap for the iterative square roots. Heron converges long before
/// this; the halving search can oscillate, which is what the cap catches.
const MAX_REFINEMENTS: u32 = 10_000;

/// sin(x) from the Maclaurin series, accumulating `terms` corrections
/// past the leading `x`.
pub fn sine(x: f64, terms: u32) -> f64 {
    let mut value = x;
    let mut power = 3.0;
    let mut sign = -1.0;
    for _ in 0..terms {
        value += sign * float_pow(x, power) / factorial(power);
        sign = -sign;
        power += 2.0;
    }
    value
}

/// cos(x), the even-power sibling of [`sine`].
pub fn cosine(x: f64, terms: u32) -> f64 {
    let mut value = 1.0;
    let mut power = 2.0;
    let mut sign = -1.0;
    for _ in 0..terms {
        value += sign * float_pow(x, power) / factorial(power);
        sign = -sign;
        power += 2.0;
    }
    value
}

/// tan(x) as sin/cos; blows up near odd multiples of pi/2 as expected.
pub fn tangent(x: f64, terms: u32) -> f64 {
    sine(x, terms) / cosine(x, terms)
}

/// arcsin(x) from its Maclaurin series, with the odd/even double
/// factorials kept as running products.
pub fn arcsine(x: f64, terms: u32) -> Result<f64, MathError> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(MathError::Domain(format!(
            "arcsin needs -1 <= x <= 1, got {}",
            x
        )));
    }
    let mut value = x;
    let mut odd = 1.0;
    let mut odd_product = 1.0;
    let mut even = 2.0;
    let mut even_product = 2.0;
    let mut power = 3.0;
    for _ in 0..terms {
        value += (odd_product / even_product) * (float_pow(x, power) / power);
        power += 2.0;
        odd += 2.0;
        odd_product *= odd;
        even += 2.0;
        even_product *= even;
    }
    Ok(value)
}

/// arccos(x) = pi/2 - arcsin(x).
pub fn arccosine(x: f64, terms: u32) -> Result<f64, MathError> {
    Ok(PI / 2.0 - arcsine(x, terms)?)
}

/// arctan(x). Inside the unit interval the alternating series applies
/// directly; outside it the series is evaluated at 1/x and folded back
/// through arctan(x) = ±pi/2 - arctan(1/x).
pub fn arctangent(x: f64, terms: u32) -> f64 {
    let inside = x > -1.0 && x < 1.0;
    let t = if inside { x } else { 1.0 / x };
    // tail past the leading term: t^3/3 - t^5/5 + t^7/7 - ...
    let mut tail = 0.0;
    let mut power = 3.0;
    let mut denominator = 3.0;
    let mut sign = 1.0;
    for _ in 0..terms {
        tail += sign * float_pow(t, power) / denominator;
        sign = -sign;
        denominator += 2.0;
        power += 2.0;
    }
    if inside {
        x - tail
    } else if x >= 1.0 {
        PI / 2.0 - 1.0 / x + tail
    } else {
        -PI / 2.0 - 1.0 / x + tail
    }
}

/// e^x as `1 + x + sum of x^k/k!` for k in 2..terms+2.
pub fn exponential(x: f64, terms: u32) -> f64 {
    let mut value = 1.0 + x;
    for i in 0..terms {
        let k = (i + 2) as f64;
        value += float_pow(x, k) / factorial(k);
    }
    value
}

/// ln(x) for x > 0, via artanh((x-1)/(x+1)) doubled. The ratio stays in
/// (-1, 1) for every positive x, so the series always converges.
pub fn natural_log(x: f64, terms: u32) -> Result<f64, MathError> {
    if x <= 0.0 {
        return Err(MathError::Domain(format!("ln needs x > 0, got {}", x)));
    }
    let ratio = (x - 1.0) / (x + 1.0);
    let mut half = ratio;
    let mut n = 3.0;
    for _ in 0..terms {
        half += float_pow(ratio, n) / n;
        n += 2.0;
    }
    Ok(2.0 * half)
}

/// log10(x) by rescaling ln(x). Convergence away from 1 is slow, so the
/// expansion is always taken to 100 terms whatever the caller asked for.
pub fn log10(x: f64, _terms: u32) -> Result<f64, MathError> {
    Ok(natural_log(x, 100)? / LN_10)
}

fn check_sqrt_args(x: f64, epsilon: f64) -> Result<(), MathError> {
    if x < 0.0 {
        return Err(MathError::Domain(format!(
            "square root of negative number {}",
            x
        )));
    }
    if epsilon <= 0.0 {
        return Err(MathError::Domain(format!(
            "error tolerance must be positive, got {}",
            epsilon
        )));
    }
    Ok(())
}

/// Square root by a crude halving search: halve the guess when its square
/// overshoots, grow it by half otherwise. Not guaranteed to settle for
/// every (x, epsilon) pair, hence the step cap.
pub fn halving_sqrt(x: f64, epsilon: f64) -> Result<f64, MathError> {
    check_sqrt_args(x, epsilon)?;
    let mut guess = x / 2.0;
    for _ in 0..MAX_REFINEMENTS {
        if (guess * guess - x).abs() <= epsilon {
            return Ok(guess);
        }
        if guess * guess > x {
            guess /= 2.0;
        } else {
            guess += guess / 2.0;
        }
    }
    Err(MathError::Convergence(format!(
        "halving search still off after {} steps for sqrt({})",
        MAX_REFINEMENTS, x
    )))
}

/// Square root by Heron refinement, `g <- (g + x/g) / 2`. Quadratic
/// convergence; this is the variant the statistics engine relies on.
pub fn heron_sqrt(x: f64, epsilon: f64) -> Result<f64, MathError> {
    check_sqrt_args(x, epsilon)?;
    if x == 0.0 {
        return Ok(0.0);
    }
    let mut guess = x / 2.0;
    for _ in 0..MAX_REFINEMENTS {
        if (guess * guess - x).abs() <= epsilon {
            return Ok(guess);
        }
        guess = 0.5 * (guess + x / guess);
    }
    Err(MathError::Convergence(format!(
        "Heron refinement still off after {} steps for sqrt({})",
        MAX_REFINEMENTS, x
    )))
}

/// pi from the Gregory-Leibniz series: 4 * (1 - 1/3 + 1/5 - ...), taken
/// to `terms` corrections past the leading 1.
pub fn leibniz_pi(terms: u32) -> f64 {
    let mut value = 1.0;
    let mut denominator = -3.0;
    for _ in 0..terms {
        value += 1.0 / denominator;
        denominator = if denominator < 0.0 {
            -denominator + 2.0
        } else {
            -denominator - 2.0
        };
    }
    4.0 * value
}

/// Same series, fanned out: each worker sums an independent chunk of
/// terms and the partial sums are folded back together. Only viable
/// because the terms have no data dependencies between them.
pub fn leibniz_pi_parallel(terms: u32, workers: usize) -> f64 {
    let workers = workers.max(1);
    let count = terms as usize + 1;
    let chunk = count.div_ceil(workers);
    let total: f64 = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                scope.spawn(move || {
                    let lo = w * chunk;
                    let hi = ((w + 1) * chunk).min(count);
                    (lo..hi)
                        .map(|k| {
                            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                            sign / (2 * k + 1) as f64
                        })
                        .sum::<f64>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });
    4.0 * total
}

/// Degrees to radians.
pub fn degrees_to_radians(x: f64) -> f64 {
    (x / 180.0) * PI
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! fuzzy_eq {
        ($lhs:expr, $rhs:expr, $eps:expr) => {
            assert!(
                ($lhs - $rhs).abs() < $eps,
                "{} vs {} not within {}",
                $lhs,
                $rhs,
                $eps
            )
        };
        ($lhs:expr, $rhs:expr) => {
            fuzzy_eq!($lhs, $rhs, 1.0e-5)
        };
    }

    #[test]
    fn inverse_trig_domain() {
        assert!(matches!(arcsine(1.5, 9), Err(MathError::Domain(_))));
        assert!(matches!(arccosine(-1.01, 9), Err(MathError::Domain(_))));
        assert!(arcsine(1.0, 9).is_ok());
    }

    #[test]
    fn arctangent_covers_both_branches() {
        fuzzy_eq!(arctangent(1.0, 2000), PI / 4.0, 1.0e-3);
        fuzzy_eq!(arctangent(-1.0, 2000), -PI / 4.0, 1.0e-3);
        fuzzy_eq!(arctangent(2.5, 30), (2.5f64).atan());
        fuzzy_eq!(arctangent(-2.5, 30), (-2.5f64).atan());
    }

    #[test]
    fn log_domain() {
        assert!(matches!(natural_log(0.0, 10), Err(MathError::Domain(_))));
        assert!(matches!(natural_log(-3.0, 10), Err(MathError::Domain(_))));
        assert!(matches!(log10(-1.0, 10), Err(MathError::Domain(_))));
    }

    #[test]
    fn square_roots() -> Result<(), MathError> {
        fuzzy_eq!(heron_sqrt(9.0, 1.0e-5)?, 3.0);
        assert_eq!(heron_sqrt(0.0, 1.0e-5)?, 0.0);
        // the halving search only settles when its trajectory happens to
        // land on the root, e.g. for powers of four
        assert_eq!(halving_sqrt(4.0, 1.0e-5)?, 2.0);
        assert_eq!(halving_sqrt(16.0, 1.0e-5)?, 4.0);
        fuzzy_eq!(halving_sqrt(9.0, 1.0)?, 3.0, 0.2);
        Ok(())
    }

    #[test]
    fn square_root_guards() {
        assert!(matches!(heron_sqrt(-1.0, 1.0e-5), Err(MathError::Domain(_))));
        assert!(matches!(heron_sqrt(2.0, 0.0), Err(MathError::Domain(_))));
        assert!(matches!(halving_sqrt(2.0, -1.0), Err(MathError::Domain(_))));
    }

    #[test]
    fn halving_search_reports_non_convergence() {
        // the oscillating search never settles this tightly off its grid
        assert!(matches!(
            halving_sqrt(2.0, 1.0e-5),
            Err(MathError::Convergence(_))
        ));
        assert!(matches!(
            halving_sqrt(9.0, 1.0e-5),
            Err(MathError::Convergence(_))
        ));
    }

    #[test]
    fn pi_variants_agree() {
        fuzzy_eq!(leibniz_pi(500_000), PI);
        fuzzy_eq!(leibniz_pi_parallel(500_000, 4), PI);
        fuzzy_eq!(leibniz_pi(500_000), leibniz_pi_parallel(500_000, 3), 1.0e-9);
    }

    #[test]
    fn degree_conversion() {
        fuzzy_eq!(degrees_to_radians(180.0), PI, 1.0e-12);
        fuzzy_eq!(degrees_to_radians(90.0), PI / 2.0, 1.0e-12);
    }
}
