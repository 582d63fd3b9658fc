//! In-product acceptance checks, runnable from the prompt with `tests`.
//! These mirror the library's test suite but print a summary instead of
//! panicking, so a failed check never kills the session.

use std::f64::consts::{E, PI};

pub fn run() {
    let mut failed = 0;
    arithmetic_checks(&mut failed);
    trigonometry_checks(&mut failed);
    stats_checks(&mut failed);
    println!("===============================================================");
    if failed == 0 {
        println!("| All tests Ok.                                               |");
    } else {
        println!("| {} check(s) FAILED.", failed);
    }
    println!("===============================================================");
}

fn check(name: &str, ok: bool, failed: &mut u32) {
    if !ok {
        *failed += 1;
        println!("| not ok - {}", name);
    }
}

fn close(result: Result<f64, handmath::MathError>, want: f64, epsilon: f64) -> bool {
    matches!(result, Ok(value) if (value - want).abs() <= epsilon)
}

fn arithmetic_checks(failed: &mut u32) {
    println!("===============================================================");
    println!("| Running arithmetic checks ...                               |");
    check("bitwise add", handmath::bitwise_add(24, 89) == Ok(113), failed);
    check(
        "bitwise subtract",
        handmath::bitwise_sub(89, 24) == Ok(65),
        failed,
    );
    check(
        "bitwise subtract fast",
        handmath::bitwise_sub_fast(89, 24) == Ok(65),
        failed,
    );
    check(
        "long multiplication",
        handmath::long_mul(24, 89) == Ok(2136),
        failed,
    );
    check(
        "karatsuba multiplication",
        handmath::karatsuba_mul(24, 89) == Ok(2136),
        failed,
    );
    check("long division", handmath::long_div(89, 24) == Ok(3), failed);
    check(
        "truncating division",
        handmath::long_div(-7, 2) == Ok(-3),
        failed,
    );
    check("permutation", handmath::permutation(8, 4) == Ok(1680), failed);
    check("combination", handmath::combination(8, 4) == Ok(70), failed);
    check("factorial", handmath::factorial(9.0) == 362880.0, failed);
    check("integer power", handmath::int_pow(2, 5) == Ok(32), failed);
    check("float power", handmath::float_pow(2.0, 5.0) == 32.0, failed);
    check(
        "leibniz pi",
        (handmath::leibniz_pi(500_000) - PI).abs() <= 1.0e-5,
        failed,
    );
    check(
        "leibniz pi fan-out",
        (handmath::leibniz_pi_parallel(500_000, 4) - PI).abs() <= 1.0e-5,
        failed,
    );
    check(
        "heron square root",
        close(handmath::heron_sqrt(9.0, 1.0e-5), 3.0, 1.0e-5),
        failed,
    );
    check(
        "halving square root",
        handmath::halving_sqrt(16.0, 1.0e-5) == Ok(4.0),
        failed,
    );
    check(
        "exponential",
        close(Ok(handmath::exponential(1.0, 15)), E, 1.0e-5),
        failed,
    );
    check(
        "natural log",
        close(handmath::natural_log(2.5, 15), 0.91629073187, 0.01),
        failed,
    );
    check(
        "log base ten",
        close(handmath::log10(2.5, 15), 0.39794000867, 0.01),
        failed,
    );
}

fn trigonometry_checks(failed: &mut u32) {
    println!("===============================================================");
    println!("| Running trigonometry checks ...                             |");
    let x = 0.25;
    let terms = 9;
    check("sine", close(Ok(handmath::sine(x, terms)), x.sin(), 1.0e-5), failed);
    check(
        "cosine",
        close(Ok(handmath::cosine(x, terms)), x.cos(), 1.0e-5),
        failed,
    );
    check(
        "tangent",
        close(Ok(handmath::tangent(x, terms)), x.tan(), 1.0e-5),
        failed,
    );
    check(
        "arcsine",
        close(handmath::arcsine(x, terms), x.asin(), 1.0e-5),
        failed,
    );
    check(
        "arccosine",
        close(handmath::arccosine(x, terms), x.acos(), 1.0e-5),
        failed,
    );
    check(
        "arctangent",
        close(Ok(handmath::arctangent(x, terms)), x.atan(), 1.0e-5),
        failed,
    );
}

fn stats_checks(failed: &mut u32) {
    println!("===============================================================");
    println!("| Running statistics checks ...                               |");
    let data = [1.0, 4.0, 3.0, 5.0, 2.0, 6.0, 4.0];
    check("min", handmath::min(&data) == Ok(1.0), failed);
    check("max", handmath::max(&data) == Ok(6.0), failed);
    check("sum", handmath::sum(&data) == Ok(25.0), failed);
    check("mean", close(handmath::mean(&data), 3.571428571, 1.0e-5), failed);
    check(
        "standard deviation",
        close(handmath::standard_deviation(&data), 1.5907898179514, 1.0e-5),
        failed,
    );
    check(
        "median",
        handmath::median(&mut data.clone()) == Ok(4.0),
        failed,
    );
    check("mode", handmath::mode(&data) == Ok(4.0), failed);
    check(
        "normal pdf",
        close(handmath::normal_pdf(&data, 2.5), 0.19989228, 1.0e-5),
        failed,
    );
    let mut sorted = data;
    handmath::quicksort(&mut sorted);
    check(
        "quicksort ascending",
        sorted.windows(2).all(|w| w[0] <= w[1]),
        failed,
    );
}
