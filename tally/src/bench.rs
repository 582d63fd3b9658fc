//! Wall-clock comparison of every hand-rolled routine against the
//! native operator or std intrinsic it reimplements. Runnable from the
//! prompt with `benchmark`.

use handmath::MathError;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::time::Instant;

pub fn run() -> Result<(), String> {
    let mut rng = rand::rng();
    arithmetic(&mut rng)?;
    trigonometry();
    pi();
    statistics(&mut rng)?;
    Ok(())
}

fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    println!("{:<44} took {:?}", label, start.elapsed());
    result
}

fn checked<T>(result: Result<T, MathError>) -> Result<T, String> {
    result.map_err(|e| format!("{:?}", e))
}

fn arithmetic(rng: &mut impl Rng) -> Result<(), String> {
    println!("===============================================================");
    println!("|   Arithmetic benchmark                                      |");
    println!("===============================================================");
    let x: i64 = rng.random_range(1_000..100_000);
    let y: i64 = rng.random_range(1..1_000);

    timed(&format!("native {} + {}", x, y), || x + y);
    checked(timed(&format!("bitwise_add({}, {})", x, y), || {
        handmath::bitwise_add(x, y)
    }))?;
    println!();

    timed(&format!("native {} - {}", x, y), || x - y);
    checked(timed(&format!("bitwise_sub({}, {})", x, y), || {
        handmath::bitwise_sub(x, y)
    }))?;
    checked(timed(&format!("bitwise_sub_fast({}, {})", x, y), || {
        handmath::bitwise_sub_fast(x, y)
    }))?;
    println!();

    timed(&format!("native {} * {}", x, y), || x * y);
    checked(timed(&format!("slow_mul({}, {})", x, y), || {
        handmath::slow_mul(x, y)
    }))?;
    checked(timed(&format!("long_mul({}, {})", x, y), || {
        handmath::long_mul(x, y)
    }))?;
    checked(timed(&format!("karatsuba_mul({}, {})", x, y), || {
        handmath::karatsuba_mul(x, y)
    }))?;
    println!();

    timed(&format!("native {} / {}", x, y), || x / y);
    checked(timed(&format!("slow_div({}, {})", x, y), || {
        handmath::slow_div(x, y)
    }))?;
    checked(timed(&format!("long_div({}, {})", x, y), || {
        handmath::long_div(x, y)
    }))?;
    println!();
    Ok(())
}

fn trigonometry() {
    println!("===============================================================");
    println!("|   Trigonometry benchmark                                    |");
    println!("===============================================================");
    let x: f64 = 0.25;
    let terms = 9;

    timed("f64::sin(0.25)", || x.sin());
    timed("sine(0.25, 9)", || handmath::sine(x, terms));
    println!();
    timed("f64::cos(0.25)", || x.cos());
    timed("cosine(0.25, 9)", || handmath::cosine(x, terms));
    println!();
    timed("f64::tan(0.25)", || x.tan());
    timed("tangent(0.25, 9)", || handmath::tangent(x, terms));
    println!();
    timed("f64::asin(0.25)", || x.asin());
    let _ = timed("arcsine(0.25, 9)", || handmath::arcsine(x, terms));
    println!();
    timed("f64::acos(0.25)", || x.acos());
    let _ = timed("arccosine(0.25, 9)", || handmath::arccosine(x, terms));
    println!();
    timed("f64::atan(0.25)", || x.atan());
    timed("arctangent(0.25, 9)", || handmath::arctangent(x, terms));
    println!();
}

fn pi() {
    println!("===============================================================");
    println!("|   Pi benchmark                                              |");
    println!("===============================================================");
    let terms = 2_000_000;
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    timed("leibniz_pi(2M terms)", || handmath::leibniz_pi(terms));
    timed(&format!("leibniz_pi_parallel(2M terms, {} workers)", workers), || {
        handmath::leibniz_pi_parallel(terms, workers)
    });
    println!();
}

fn statistics(rng: &mut impl Rng) -> Result<(), String> {
    println!("===============================================================");
    println!("|   Statistics benchmark (10k gaussian samples)               |");
    println!("===============================================================");
    let normal = Normal::new(12.0, 3.5).map_err(|e| e.to_string())?;
    let data: Vec<f64> = (0..10_000).map(|_| normal.sample(rng)).collect();

    let mut ours = data.clone();
    timed("quicksort", || handmath::quicksort(&mut ours));
    let mut native = data.clone();
    timed("std sort_by(total_cmp)", || {
        native.sort_by(f64::total_cmp)
    });
    println!();
    checked(timed("mean", || handmath::mean(&data)))?;
    checked(timed("standard_deviation", || {
        handmath::standard_deviation(&data)
    }))?;
    checked(timed("normal_pdf at the mean", || {
        handmath::normal_pdf(&data, 12.0)
    }))?;
    println!();
    Ok(())
}
