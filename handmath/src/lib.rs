#![deny(warnings)]

mod error;
pub use error::MathError;

mod digits;
pub use digits::{count_digits, count_digits_fast, from_digits, to_digits};

mod arithmetic;
pub use arithmetic::{
    bitwise_add, bitwise_sub, bitwise_sub_fast, karatsuba_mul, long_div, long_mul, slow_div,
    slow_mul,
};

mod combinatorics;
pub use combinatorics::{combination, factorial, float_pow, int_pow, permutation};

mod series;
pub use series::{
    arccosine, arcsine, arctangent, cosine, degrees_to_radians, exponential, halving_sqrt,
    heron_sqrt, leibniz_pi, leibniz_pi_parallel, log10, natural_log, sine, tangent,
};

mod stats;
pub use stats::{
    max, mean, median, min, mode, normal_pdf, quicksort, standard_deviation, sum, variance,
};
