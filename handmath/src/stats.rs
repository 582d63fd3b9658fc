use crate::error::MathError;
use crate::series::{exponential, heron_sqrt};
use std::collections::HashMap;
use std::f64::consts::PI;

/// Tolerance handed to Heron's refinement wherever a square root is
/// needed internally.
const SQRT_EPSILON: f64 = 1.0e-5;

/// Term count for the exponential series inside the pdf; plenty for
/// exponents within a few standard deviations of the mean.
const PDF_EXP_TERMS: u32 = 40;

fn ensure_sample(data: &[f64]) -> Result<(), MathError> {
    if data.is_empty() {
        Err(MathError::Domain("empty sample".to_string()))
    } else {
        Ok(())
    }
}

pub fn min(data: &[f64]) -> Result<f64, MathError> {
    ensure_sample(data)?;
    Ok(data
        .iter()
        .fold(f64::INFINITY, |m, &v| if v < m { v } else { m }))
}

pub fn max(data: &[f64]) -> Result<f64, MathError> {
    ensure_sample(data)?;
    Ok(data
        .iter()
        .fold(f64::NEG_INFINITY, |m, &v| if v > m { v } else { m }))
}

pub fn sum(data: &[f64]) -> Result<f64, MathError> {
    ensure_sample(data)?;
    Ok(data.iter().sum())
}

pub fn mean(data: &[f64]) -> Result<f64, MathError> {
    Ok(sum(data)? / data.len() as f64)
}

/// Population variance: mean squared deviation divided by n, not n-1.
pub fn variance(data: &[f64]) -> Result<f64, MathError> {
    let mean = mean(data)?;
    let squared_deviations: f64 = data.iter().map(|v| (v - mean) * (v - mean)).sum();
    Ok(squared_deviations / data.len() as f64)
}

pub fn standard_deviation(data: &[f64]) -> Result<f64, MathError> {
    heron_sqrt(variance(data)?, SQRT_EPSILON)
}

/// In-place quicksort, Lomuto partition with the last element as pivot.
pub fn quicksort(data: &mut [f64]) {
    if data.len() > 1 {
        let pivot_index = partition(data);
        let (low, high) = data.split_at_mut(pivot_index);
        quicksort(low);
        quicksort(&mut high[1..]);
    }
}

fn partition(data: &mut [f64]) -> usize {
    let high = data.len() - 1;
    let pivot = data[high];
    let mut i = 0;
    for j in 0..high {
        if data[j] <= pivot {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, high);
    i
}

/// Middle of the sorted sample, averaging the two central elements for
/// even lengths. Sorts the caller's data in place; copy first if the
/// original order matters.
pub fn median(data: &mut [f64]) -> Result<f64, MathError> {
    ensure_sample(data)?;
    quicksort(data);
    let n = data.len();
    if n % 2 == 0 {
        Ok((data[n / 2] + data[n / 2 - 1]) / 2.0)
    } else {
        Ok(data[n / 2])
    }
}

/// Most frequent value. Ties go to the smallest tied value so the answer
/// never depends on map iteration order.
pub fn mode(data: &[f64]) -> Result<f64, MathError> {
    ensure_sample(data)?;
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    for value in data {
        *frequency.entry(value.to_bits()).or_insert(0) += 1;
    }
    let mut best_value = data[0];
    let mut best_count = 0;
    for (&bits, &count) in frequency.iter() {
        let value = f64::from_bits(bits);
        if count > best_count || (count == best_count && value < best_value) {
            best_value = value;
            best_count = count;
        }
    }
    Ok(best_value)
}

/// Gaussian density at `x` using the sample's own mean and standard
/// deviation.
pub fn normal_pdf(data: &[f64], x: f64) -> Result<f64, MathError> {
    let mean = mean(data)?;
    let sd = standard_deviation(data)?;
    let scale = 1.0 / heron_sqrt(sd * sd * 2.0 * PI, SQRT_EPSILON)?;
    let exponent = -((x - mean) * (x - mean)) / (2.0 * sd * sd);
    Ok(scale * exponential(exponent, PDF_EXP_TERMS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_samples_rejected() {
        let empty: [f64; 0] = [];
        assert!(matches!(min(&empty), Err(MathError::Domain(_))));
        assert!(matches!(max(&empty), Err(MathError::Domain(_))));
        assert!(matches!(sum(&empty), Err(MathError::Domain(_))));
        assert!(matches!(mean(&empty), Err(MathError::Domain(_))));
        assert!(matches!(variance(&empty), Err(MathError::Domain(_))));
        assert!(matches!(mode(&empty), Err(MathError::Domain(_))));
        assert!(matches!(median(&mut []), Err(MathError::Domain(_))));
        assert!(matches!(normal_pdf(&empty, 0.0), Err(MathError::Domain(_))));
    }

    #[test]
    fn quicksort_orders_and_is_idempotent() {
        let mut data = vec![5.0, -1.0, 3.5, 3.5, 0.0, 12.0, -7.25];
        quicksort(&mut data);
        assert_eq!(data, vec![-7.25, -1.0, 0.0, 3.5, 3.5, 5.0, 12.0]);
        quicksort(&mut data);
        assert_eq!(data, vec![-7.25, -1.0, 0.0, 3.5, 3.5, 5.0, 12.0]);
    }

    #[test]
    fn quicksort_worst_case_input() {
        let mut data: Vec<f64> = (0..200).rev().map(|v| v as f64).collect();
        quicksort(&mut data);
        let expected: Vec<f64> = (0..200).map(|v| v as f64).collect();
        assert_eq!(data, expected);
    }

    #[test]
    fn median_even_length() -> Result<(), MathError> {
        let mut data = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&mut data)?, 2.5);
        Ok(())
    }

    #[test]
    fn mode_tie_break_is_smallest() -> Result<(), MathError> {
        // 7 and 2 both appear twice; the smaller wins
        let data = vec![7.0, 2.0, 7.0, 2.0, 5.0];
        assert_eq!(mode(&data)?, 2.0);
        Ok(())
    }

    #[test]
    fn single_element_sample() -> Result<(), MathError> {
        let data = vec![42.0];
        assert_eq!(mean(&data)?, 42.0);
        assert_eq!(variance(&data)?, 0.0);
        assert_eq!(median(&mut data.clone())?, 42.0);
        assert_eq!(mode(&data)?, 42.0);
        Ok(())
    }
}
