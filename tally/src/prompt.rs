//! Per-operation input prompts. Bad input never aborts anything; the
//! user is told what was expected and asked again.

use handmath::MathError;
use rustyline::DefaultEditor;

fn read_parsed<T: std::str::FromStr>(
    rl: &mut DefaultEditor,
    name: &str,
    expected: &str,
) -> Result<T, String> {
    loop {
        let line = rl
            .readline(&format!("{} = ", name))
            .map_err(|e| e.to_string())?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Expected {}. Please try again!", expected),
        }
    }
}

fn read_int(rl: &mut DefaultEditor, name: &str) -> Result<i64, String> {
    read_parsed(rl, name, "an integer")
}

fn read_float(rl: &mut DefaultEditor, name: &str) -> Result<f64, String> {
    read_parsed(rl, name, "a number")
}

fn read_terms(rl: &mut DefaultEditor) -> Result<u32, String> {
    read_parsed(rl, "terms", "a non-negative term count")
}

fn read_float_list(rl: &mut DefaultEditor, name: &str) -> Result<Vec<f64>, String> {
    loop {
        let line = rl
            .readline(&format!("{} = ", name))
            .map_err(|e| e.to_string())?;
        let parsed: Result<Vec<f64>, _> = line
            .split(',')
            .map(|field| field.trim().parse::<f64>())
            .collect();
        match parsed {
            Ok(values) if !values.is_empty() => return Ok(values),
            _ => println!("Expected comma-separated numbers, e.g. 1, 2, 3. Please try again!"),
        }
    }
}

fn show_int(result: Result<i64, MathError>) {
    match result {
        Ok(value) => println!("= {}", value),
        Err(e) => println!("Math err: {:?}", e),
    }
}

fn show_float(result: Result<f64, MathError>) {
    match result {
        Ok(value) => println!("= {}", value),
        Err(e) => println!("Math err: {:?}", e),
    }
}

pub fn integer_pair(op: &str, rl: &mut DefaultEditor) -> Result<(), String> {
    let x = read_int(rl, "x")?;
    let y = read_int(rl, "y")?;
    let result = match op {
        "add" | "+" => handmath::bitwise_add(x, y),
        "subtract" | "-" => handmath::bitwise_sub_fast(x, y),
        "multiply" | "*" => handmath::karatsuba_mul(x, y),
        "divide" | "/" => handmath::long_div(x, y),
        "permutation" | "p" => handmath::permutation(x, y),
        "combination" | "c" => handmath::combination(x, y),
        other => return Err(format!("not an integer operation: {}", other)),
    };
    show_int(result);
    Ok(())
}

pub fn power(rl: &mut DefaultEditor) -> Result<(), String> {
    let base = read_int(rl, "base")?;
    let exponent: i32 = read_parsed(rl, "exponent", "an integer exponent")?;
    show_int(handmath::int_pow(base, exponent));
    Ok(())
}

pub fn factorial(rl: &mut DefaultEditor) -> Result<(), String> {
    // whole numbers only; fractional input would never terminate
    let n = loop {
        let n = read_float(rl, "n")?;
        if n.fract() == 0.0 {
            break n;
        }
        println!("Expected a whole number. Please try again!");
    };
    println!("= {}", handmath::factorial(n));
    Ok(())
}

pub fn square_root(rl: &mut DefaultEditor) -> Result<(), String> {
    let x = read_float(rl, "x")?;
    let epsilon = read_float(rl, "error tolerance")?;
    show_float(handmath::heron_sqrt(x, epsilon));
    Ok(())
}

pub fn pi(rl: &mut DefaultEditor) -> Result<(), String> {
    let terms = read_terms(rl)?;
    println!("= {}", handmath::leibniz_pi(terms));
    Ok(())
}

pub fn exp_or_log(op: &str, rl: &mut DefaultEditor) -> Result<(), String> {
    let x = read_float(rl, "x")?;
    let terms = read_terms(rl)?;
    let result = match op {
        "ln" => handmath::natural_log(x, terms),
        "log" => handmath::log10(x, terms),
        _ => Ok(handmath::exponential(x, terms)),
    };
    show_float(result);
    Ok(())
}

pub fn trig(op: &str, rl: &mut DefaultEditor) -> Result<(), String> {
    let result = match op {
        "sin" | "cos" | "tan" => {
            let degrees = read_float(rl, "x (degrees)")?;
            let terms = read_terms(rl)?;
            let x = handmath::degrees_to_radians(degrees);
            Ok(match op {
                "sin" => handmath::sine(x, terms),
                "cos" => handmath::cosine(x, terms),
                _ => handmath::tangent(x, terms),
            })
        }
        _ => {
            let x = read_float(rl, "x")?;
            let terms = read_terms(rl)?;
            match op {
                "arcsin" => handmath::arcsine(x, terms),
                "arccos" => handmath::arccosine(x, terms),
                _ => Ok(handmath::arctangent(x, terms)),
            }
        }
    };
    show_float(result);
    Ok(())
}

pub fn stat(op: &str, rl: &mut DefaultEditor) -> Result<(), String> {
    let mut data = read_float_list(rl, "data (comma separated)")?;
    let result = match op {
        "min" => handmath::min(&data),
        "max" => handmath::max(&data),
        "mean" => handmath::mean(&data),
        "median" => handmath::median(&mut data),
        "mode" => handmath::mode(&data),
        "sum" => handmath::sum(&data),
        "variance" => handmath::variance(&data),
        _ => handmath::standard_deviation(&data),
    };
    show_float(result);
    Ok(())
}

pub fn pdf(rl: &mut DefaultEditor) -> Result<(), String> {
    let data = read_float_list(rl, "data (comma separated)")?;
    let x = read_float(rl, "x")?;
    show_float(handmath::normal_pdf(&data, x));
    Ok(())
}
