mod bench;
mod prompt;
mod selftest;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

fn main() -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    // one-shot mode: `tally sin` runs a single command and exits
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        return dispatch(input.trim(), &mut rl);
    }

    print_welcome();
    print_help();
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                dispatch(line.trim(), &mut rl)?;
            }
        }
    }
}

fn dispatch(input: &str, rl: &mut DefaultEditor) -> Result<(), String> {
    match input.to_lowercase().as_str() {
        "" => Ok(()),
        "help" | "h" => {
            print_help();
            Ok(())
        }
        "tests" | "test" | "t" => {
            selftest::run();
            Ok(())
        }
        "benchmark" | "bm" => bench::run(),
        "exit" | "quit" | "q" => std::process::exit(0),
        op @ ("add" | "+" | "subtract" | "-" | "multiply" | "*" | "divide" | "/"
        | "permutation" | "p" | "combination" | "c") => prompt::integer_pair(op, rl),
        "pow" => prompt::power(rl),
        "factorial" | "!" => prompt::factorial(rl),
        "sqrt" => prompt::square_root(rl),
        "pi" => prompt::pi(rl),
        op @ ("ln" | "log" | "exponent" | "e") => prompt::exp_or_log(op, rl),
        op @ ("sin" | "cos" | "tan" | "arcsin" | "arccos" | "arctan") => prompt::trig(op, rl),
        op @ ("min" | "max" | "mean" | "median" | "mode" | "sum" | "variance" | "sd"
        | "standard deviation") => prompt::stat(op, rl),
        "pdf" | "probability density function" => prompt::pdf(rl),
        other => {
            println!("Unknown command {:?}, try help.", other);
            Ok(())
        }
    }
}

fn print_welcome() {
    println!(" __________    |");
    println!("| ________ |   |");
    println!("||87654321||   |  WELCOME TO");
    println!("|\"\"\"\"\"\"\"\"\"\"|   |  tally");
    println!("|[M|#|C][-]|   |  the from-scratch calculator");
    println!("|[7|8|9][+]|   |");
    println!("|[1|2|3][%]|   |");
    println!("|[.|O|:][=]|   |");
    println!(" ----------    |");
}

fn print_help() {
    println!("===============================================================");
    println!("|                            Help                             |");
    println!("===============================================================");
    println!("| 1. Arithmetic:                                              |");
    println!("|    * add (+)       * sqrt        * factorial (!)            |");
    println!("|    * subtract (-)  * pow         * permutation (p)          |");
    println!("|    * divide (/)    * ln          * combination (c)          |");
    println!("|    * multiply (*)  * log         * exponent (e)             |");
    println!("|    * pi                                                     |");
    println!("===============================================================");
    println!("| 2. Trigonometry:                                            |");
    println!("|    * sin           * cos         * tan                      |");
    println!("|    * arcsin        * arccos      * arctan                   |");
    println!("===============================================================");
    println!("| 3. Statistics:                                              |");
    println!("|    * min           * mode        * standard deviation (sd)  |");
    println!("|    * max           * median      * variance                 |");
    println!("|    * mean          * sum         * pdf                      |");
    println!("===============================================================");
    println!("|    [help/h]    [tests/t]    [benchmark/bm]    [exit]        |");
    println!("===============================================================");
}
