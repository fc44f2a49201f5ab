/*
 * ==========================================================================
 * FORTLET - A Tiny Fortran, Fiercely Checked
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@fortlet-lang.com
 * Website:  https://www.fortlet-lang.com
 * Github:   https://github.com/samwilcox/fortlet
 *
 * License:
 * This file is part of the FORTLET language tooling project.
 *
 * FORTLET is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.fortlet-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! Demonstration driver: checks the three built-in sample programs (or a
//! file named on the command line) and prints the token trace plus a
//! pass/fail banner per program. All rendering lives here; the core
//! stages only return values.

use std::env;
use std::fs;
use std::process::ExitCode;

use chrono::Local;

use fortlet::check;
use fortlet::diagnostics::DiagnosticPrinter;
use fortlet::Token;

/// A perfectly valid program exercising every statement form.
const VALID_SAMPLE: &str = "\
PROGRAM DEMO
  -- variable declarations
  INTEGER COUNT
  REAL TOTAL

  -- assignments
  COUNT = 100
  TOTAL = COUNT

  -- conditional
  IF (COUNT) THEN
    PRINT *, TOTAL
  END IF

END
";

/// THEN is missing after the condition.
const MISSING_THEN_SAMPLE: &str = "\
PROGRAM BROKEN
  INTEGER A

  -- the word THEN is missing after the condition
  IF (A)
    A = 10
  END IF

END
";

/// The '@' symbol is not part of the language.
const STRAY_SYMBOL_SAMPLE: &str = "\
PROGRAM GLITCH
  INTEGER B

  -- the symbol @ is not defined in the language
  B = @
END
";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let files: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    println!(
        "fortlet syntax check - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    match files.first() {
        Some(path) => {
            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(err) => {
                    eprintln!("fortlet: cannot read {}: {}", path, err);
                    return ExitCode::FAILURE;
                }
            };

            if run_check(path, &source, as_json) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }

        // Two of the three samples exist to demonstrate error reporting,
        // so demo mode always exits successfully.
        None => {
            run_check("valid program", VALID_SAMPLE, as_json);
            run_check("missing THEN", MISSING_THEN_SAMPLE, as_json);
            run_check("stray symbol", STRAY_SYMBOL_SAMPLE, as_json);
            ExitCode::SUCCESS
        }
    }
}

/// Checks one source text end to end and renders the outcome. Returns
/// whether the program was valid.
fn run_check(name: &str, source: &str, as_json: bool) -> bool {
    println!("\n--- checking: {} ---", name);

    match check(source) {
        Ok(tokens) => {
            print_trace(&tokens, as_json);
            println!("result: PASSED - the program is syntactically valid");
            true
        }
        Err(error) => {
            DiagnosticPrinter::new(name, source).print(&error);
            println!("result: FAILED");
            false
        }
    }
}

/// Renders the scanned token sequence, either as an aligned text trace
/// or as JSON.
fn print_trace(tokens: &[Token], as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(tokens) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("fortlet: cannot serialize token trace: {}", err),
        }
        return;
    }

    for token in tokens {
        println!(
            "  line {:>3}  {:<12} {}",
            token.line,
            token.kind.grammar_name(),
            token.lexeme
        );
    }
}
