//! The fault demonstrator: runs the fixed scenario sequence and prints one
//! report line per caught failure. Failures are the expected outcome, so
//! the process always exits 0.

use colored::Colorize;
use fault_scenarios::scenarios::catalog;

fn main() {
    println!("{}", "=== Fault Scenarios ===".bold());
    println!();

    let scenarios = catalog();
    let mut caught = 0;
    for scenario in &scenarios {
        match scenario.run() {
            Some(report) => {
                caught += 1;
                println!("{report}");
            }
            None => println!(
                "{}",
                format!("Scenario '{}' unexpectedly succeeded", scenario.name()).yellow()
            ),
        }
    }

    println!();
    let summary = format!("{caught}/{} scenarios reported a failure", scenarios.len());
    if caught == scenarios.len() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
}
