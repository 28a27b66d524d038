//! CPU scheduling simulator CLI.
//!
//! Loads a workload file (first argument, default `processes.txt`) and
//! offers an interactive menu of scheduling runs. Exits with status 1 when
//! the workload cannot be read or holds zero valid records.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::error;

use procsim::{engine, load_workload, Policy, ProcessRecord, Report, RunMetrics};

fn main() -> ExitCode {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "processes.txt".into());
    let records = match load_workload(&path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== CPU Scheduling Simulator ===");
    if records.is_empty() {
        eprintln!("Error: no valid process records in '{path}'");
        return ExitCode::FAILURE;
    }
    println!("Loaded {} processes from '{path}'.", records.len());

    menu_loop(&records);
    ExitCode::SUCCESS
}

fn menu_loop(records: &[ProcessRecord]) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("=== Scheduling Algorithms ===");
        println!("1. {}", Policy::Fcfs.description());
        println!("2. {}", Policy::Sjf.description());
        println!("3. Exit");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = match lines.next() {
            Some(Ok(line)) => line,
            // EOF or a broken stdin both end the session cleanly.
            _ => break,
        };

        match choice.trim() {
            "1" => run_and_print(Policy::Fcfs, records),
            "2" => run_and_print(Policy::Sjf, records),
            "3" => {
                println!("Exiting...");
                break;
            }
            other => println!("Invalid choice '{other}'! Please try again."),
        }
    }
}

fn run_and_print(policy: Policy, records: &[ProcessRecord]) {
    println!();
    println!("--- {} Scheduling ---", policy.name());

    let timeline = match engine::run(policy, records) {
        Ok(timeline) => timeline,
        Err(err) => {
            eprintln!("Error: {err}");
            return;
        }
    };

    let metrics = RunMetrics::calculate(&timeline);
    let report = Report::new(&timeline, &metrics);
    if let Err(err) = report.write_to(&mut io::stdout().lock()) {
        error!("could not write report: {err}");
    }
}
