//! CLI tool to pick a job from the user's crontab and run it
//! manually, the way cron would.

use std::io::{self, Write};
use std::process::ExitCode;

use cronpick::{Error, Job, ReadError, RunError, RunResult};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("-h" | "--help") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some("-V" | "--version") => {
            println!("cronpick {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(option) if option.starts_with('-') => {
            eprintln!("Unknown option: {option}");
            print_usage();
            ExitCode::from(2)
        }
        preselection => run(preselection),
    }
}

fn print_usage() {
    eprintln!("Usage: cronpick [job]");
    eprintln!();
    eprintln!("Lists the jobs in your crontab and runs the one you pick,");
    eprintln!("with the variables and shell cron would use.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  job   Job number to run directly, skipping the menu");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help     Print this help");
    eprintln!("  -V, --version  Print the version");
}

fn run(preselection: Option<&str>) -> ExitCode {
    let crontab = match cronpick::user_crontab() {
        Ok(crontab) => crontab,
        Err(error) => return exit_from_error(&error),
    };

    if !crontab.has_jobs() {
        println!("No jobs to run.");
        return ExitCode::SUCCESS;
    }

    let jobs = crontab.jobs();

    let selection = preselection.map_or_else(
        || {
            println!("{}", format_menu_entries(&jobs).join("\n"));
            read_selection()
        },
        ToString::to_string,
    );

    let index = match parse_selection(&selection, jobs.len()) {
        Ok(Some(index)) => index,
        Ok(None) => return ExitCode::SUCCESS,
        Err(()) => {
            eprintln!("{}", color_error("Invalid job selection."));
            return ExitCode::FAILURE;
        }
    };

    let job = jobs[index];
    println!("{} {}", color_highlight("$"), job.command);

    exit_from_run(&crontab.run(job))
}

fn read_selection() -> String {
    print!(">>> Select a job to run: ");
    // Flush manually in case stdout is line-buffered, else the
    // prompt won't show up before the read (no '\n').
    let _ = io::stdout().flush();

    let mut selection = String::new();
    let _ = io::stdin().read_line(&mut selection);
    selection
}

/// Map user input to a zero-based job index.
///
/// Empty input is a deliberate exit (`Ok(None)`); anything that is
/// not a number between 1 and `job_count` is an error.
fn parse_selection(selection: &str, job_count: usize) -> Result<Option<usize>, ()> {
    let selection = selection.trim();
    if selection.is_empty() {
        return Ok(None);
    }

    match selection.parse::<usize>() {
        Ok(number) if (1..=job_count).contains(&number) => Ok(Some(number - 1)),
        _ => Err(()),
    }
}

fn format_menu_entries(jobs: &[&Job]) -> Vec<String> {
    let number_width = jobs.len().to_string().len();

    jobs.iter()
        .enumerate()
        .map(|(i, job)| {
            let number = color_highlight(&format!("{:>number_width$}.", i + 1));

            let description = job
                .description
                .as_ref()
                .map_or_else(String::new, |description| format!("{description} "));

            let schedule = color_attenuate(&job.schedule);

            // With a description the command is secondary detail;
            // without one it is the only thing identifying the job.
            let command = if description.is_empty() {
                job.command.clone()
            } else {
                color_attenuate(&job.command)
            };

            format!("{number} {description}{schedule} {command}")
        })
        .collect()
}

fn exit_from_error(error: &Error) -> ExitCode {
    eprintln!("{}", color_error(&error.to_string()));

    if let Error::Read(ReadError::CommandFailed { exit_code, stderr }) = error {
        if let Some(stderr) = stderr {
            eprintln!("{}", stderr.trim_end_matches('\n'));
        }
        if let Some(exit_code) = exit_code {
            return ExitCode::from(exit_code_to_u8(*exit_code));
        }
    }

    ExitCode::FAILURE
}

fn exit_from_run(result: &Result<RunResult, RunError>) -> ExitCode {
    match result {
        // A `None` exit code means the child was killed by a signal.
        Ok(result) => result
            .exit_code
            .map_or(ExitCode::FAILURE, |exit_code| {
                ExitCode::from(exit_code_to_u8(exit_code))
            }),
        Err(error) => {
            eprintln!("{}", color_error(&error.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Clamp a child exit code into the 0-255 the shell can carry.
fn exit_code_to_u8(exit_code: i32) -> u8 {
    u8::try_from(exit_code).unwrap_or(1)
}

fn color_error(text: &str) -> String {
    format!("\x1b[0;91m{text}\x1b[0m")
}

fn color_highlight(text: &str) -> String {
    format!("\x1b[0;92m{text}\x1b[0m")
}

fn color_attenuate(text: &str) -> String {
    format!("\x1b[0;90m{text}\x1b[0m")
}
