mod config;
mod display;
mod error;
use config::*;
use error::*;
use std::io::{self, BufRead, Write};
use minicpu::InstructionEngine;

fn is_exit(line: &str) -> bool {
	matches!(line.trim().to_uppercase().as_str(), "QUIT" | "EXIT")
}

fn main() -> CLIResult {
	let mut args = std::env::args();
	args.next(); // Ignore program name
	let config = Config::from_args(args)?;
	if config.help {
		println!("{}", USAGE);
		return Ok(());
	}
	if !config.color {
		colored::control::set_override(false);
	}

	let mut engine = InstructionEngine::new();
	if !config.quiet {
		display::print_state(&engine, config.window);
	}

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();
	loop {
		print!("> ");
		io::stdout().flush()?;
		let line = match lines.next() {
			Some(line) => line?,
			None => break, // EOF
		};
		if line.trim().is_empty() {
			continue;
		}
		if is_exit(&line) {
			break;
		}

		let outcome = engine.execute(&line);
		display::print_outcome(&outcome);
		if !config.quiet {
			display::print_state(&engine, config.window);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exit_words() {
		assert!(is_exit("quit"));
		assert!(is_exit("  EXIT "));
		assert!(!is_exit("LOAD ACC 1"));
	}
}
