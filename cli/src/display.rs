use colored::Colorize;
use minicpu::{outcome_message, ExecutionOutcome, InstructionEngine};

/// `ACC: 0` style lines in register order.
pub fn register_lines(engine: &InstructionEngine) -> Vec<String> {
	engine
		.registers()
		.into_iter()
		.map(|(register, value)| format!("{}: {}", register, value))
		.collect()
}

/// `Address 0: 0` style lines for the first `window` cells.
pub fn memory_lines(engine: &InstructionEngine, window: usize) -> Vec<String> {
	engine
		.memory_window(window)
		.iter()
		.enumerate()
		.map(|(address, value)| format!("Address {}: {}", address, value))
		.collect()
}

pub fn print_outcome(outcome: &ExecutionOutcome) {
	let message = outcome_message(outcome);
	match outcome {
		Ok(effect) => println!("{} ({})", message.green(), effect),
		Err(_) => println!("{}", message.red()),
	}
}

pub fn print_state(engine: &InstructionEngine, window: usize) {
	println!("{}", "Registers:".bold());
	for line in register_lines(engine) {
		println!("  {}", line);
	}
	println!("{}", format!("Memory (0-{}):", window - 1).bold());
	for line in memory_lines(engine, window) {
		println!("  {}", line);
	}
}
