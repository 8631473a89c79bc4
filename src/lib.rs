mod engine;
mod error;
mod instruction;
mod memory;
mod register;
mod scanner;

pub use engine::{outcome_message, Effect, ExecutionOutcome, InstructionEngine};
pub use error::engine::*;
pub use instruction::{Decoder, Instruction, Opcode, OperandKind};
pub use memory::{Address, Memory, MEMORY_SIZE};
pub use register::{Register, RegisterSet, REGISTER_COUNT};
pub use scanner::TokenKind;

/// Native width of every register and memory cell.
pub type Word = i64;

/// Message reported for an instruction that was applied.
pub const SUCCESS_MESSAGE: &str = "Executed Successfully";

