/*
    # Instruction Engine
    One line in, one outcome out. A line is decoded into an [Instruction] first; only a fully
    decoded instruction touches the registers or memory, so a rejected line leaves the engine
    exactly as it was.

    ## Arithmetic
    Registers and cells are i64. ADD and SUB wrap on overflow.
*/

use std::fmt;

use crate::{
    error::trace, Address, Decoder, ExecResult, Instruction, Memory, Register, RegisterSet, Word,
    MEMORY_SIZE, SUCCESS_MESSAGE,
};

/// Result of one [InstructionEngine::execute] call.
pub type ExecutionOutcome = ExecResult<Effect>;

/// Text shown to the user for an outcome.
pub fn outcome_message(outcome: &ExecutionOutcome) -> String {
    match outcome {
        Ok(_) => SUCCESS_MESSAGE.to_string(),
        Err(e) => e.to_string(),
    }
}

/// The single write performed by a successful instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Register { register: Register, value: Word },
    Memory { address: Address, value: Word },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Register { register, value } => write!(f, "{} <- {}", register, value),
            Effect::Memory { address, value } => write!(f, "[{}] <- {}", address, value),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstructionEngine {
    registers: RegisterSet,
    memory: Memory,
}

macro_rules! arithmetic {
    ($self:ident, $register:expr, $value:expr, $op:ident) => {{
        let result = $self.registers.get($register).$op($value);
        $self.registers.set($register, result);
        Effect::Register {
            register: $register,
            value: result,
        }
    }};
}

impl InstructionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and apply one instruction line.
    pub fn execute(&mut self, line: &str) -> ExecutionOutcome {
        match Decoder::new(line).decode() {
            Ok(instruction) => {
                let effect = self.apply(instruction);
                trace!("{} => {}", instruction, effect);
                Ok(effect)
            }
            Err(e) => {
                trace!("{:?} rejected: {}", line, e);
                Err(e)
            }
        }
    }

    /// Apply an already decoded instruction.
    pub fn apply(&mut self, instruction: Instruction) -> Effect {
        match instruction {
            Instruction::Load { register, value } => {
                self.registers.set(register, value);
                Effect::Register { register, value }
            }
            Instruction::Add { register, value } => arithmetic!(self, register, value, wrapping_add),
            Instruction::Sub { register, value } => arithmetic!(self, register, value, wrapping_sub),
            Instruction::Store { address, register } => {
                let value = self.registers.get(register);
                self.memory.write(address, value);
                Effect::Memory { address, value }
            }
            Instruction::LoadM { register, address } => {
                let value = self.memory.read(address);
                self.registers.set(register, value);
                Effect::Register { register, value }
            }
        }
    }

    /// `(register, value)` pairs in the order ACC, R1, R2.
    pub fn registers(&self) -> Vec<(Register, Word)> {
        self.registers.iter().collect()
    }

    pub fn register(&self, register: Register) -> Word {
        self.registers.get(register)
    }

    pub fn memory(&self) -> &[Word; MEMORY_SIZE] {
        self.memory.cells()
    }

    pub fn cell(&self, address: Address) -> Word {
        self.memory.read(address)
    }

    /// The first `len` memory cells, as shown by a front end.
    pub fn memory_window(&self, len: usize) -> &[Word] {
        self.memory.window(len)
    }
}
