use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;
use maplit::hashmap;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::{ExecError, Word};

pub const REGISTER_COUNT: usize = 3;

/// The fixed register file, in display order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Register {
    Acc, // 0 ACC accumulator
    R1,  // 1 R1  general purpose
    R2,  // 2 R2  general purpose
}

lazy_static! {
    // Exact, case-sensitive spellings.
    static ref REGISTER_NAMES: HashMap<&'static str, Register> = hashmap! {
        "ACC" => Register::Acc,
        "R1" => Register::R1,
        "R2" => Register::R2,
    };
}

impl Register {
    pub fn name(self) -> &'static str {
        match self {
            Register::Acc => "ACC",
            Register::R1 => "R1",
            Register::R2 => "R2",
        }
    }

    /// Every register in its fixed order.
    pub fn all() -> impl Iterator<Item = Register> {
        (0..REGISTER_COUNT).filter_map(Register::from_usize)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Register {
    type Err = ExecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTER_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| ExecError::UnknownRegister(s.to_string()))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values of ACC, R1 and R2. All start at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisterSet {
    values: [Word; REGISTER_COUNT],
}

impl RegisterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: Register) -> Word {
        self.values[register.index()]
    }

    pub fn set(&mut self, register: Register, value: Word) {
        self.values[register.index()] = value;
    }

    /// `(register, value)` pairs in the order ACC, R1, R2.
    pub fn iter(&self) -> impl Iterator<Item = (Register, Word)> + '_ {
        Register::all().map(move |r| (r, self.get(r)))
    }
}
