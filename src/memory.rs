use std::fmt;

use crate::{ExecError, Word};

pub const MEMORY_SIZE: usize = 256;

/// A validated memory address. Every `u8` is in range, so indexing with one cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub u8);

impl Address {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<Word> for Address {
    type Error = ExecError;

    fn try_from(value: Word) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Address)
            .map_err(|_| ExecError::AddressOutOfRange(value.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 256 cells, zeroed on creation. The length never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [Word; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, address: Address) -> Word {
        self.cells[address.index()]
    }

    pub fn write(&mut self, address: Address, value: Word) {
        self.cells[address.index()] = value;
    }

    pub fn cells(&self) -> &[Word; MEMORY_SIZE] {
        &self.cells
    }

    /// The first `len` cells, clamped to the memory size.
    pub fn window(&self, len: usize) -> &[Word] {
        &self.cells[..len.min(MEMORY_SIZE)]
    }
}
