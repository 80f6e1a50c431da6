// src/status.rs

//! Aggregate outcome of a repository operation
//!
//! Per-item failures are folded together with bitwise OR, so a single run can
//! report several kinds of trouble at once. The raw bits are the process exit
//! code.

use bitflags::bitflags;

bitflags! {
    /// Outcome flags; the empty set means success.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u8 {
        /// A single item failed (e.g. one file could not be deleted).
        const MINOR = 0b0001;
        /// An expected failure, such as no files found for a package.
        const DEFAULT = 0b0010;
        /// A system-level failure: prerequisites or an external command.
        const SYSTEM = 0b0100;
        /// Undefined or unimplemented behaviour.
        const UNDEF = 0b1000;
    }
}

impl Status {
    /// Successful outcome
    pub const OK: Status = Status::empty();

    pub fn is_ok(&self) -> bool {
        self.is_empty()
    }

    /// Exit code for the process
    pub fn code(&self) -> u8 {
        self.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_is_zero() {
        assert!(Status::OK.is_ok());
        assert_eq!(Status::OK.code(), 0);
    }

    #[test]
    fn test_flags_accumulate() {
        let mut status = Status::OK;
        status |= Status::MINOR;
        status |= Status::SYSTEM;
        status |= Status::MINOR;

        assert!(!status.is_ok());
        assert_eq!(status.code(), 5);
        assert!(status.contains(Status::MINOR));
        assert!(!status.contains(Status::DEFAULT));
    }
}
