// src/packages/mod.rs

//! Package files and the package filename grammar
//!
//! Package archives are never opened; everything repo knows about a package
//! comes from its file name and its modification time.

pub mod file;
pub mod name;

pub use file::{CandidateSet, PackageFile};
pub use name::{PackageGrammar, extract_name};
