//! Interactive command-line shell
//!
//! A thin read-validate-dispatch loop over the ledger.

pub mod prompt;
pub mod shell;

pub use prompt::Prompter;
pub use shell::Shell;
