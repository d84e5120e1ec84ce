//! closure-lab: function and closure calling conventions as plain Rust.
//!
//! Each module covers one family of conventions and returns values
//! instead of printing. `walkthrough` strings them together into an
//! ordered transcript.

pub mod capture;
pub mod error;
pub mod function_values;
pub mod signatures;
pub mod sorting;
pub mod thunk;
pub mod trailing;
pub mod walkthrough;

pub use capture::{Incrementer, RunningTotal, incrementer_over, make_incrementer};
pub use error::{LabError, Result};
pub use function_values::{MathFunction, OperationTable, StepFunction, choose_step_function};
pub use signatures::arithmetic_mean;
pub use thunk::{CustomerLine, Provider, ProviderQueue, serve_customer};
pub use walkthrough::{Transcript, WalkthroughConfig};
