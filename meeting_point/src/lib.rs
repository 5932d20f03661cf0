//! Command-line front end: parse a branch/edge problem, run Johnson from
//! every branch and report the cheapest common location.

pub mod cli;
pub mod commands;
pub mod input;
pub mod report;

pub use commands::{execute_command, load_problem, solve};
pub use input::{parse_problem, InputError, Problem};
pub use report::{Report, Route};
