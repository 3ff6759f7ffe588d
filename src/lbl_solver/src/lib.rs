#![warn(clippy::pedantic)]

pub mod config;
mod frame;
mod resolver;
pub mod solver;
pub mod stage;
mod tables;

pub use config::{ConfigError, SolverConfig};
pub use solver::{IncrementalSolver, SolveError, SolveSession, Solver, SolverInternalError};
pub use stage::Stage;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
