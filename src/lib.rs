pub mod config;
pub mod errors;
pub mod extract;
pub mod rename;
mod runner;
pub mod seq;
pub mod unique;

use crate::errors::FastkitError;

pub fn run() -> Result<(), FastkitError> {
    runner::run()
}
