//! Randomly delayed tokio tasks.
//!
//! - **`wait`**: sleep for a random delay, alone or as `n` concurrent tasks
//!   whose results arrive in completion order
//! - **`generator`**: a paced stream of random numbers and its collection
//!
//! Completion order is the only ordering contract here: a batch of waits
//! returns its delays shortest first, regardless of spawn order.

pub mod generator;
pub mod wait;

use std::io;

use thiserror::Error;
use tokio::task::JoinError;

pub use generator::{async_comprehension, async_generator, measure_runtime};
pub use wait::{
    DEFAULT_MAX_DELAY, measure_time, random_delay, task_wait_n, task_wait_random, wait_n,
    wait_random,
};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("delay task did not complete: {0}")]
    Join(#[from] JoinError),
}
