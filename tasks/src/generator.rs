use std::time::Duration;

use futures_util::future::join_all;
use futures_util::stream::{self, Stream, StreamExt};
use tokio::time::Instant;

/// Values produced by one [`async_generator`] run.
pub const GENERATOR_COUNT: usize = 10;
/// Pause before each value.
pub const GENERATOR_INTERVAL: Duration = Duration::from_secs(1);
/// Exclusive upper bound of generated values.
pub const GENERATOR_MAX: f64 = 10.0;

const PARALLEL_COMPREHENSIONS: usize = 4;

/// Yields [`GENERATOR_COUNT`] values in `[0, GENERATOR_MAX)`, one every
/// [`GENERATOR_INTERVAL`].
pub fn async_generator() -> impl Stream<Item = f64> {
    stream::unfold(0, |emitted| async move {
        if emitted == GENERATOR_COUNT {
            return None;
        }
        tokio::time::sleep(GENERATOR_INTERVAL).await;
        Some((GENERATOR_MAX * rand::random::<f64>(), emitted + 1))
    })
}

pub async fn async_comprehension() -> Vec<f64> {
    async_generator().collect().await
}

/// Time taken by four concurrent [`async_comprehension`] runs.
///
/// The runs overlap, so this is close to one run's duration rather than four.
pub async fn measure_runtime() -> Duration {
    let start = Instant::now();
    join_all((0..PARALLEL_COMPREHENSIONS).map(|_| async_comprehension())).await;
    start.elapsed()
}
