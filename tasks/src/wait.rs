use std::time::{Duration, Instant};

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time;

use crate::TaskError;

/// Upper bound, in seconds, used when no delay is configured.
pub const DEFAULT_MAX_DELAY: u32 = 10;

/// Uniform delay in `[0, max_delay)` seconds, truncated to whole milliseconds.
#[must_use]
pub fn random_delay(max_delay: u32) -> Duration {
    let millis = f64::from(max_delay) * 1000.0 * rand::random::<f64>();
    Duration::from_millis(millis as u64)
}

/// Sleep for a random delay and return it.
pub async fn wait_random(max_delay: u32) -> Duration {
    wait_random_from(time::Instant::now(), max_delay).await
}

/// Sleep until `start + delay` for a random delay.
///
/// A batch shares one `start`, so every deadline is measured from the same
/// base rather than from each task's own spawn time.
async fn wait_random_from(start: time::Instant, max_delay: u32) -> Duration {
    let delay = random_delay(max_delay);
    time::sleep_until(start + delay).await;
    delay
}

/// Spawn [`wait_random`] onto the current runtime.
///
/// Must be called from within a tokio runtime.
pub fn task_wait_random(max_delay: u32) -> JoinHandle<Duration> {
    tokio::spawn(wait_random(max_delay))
}

/// Place `delay` after every recorded delay not longer than it.
///
/// Timers that expire in the same driver turn wake together and their tasks
/// may finish in any order, on any worker. Appending is the common case; an
/// out-of-order arrival is moved back to where its deadline put it.
fn record_completion(delays: &mut Vec<Duration>, delay: Duration) {
    let at = delays.partition_point(|recorded| *recorded <= delay);
    delays.insert(at, delay);
}

/// Run `n` random waits concurrently and return their delays in completion order.
///
/// The result is ascending: a shorter delay always completes first.
pub async fn wait_n(n: u32, max_delay: u32) -> Result<Vec<Duration>, TaskError> {
    tracing::debug!(n, max_delay, "Spawning delay tasks");
    let start = time::Instant::now();
    let mut tasks = JoinSet::new();
    for _ in 0..n {
        tasks.spawn(wait_random_from(start, max_delay));
    }

    let mut delays = Vec::with_capacity(n as usize);
    while let Some(delay) = tasks.join_next().await {
        record_completion(&mut delays, delay?);
    }
    Ok(delays)
}

/// Like [`wait_n`], built from spawned task handles.
pub async fn task_wait_n(n: u32, max_delay: u32) -> Result<Vec<Duration>, TaskError> {
    tracing::debug!(n, max_delay, "Spawning delay task handles");
    let start = time::Instant::now();
    let mut pending: FuturesUnordered<JoinHandle<Duration>> = (0..n)
        .map(|_| tokio::spawn(wait_random_from(start, max_delay)))
        .collect();

    let mut delays = Vec::with_capacity(n as usize);
    while let Some(delay) = pending.next().await {
        record_completion(&mut delays, delay?);
    }
    Ok(delays)
}

/// Average wall-clock time per task of `wait_n(n, max_delay)`.
///
/// Builds its own single-threaded runtime, so it must not be called from
/// async code. Returns zero when `n` is zero.
pub fn measure_time(n: u32, max_delay: u32) -> Result<Duration, TaskError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let start = Instant::now();
    runtime.block_on(wait_n(n, max_delay))?;
    let elapsed = start.elapsed();

    Ok(elapsed.checked_div(n).unwrap_or(Duration::ZERO))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures_util::future::join_all;
    use tokio::time::Instant;

    use super::{
        measure_time, random_delay, record_completion, task_wait_n, task_wait_random, wait_n,
        wait_random,
    };

    fn is_ascending(delays: &[Duration]) -> bool {
        delays.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[test]
    fn random_delay_stays_below_max() {
        for _ in 0..1000 {
            assert!(random_delay(10) < Duration::from_secs(10));
        }
        assert_eq!(random_delay(0), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_random_sleeps_for_returned_delay() {
        let start = Instant::now();
        let delay = wait_random(10).await;
        let elapsed = start.elapsed();

        assert!(delay < Duration::from_secs(10));
        assert!(elapsed >= delay, "elapsed {elapsed:?} < delay {delay:?}");
        assert!(elapsed <= delay + Duration::from_millis(2));
    }

    #[tokio::test(start_paused = true)]
    async fn task_wait_random_resolves_to_delay() {
        let delay = task_wait_random(3).await.unwrap();
        assert!(delay < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_n_returns_completion_order() {
        for _ in 0..20 {
            let delays = wait_n(5, 10).await.unwrap();
            assert_eq!(delays.len(), 5);
            assert!(is_ascending(&delays), "{delays:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn wait_n_runs_concurrently() {
        let start = Instant::now();
        let delays = wait_n(10, 10).await.unwrap();
        let elapsed = start.elapsed();

        let longest = delays.iter().copied().max().unwrap();
        assert!(elapsed <= longest + Duration::from_millis(2));
    }

    #[tokio::test(start_paused = true)]
    async fn task_wait_n_returns_completion_order() {
        for _ in 0..20 {
            let delays = task_wait_n(5, 10).await.unwrap();
            assert_eq!(delays.len(), 5);
            assert!(is_ascending(&delays), "{delays:?}");
        }
    }

    #[tokio::test]
    async fn zero_tasks_is_empty() {
        assert!(wait_n(0, 10).await.unwrap().is_empty());
        assert!(task_wait_n(0, 10).await.unwrap().is_empty());
    }

    #[test]
    fn measure_time_averages_over_tasks() {
        let average = measure_time(5, 0).unwrap();
        assert!(average < Duration::from_millis(100), "{average:?}");
        assert_eq!(measure_time(0, 10).unwrap(), Duration::ZERO);
    }

    #[test]
    fn measure_time_divides_total_by_task_count() {
        // Twenty waits under 1s overlap to about the longest one, so the
        // per-task average lands near 50ms; the undivided total would not.
        let average = measure_time(20, 1).unwrap();
        assert!(average < Duration::from_millis(150), "{average:?}");
    }

    #[test]
    fn late_arrival_is_placed_by_delay() {
        let ms = Duration::from_millis;
        let mut delays = Vec::new();
        for delay in [ms(3), ms(190), ms(189), ms(190), ms(774)] {
            record_completion(&mut delays, delay);
        }
        assert_eq!(delays, [ms(3), ms(189), ms(190), ms(190), ms(774)]);
    }

    #[tokio::test]
    async fn completion_order_holds_on_real_clock() {
        for _ in 0..20 {
            let delays = wait_n(5, 1).await.unwrap();
            assert!(is_ascending(&delays), "{delays:?}");
        }
        let dense = wait_n(200, 1).await.unwrap();
        assert_eq!(dense.len(), 200);
        assert!(is_ascending(&dense));
        let dense = task_wait_n(200, 1).await.unwrap();
        assert!(is_ascending(&dense));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn completion_order_holds_across_workers() {
        let batches = join_all((0..200).map(|_| wait_n(5, 1))).await;
        for delays in batches {
            let delays = delays.unwrap();
            assert!(is_ascending(&delays), "{delays:?}");
        }
        for _ in 0..5 {
            assert!(is_ascending(&wait_n(200, 1).await.unwrap()));
            assert!(is_ascending(&task_wait_n(200, 1).await.unwrap()));
        }
    }
}
