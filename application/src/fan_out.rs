//! Concurrent fan-out executor.
//!
//! Runs one independent task per target on the tokio runtime and collects
//! every result. The parallelism degree equals the number of targets; a
//! slow or failing task never blocks or fails collection of its siblings —
//! each task is bounded only by whatever timeout it carries internally.
//!
//! Results arrive in completion order but are handed back in target order,
//! so callers see a deterministic sequence regardless of network jitter.
//! Both the query stages and the health aggregator run on this primitive.

use std::future::Future;
use tokio::task::JoinSet;
use tracing::warn;

/// Run all `tasks` concurrently, returning their outputs in input order.
///
/// A panicked task is logged and skipped; its siblings are unaffected.
pub async fn fan_out<T, Fut>(tasks: Vec<Fut>) -> Vec<T>
where
    T: Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    let mut set = JoinSet::new();
    for (index, task) in tasks.into_iter().enumerate() {
        set.spawn(async move { (index, task.await) });
    }

    let mut indexed = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(pair) => indexed.push(pair),
            Err(e) => warn!("fan-out task aborted: {e}"),
        }
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, value)| value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Barrier;

    #[tokio::test(start_paused = true)]
    async fn test_results_in_target_order_despite_completion_order() {
        // First task finishes last; output order must still match input order
        let tasks = vec![
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "first"
            }) as std::pin::Pin<Box<dyn Future<Output = &'static str> + Send>>,
            Box::pin(async { "second" }),
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                "third"
            }),
        ];

        let results = fan_out(tasks).await;
        assert_eq!(results, vec!["first", "second", "third"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_tasks_run_concurrently() {
        // A barrier only opens when both tasks are in flight at once; a
        // sequential executor would deadlock here.
        let barrier = Arc::new(Barrier::new(2));
        let tasks: Vec<_> = (0..2)
            .map(|i| {
                let barrier = Arc::clone(&barrier);
                async move {
                    barrier.wait().await;
                    i
                }
            })
            .collect();

        let results = fan_out(tasks).await;
        assert_eq!(results, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_panicked_task_is_skipped() {
        let tasks = vec![
            Box::pin(async { 1u32 }) as std::pin::Pin<Box<dyn Future<Output = u32> + Send>>,
            Box::pin(async { panic!("backend client bug") }),
            Box::pin(async { 3u32 }),
        ];

        let results = fan_out(tasks).await;
        assert_eq!(results, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let results = fan_out(Vec::<std::pin::Pin<Box<dyn Future<Output = ()> + Send>>>::new()).await;
        assert!(results.is_empty());
    }
}
