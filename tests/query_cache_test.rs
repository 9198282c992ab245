use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rru_client::cache::QueryCache;
use rru_client::error::AppError;

#[tokio::test]
async fn cache_hit_skips_the_fetch() {
    let cache = QueryCache::new();
    let fetches = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let fetches = fetches.clone();
        let value: Vec<i64> = cache
            .query("numbers", || async move {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec![1, 2, 3])
            })
            .await
            .unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn concurrent_identical_queries_deduplicate() {
    let cache = QueryCache::new();
    let fetches = Arc::new(AtomicUsize::new(0));

    let first = {
        let fetches = fetches.clone();
        cache.query("users", || async move {
            fetches.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            Ok("snapshot".to_string())
        })
    };
    let second = {
        let fetches = fetches.clone();
        cache.query("users", || async move {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok("snapshot".to_string())
        })
    };

    let (a, b): (Result<String, AppError>, Result<String, AppError>) =
        tokio::join!(first, second);
    assert_eq!(a.unwrap(), "snapshot");
    assert_eq!(b.unwrap(), "snapshot");
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn invalidation_forces_a_refetch() {
    let cache = QueryCache::new();
    let fetches = Arc::new(AtomicUsize::new(0));

    let fetch = |fetches: Arc<AtomicUsize>| move || async move {
        let n = fetches.fetch_add(1, Ordering::SeqCst);
        Ok(n)
    };

    let first: usize = cache.query("terms", fetch(fetches.clone())).await.unwrap();
    cache.invalidate("terms").await;
    let second: usize = cache.query("terms", fetch(fetches.clone())).await.unwrap();

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn different_keys_do_not_share_entries() {
    let cache = QueryCache::new();

    let a: i64 = cache.query("a", || async { Ok(1) }).await.unwrap();
    let b: i64 = cache.query("b", || async { Ok(2) }).await.unwrap();
    assert_eq!((a, b), (1, 2));
}
