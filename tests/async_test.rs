/// Integration tests for the asynchronous wrappers
use okerr::prelude::*;
use std::time::Duration;

#[derive(Debug, PartialEq)]
struct Rejection(&'static str);

async fn slow_answer() -> i32 {
    tokio::time::sleep(Duration::from_millis(5)).await;
    42
}

async fn slow_failure() -> i32 {
    tokio::time::sleep(Duration::from_millis(5)).await;
    panic!("settled with a panic")
}

#[tokio::test]
async fn test_wrap_async_resolved_is_ok() {
    let result = wrap_async(slow_answer).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn test_wrap_async_panic_while_polling_is_err() {
    let result = wrap_async(slow_failure).await;
    let caught = result.expect_err("future panicked");
    assert_eq!(caught.message(), Some("settled with a panic"));
}

#[tokio::test]
async fn test_wrap_async_panic_while_building_future_is_err() {
    let result = wrap_async(|| -> std::future::Ready<i32> { panic!("never built") }).await;
    assert_eq!(result.err().unwrap().message(), Some("never built"));
}

#[tokio::test]
async fn test_wrap_async_keeps_custom_payload() {
    let result = wrap_async(|| async {
        std::panic::panic_any(Rejection("custom"));
    })
    .await;
    let caught = result.err().unwrap();
    assert_eq!(caught.downcast_ref::<Rejection>(), Some(&Rejection("custom")));
}

#[tokio::test]
async fn test_try_wrap_async_rejection_is_err_verbatim() {
    let result = try_wrap_async(|| async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Err::<u8, _>(Rejection("timeout"))
    })
    .await;
    assert_eq!(result.err(), Some(Rejection("timeout")));
}

#[tokio::test]
async fn test_try_wrap_async_resolved_is_ok() {
    let result = try_wrap_async(|| async { Ok::<_, Rejection>("done") }).await;
    assert_eq!(result.unwrap(), "done");
}

#[tokio::test]
async fn test_wrap_async_always_settles_under_timeout() {
    let settled = tokio::time::timeout(Duration::from_secs(5), wrap_async(slow_failure)).await;
    assert!(settled.is_ok(), "wrap_async must resolve once the operation settles");
    assert!(settled.unwrap().is_err());
}

#[tokio::test]
async fn test_external_timeout_becomes_err() {
    let result = try_wrap_async(|| async {
        tokio::time::timeout(Duration::from_millis(1), std::future::pending::<()>()).await
    })
    .await;
    assert!(result.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_results_cross_task_boundaries() {
    let handle = tokio::spawn(async { wrap_async(slow_answer).await.map(|v| v + 1) });
    let result = handle.await.unwrap();
    assert_eq!(result.unwrap(), 43);
}

#[tokio::test]
async fn test_join_many_wrapped_operations() {
    let results = futures::future::join_all((0..4).map(|i| {
        wrap_async(move || async move {
            if i % 2 == 0 {
                i
            } else {
                panic!("odd input {}", i)
            }
        })
    }))
    .await;

    let oks: Vec<i32> = results.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
    assert_eq!(oks, vec![0, 2]);
    assert_eq!(results.iter().filter(|r| r.is_err()).count(), 2);
}

#[tokio::test]
async fn test_wrap_async_origin_is_the_calling_site() {
    let line = line!() + 1;
    let result = wrap_async(slow_failure).await;
    let origin = result.origin().expect("location recorded by default");
    assert!(origin.file().ends_with("async_test.rs"));
    assert_eq!(origin.line(), line);
}

#[tokio::test]
async fn test_try_wrap_async_origin_is_the_calling_site() {
    let line = line!() + 1;
    let result = try_wrap_async(|| async { Err::<u8, _>(Rejection("rejected")) }).await;
    let origin = result.origin().expect("location recorded by default");
    assert!(origin.file().ends_with("async_test.rs"));
    assert_eq!(origin.line(), line);
    let message = result.try_unwrap().unwrap_err().to_string();
    assert!(message.contains("async_test.rs"));
}
