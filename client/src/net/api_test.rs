use super::*;

#[test]
fn generate_failed_message_formats_status() {
    assert_eq!(generate_failed_message(502), "generation failed: 502");
}

#[test]
fn query_failed_message_includes_status_text_when_present() {
    assert_eq!(query_failed_message(404, "Not Found"), "query failed: 404 Not Found");
    assert_eq!(query_failed_message(500, ""), "query failed: 500");
}

#[test]
fn save_failed_message_names_mode() {
    assert_eq!(save_failed_message(SaveMode::Final, 400), "final save failed: 400");
    assert_eq!(save_failed_message(SaveMode::Draft, 500), "draft save failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_during_ssr() {
    let request = ObservationRequest { observation: "nodule".to_owned() };
    let result = block_on(generate_report(&request));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Drive a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
