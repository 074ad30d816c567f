#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn handle_reports_running_until_stopped() {
    let frames = FrameLoop::start(|| {});
    assert!(frames.is_running());
    let for_cleanup = frames.clone();
    for_cleanup.stop();
    assert!(!frames.is_running());
}

#[test]
fn handle_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FrameLoop>();
}
