use crossbeam_channel::bounded;

use super::dispatch_backend_command;
use crate::backend_bridge::commands::BackendCommand;

#[test]
fn queues_command_and_leaves_status_alone() {
    let (tx, rx) = bounded(1);
    let mut status = "Listo".to_string();

    let queued = dispatch_backend_command(&tx, BackendCommand::CheckHealth, &mut status);

    assert!(queued.is_ok());
    assert_eq!(status, "Listo");
    assert!(matches!(rx.try_recv(), Ok(BackendCommand::CheckHealth)));
}

#[test]
fn full_queue_reports_retry_hint() {
    let (tx, _rx) = bounded(1);
    let mut status = String::new();
    dispatch_backend_command(&tx, BackendCommand::CheckHealth, &mut status).expect("first");

    let err = dispatch_backend_command(&tx, BackendCommand::CheckHealth, &mut status)
        .expect_err("queue is full");

    assert!(err.contains("full"));
    assert_eq!(status, err);
}

#[test]
fn disconnected_worker_reports_transport_failure() {
    let (tx, rx) = bounded::<BackendCommand>(1);
    drop(rx);
    let mut status = String::new();

    let err = dispatch_backend_command(&tx, BackendCommand::CheckHealth, &mut status)
        .expect_err("worker is gone");

    assert!(err.contains("disconnected"));
}
