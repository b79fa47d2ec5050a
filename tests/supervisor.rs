// tests/supervisor.rs

//! These tests run real `sh` processes.

#![cfg(unix)]

use std::time::Duration;

use tokio::time::{sleep, timeout};

use hookrun::exec::{ScriptSpec, Supervisor, SupervisorOptions, SupervisorRequest};

fn script(name: &str, cmd: &str) -> ScriptSpec {
    ScriptSpec {
        name: name.to_string(),
        cmd: cmd.to_string(),
    }
}

fn options(hooked: bool, ignore_code: bool) -> SupervisorOptions {
    SupervisorOptions {
        hooked,
        ignore_code,
        console: false,
    }
}

#[tokio::test]
async fn unhooked_run_returns_the_script_exit_code() {
    let (supervisor, _requests_tx) = Supervisor::new(script("fail", "exit 7"), options(false, false));

    let code = timeout(Duration::from_secs(10), supervisor.run())
        .await
        .expect("run should finish with the script")
        .expect("no supervisor error expected");

    assert_eq!(code, 7);
}

#[tokio::test]
async fn unhooked_success_returns_zero() {
    let (supervisor, _requests_tx) = Supervisor::new(script("ok", "exit 0"), options(false, false));

    let code = timeout(Duration::from_secs(10), supervisor.run())
        .await
        .expect("run should finish with the script")
        .expect("no supervisor error expected");

    assert_eq!(code, 0);
}

#[tokio::test]
async fn ignore_code_forces_zero_for_a_failing_script() {
    let (supervisor, _requests_tx) = Supervisor::new(script("fail", "exit 7"), options(false, true));

    let code = timeout(Duration::from_secs(10), supervisor.run())
        .await
        .expect("run should finish with the script")
        .expect("no supervisor error expected");

    assert_eq!(code, 0);
}

#[tokio::test]
async fn hooked_nonzero_exit_keeps_the_supervisor_alive() {
    let (supervisor, requests_tx) = Supervisor::new(script("flaky", "exit 3"), options(true, false));
    let run = tokio::spawn(supervisor.run());

    // The script fails almost immediately; with hooks registered that is
    // informational, not terminal.
    sleep(Duration::from_millis(500)).await;
    assert!(!run.is_finished(), "supervisor must await the next trigger");

    requests_tx
        .send(SupervisorRequest::Shutdown)
        .await
        .expect("supervisor should accept requests");

    let code = timeout(Duration::from_secs(5), run)
        .await
        .expect("shutdown should be prompt")
        .expect("supervisor task should not panic")
        .expect("no supervisor error expected");

    assert_eq!(code, 0);
}

#[tokio::test]
async fn restart_requests_replace_a_long_running_script() {
    let (supervisor, requests_tx) =
        Supervisor::new(script("slow", "sleep 5"), options(true, false));
    let run = tokio::spawn(supervisor.run());

    for i in 0..3 {
        requests_tx
            .send(SupervisorRequest::Restart {
                reason: format!("restart {i} [change]"),
            })
            .await
            .expect("supervisor should accept requests");
        sleep(Duration::from_millis(50)).await;
    }

    requests_tx
        .send(SupervisorRequest::Shutdown)
        .await
        .expect("supervisor should accept requests");

    // Shutdown must be bounded even though a 5s child was just started.
    let code = timeout(Duration::from_secs(5), run)
        .await
        .expect("shutdown should not wait for the child")
        .expect("supervisor task should not panic")
        .expect("no supervisor error expected");

    assert_eq!(code, 0);
}

#[tokio::test]
async fn shutdown_while_child_is_running_returns_zero() {
    let (supervisor, requests_tx) =
        Supervisor::new(script("slow", "sleep 5"), options(true, false));
    let run = tokio::spawn(supervisor.run());

    sleep(Duration::from_millis(200)).await;
    requests_tx
        .send(SupervisorRequest::Shutdown)
        .await
        .expect("supervisor should accept requests");

    let code = timeout(Duration::from_secs(5), run)
        .await
        .expect("cleanup must be bounded")
        .expect("supervisor task should not panic")
        .expect("no supervisor error expected");

    assert_eq!(code, 0);
}

#[tokio::test]
async fn stale_exit_from_a_replaced_run_is_ignored() {
    // An unhooked supervisor exits with its script's code; if the exit of a
    // killed predecessor leaked through the generation fence, the code
    // observed here would be the predecessor's -1/143 instead of 4.
    let (supervisor, requests_tx) =
        Supervisor::new(script("switch", "sleep 0.2; exit 4"), options(false, false));
    let run = tokio::spawn(supervisor.run());

    // Replace the initial run while it is still sleeping.
    sleep(Duration::from_millis(50)).await;
    requests_tx
        .send(SupervisorRequest::Restart {
            reason: "restart [change]".to_string(),
        })
        .await
        .expect("supervisor should accept requests");

    let code = timeout(Duration::from_secs(10), run)
        .await
        .expect("replacement run should finish")
        .expect("supervisor task should not panic")
        .expect("no supervisor error expected");

    assert_eq!(code, 4);
}
