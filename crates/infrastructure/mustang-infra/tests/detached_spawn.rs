use mustang_infra::{DetachedSpawner, LaunchError};
use std::path::Path;

#[test]
#[cfg(unix)]
fn spawning_returns_without_waiting_for_the_child() {
    let started = std::time::Instant::now();
    let spawned = DetachedSpawner::new()
        .spawn(Path::new("sleep"), &["5".to_string()])
        .expect("sleep should be on PATH");

    assert!(spawned.pid > 0);
    assert!(
        started.elapsed() < std::time::Duration::from_secs(2),
        "spawn must not block on the child"
    );
}

#[test]
#[cfg(unix)]
fn exited_children_are_reaped_while_running_ones_are_kept() {
    let spawner = DetachedSpawner::new();
    spawner
        .spawn(Path::new("true"), &[])
        .expect("true should be on PATH");
    spawner
        .spawn(Path::new("sleep"), &["5".to_string()])
        .expect("sleep should be on PATH");

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(3);
    while spawner.unreaped() > 1 && std::time::Instant::now() < deadline {
        std::thread::sleep(std::time::Duration::from_millis(20));
    }

    assert_eq!(spawner.unreaped(), 1, "only the sleeping child should remain");
}

#[test]
fn missing_program_surfaces_io_error() {
    let err = DetachedSpawner::new()
        .spawn(
            Path::new("/nonexistent/mustang/definitely-not-here"),
            &["--kiosk".to_string()],
        )
        .expect_err("spawn of a missing program must fail");

    match err {
        LaunchError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error: {other}"),
    }
}
