// SPDX: CC0-1.0

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{self, Command, Output, Stdio},
};

fn run_shell(stdin: &str) -> Output {
    run_shell_in(&std::env::temp_dir(), stdin)
}

fn run_shell_in(dir: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_canvas_plot"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn shell");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for shell")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn empty_input_exits_cleanly() {
    let out = run_shell("");
    assert!(out.status.success(), "{out:?}");
    let text = stdout_of(&out);
    assert_eq!(text.matches("> ").count(), 1);
    assert!(!text.contains("Unknown command"));
}

#[test]
fn shell_stops_at_end_of_input() {
    let out = run_shell("list\n");
    assert!(out.status.success(), "{out:?}");
    let text = stdout_of(&out);
    assert!(text.contains("  sin\n"));
    assert!(text.contains("  sinc\n"));
    assert_eq!(text.matches("> ").count(), 2);
    assert!(!text.contains("Unknown command"));
}

#[test]
fn unknown_command_suggests_and_quit_exits() {
    let out = run_shell("lsit\nquit\nlist\n");
    assert!(out.status.success(), "{out:?}");
    let text = stdout_of(&out);
    assert!(text.contains("note: command 'list' has a similar name"));
    // nothing after quit is read
    assert!(!text.contains("  sin\n"));
}

#[test]
fn oversized_rate_is_capped() {
    // four bounds, width and height left as they are, then the rate
    let out = run_shell("window\n\n\n\n\n\n\n4294967295\n\n\nquit\n");
    assert!(out.status.success(), "{out:?}");
    let text = stdout_of(&out);
    assert!(
        text.contains("warning: rate 4294967295 is too high, using 1048576"),
        "{text}"
    );
}

#[test]
fn window_stops_at_end_of_input() {
    let out = run_shell("window\n-3\n");
    assert!(out.status.success(), "{out:?}");
    assert!(stdout_of(&out).contains("?x max (is 5) = "));
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("canvas_plot-{}-{name}", process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn bounce_writes_trail_svg() {
    let dir = scratch_dir("bounce");
    let out = run_shell_in(&dir, "bounce\n3\n");
    assert!(out.status.success(), "{out:?}");
    assert!(stdout_of(&out).contains("wrote canvas_plot_bounce-"));

    let svgs: Vec<_> = fs::read_dir(&dir)
        .expect("read scratch dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "svg"))
        .collect();
    assert_eq!(svgs.len(), 1, "{svgs:?}");
    let svg = fs::read_to_string(&svgs[0]).expect("read svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("stroke-dasharray"));

    fs::remove_dir_all(&dir).expect("clean up scratch dir");
}
