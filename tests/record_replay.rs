//! Record-replay round-trip integration test.
//!
//! Proves that the record/replay system works end-to-end:
//! 1. Run `show` against a directory source while recording every fetch.
//! 2. Replay the cassette through `ServiceContext::replaying()`.
//! 3. Assert identical output between recording and replaying.
//! 4. Replay a second time and assert determinism.

use std::fs;
use std::path::Path;

use snapdash::adapters::live::{Capture, DirectorySource};
use snapdash::cassette::format::Cassette;
use snapdash::cli::Command;
use snapdash::commands::dispatch_with_context;
use snapdash::context::ServiceContext;

fn write(root: &Path, path: &str, body: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn show(ctx: &ServiceContext) -> (Result<(), String>, String) {
    let capture = Capture::default();
    let command = Command::Show { repo: "acme/app".to_string(), raw: true };
    let result = dispatch_with_context(&command, ctx, &capture.console());
    (result, capture.contents())
}

#[test]
fn record_then_replay_produces_identical_output() {
    let site = tempfile::tempdir().unwrap();
    write(
        site.path(),
        "data/acme/app/latest.json",
        r#"{"generated_at": "t2", "language": {"java_file_ratio": 0.4}}"#,
    );
    write(site.path(), "data/acme/app/index.json", r#"{"history": ["1.json", "2.json"]}"#);
    write(site.path(), "data/acme/app/1.json", r#"{"generated_at": "t1"}"#);
    write(site.path(), "data/acme/app/2.json", r#"{"generated_at": "t2"}"#);

    let out = tempfile::tempdir().unwrap();
    let cassette_path = out.path().join("cassettes/show.cassette.yaml");

    // --- Phase 1: Record ---
    let live = Box::new(DirectorySource::new(site.path()));
    let ctx = ServiceContext::recording(live, &cassette_path);
    let (recorded_result, recorded) = show(&ctx);
    drop(ctx);
    assert!(recorded_result.is_ok());
    assert!(recorded.contains("» Loaded: acme/app / t2"));

    let cassette = Cassette::load(&cassette_path).unwrap();
    assert_eq!(cassette.interactions.len(), 4, "latest, index and two history documents");
    assert_eq!(cassette.source, site.path().display().to_string());
    for name in ["1.json", "2.json"] {
        let path = format!("data/acme/app/{name}");
        let fetch = cassette
            .interactions
            .iter()
            .find(|i| i.input["path"] == path.as_str())
            .unwrap_or_else(|| panic!("no recorded fetch for {path}"));
        assert!(fetch.output.get("ok").is_some(), "{path} recorded as {}", fetch.output);
    }

    // The site is gone; only the cassette remains.
    drop(site);

    // --- Phase 2: Replay ---
    let ctx1 = ServiceContext::replaying(&cassette_path).unwrap();
    let (result1, replayed1) = show(&ctx1);
    assert!(result1.is_ok());
    assert_eq!(replayed1, recorded, "replay output differs from recording");
    assert!(replayed1.contains("│ t1"), "trend lost the first history point:\n{replayed1}");
    assert!(replayed1.contains("│ t2"));

    // --- Phase 3: Replay a second time, determinism check ---
    let ctx2 = ServiceContext::replaying(&cassette_path).unwrap();
    let (_, replayed2) = show(&ctx2);
    assert_eq!(replayed1, replayed2, "determinism: outputs differ between replays");
}

#[test]
fn recorded_failures_replay_as_failures() {
    let site = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let cassette_path = out.path().join("missing.cassette.yaml");

    let live = Box::new(DirectorySource::new(site.path()));
    let ctx = ServiceContext::recording(live, &cassette_path);
    let (recorded_result, _) = show(&ctx);
    drop(ctx);

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let (replayed_result, _) = show(&ctx);

    assert!(recorded_result.is_err());
    assert_eq!(recorded_result, replayed_result);
}

#[test]
fn replaying_missing_cassette_fails() {
    let result = ServiceContext::replaying(Path::new("/nonexistent/none.cassette.yaml"));
    assert!(result.is_err());
}
