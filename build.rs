use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const WATCHED_EXTENSIONS: &[&str] = &["html", "js", "css"];

fn main() {
    watch_assets(Path::new("static"));

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITIES_BUILD_ID={}", build_id);
}

/// Registers every front-end asset under `dir` as a rebuild trigger, so the
/// build id reported by /healthz tracks what is actually served.
fn watch_assets(dir: &Path) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            watch_assets(&path);
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| WATCHED_EXTENSIONS.contains(&ext))
        {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
