use dotenvy::dotenv;

use activities::database::seed;

/// Prints the built-in catalog in the `ACTIVITIES_SEED_PATH` format.
///
/// Passing a path writes the file instead of printing it.
fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let listing = seed::default_activities();
    let json = match serde_json::to_string_pretty(&listing) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("seed export failed: {}", e);
            std::process::exit(1);
        }
    };

    match std::env::args().nth(1) {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, format!("{}\n", json)) {
                eprintln!("cannot write {}: {}", path, e);
                std::process::exit(1);
            }
            tracing::info!(path = %path, activities = listing.len(), "seed exported");
        }
        None => println!("{}", json),
    }
}
