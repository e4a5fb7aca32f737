use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Activity, ActivityListing};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid seed entry `{activity}`: {reason}")]
    Invalid { activity: String, reason: String },
}

/// (name, description, schedule, max_participants, participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const SEED_ACTIVITIES: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice drills and compete in inter-school basketball games",
        "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        15,
        &["liam@mergington.edu"],
    ),
    (
        "Soccer Club",
        "Train on ball skills and play friendly matches",
        "Wednesdays, 3:30 PM - 5:30 PM",
        22,
        &["noah@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore drawing, painting, and mixed media techniques",
        "Mondays, 3:30 PM - 5:00 PM",
        18,
        &["mia@mergington.edu"],
    ),
    (
        "Drama Club",
        "Rehearse and perform plays and short scenes",
        "Thursdays, 3:30 PM - 5:30 PM",
        25,
        &["isabella@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        16,
        &["ethan@mergington.edu"],
    ),
    (
        "Debate Team",
        "Build argumentation skills and compete in debate tournaments",
        "Fridays, 4:00 PM - 5:30 PM",
        14,
        &["amelia@mergington.edu", "james@mergington.edu"],
    ),
];

/// The built-in catalog the service starts with.
pub fn default_activities() -> ActivityListing {
    let mut listing = ActivityListing::new();
    for (name, description, schedule, max, participants) in SEED_ACTIVITIES {
        let pushed = listing.push(*name, Activity::new(*description, *schedule, *max, participants));
        debug_assert!(pushed.is_ok(), "duplicate seed activity {}", name);
    }
    listing
}

/// Loads a catalog from a JSON file shaped like the `/activities` response.
pub fn load_seed_file(path: &Path) -> Result<ActivityListing, SeedError> {
    let raw = std::fs::read(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let listing: ActivityListing =
        serde_json::from_slice(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate(&listing)?;
    Ok(listing)
}

pub fn validate(listing: &ActivityListing) -> Result<(), SeedError> {
    for (name, activity) in listing.iter() {
        if name.trim().is_empty() {
            return Err(SeedError::Invalid {
                activity: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if activity.max_participants == 0 {
            return Err(SeedError::Invalid {
                activity: name.to_string(),
                reason: "max_participants must be positive".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::Invalid {
                    activity: name.to_string(),
                    reason: format!("participant {} listed twice", email),
                });
            }
        }
    }
    Ok(())
}
