use thiserror::Error;

use crate::database::ActivityCatalog;
use crate::models::ActivityListing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Student not signed up")]
    NotSignedUp,
}

impl SignupError {
    pub fn kind(&self) -> SignupErrorKind {
        match self {
            SignupError::ActivityNotFound | SignupError::NotSignedUp => SignupErrorKind::NotFound,
            SignupError::AlreadySignedUp => SignupErrorKind::Conflict,
        }
    }
}

pub async fn list_activities(catalog: &ActivityCatalog) -> ActivityListing {
    catalog.snapshot().await
}

/// Appends `email` to the roster of `activity_name`.
///
/// Capacity (`max_participants`) is informational and not checked here.
pub async fn sign_up(
    catalog: &ActivityCatalog,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    catalog
        .with_activity_mut(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(SignupError::AlreadySignedUp);
            }
            activity.participants.push(email.to_string());
            Ok(format!("Signed up {} for {}", email, activity_name))
        })
        .await
        .ok_or(SignupError::ActivityNotFound)?
}

/// Removes `email` from the roster of `activity_name`, keeping the order of
/// everyone else.
pub async fn unregister(
    catalog: &ActivityCatalog,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    catalog
        .with_activity_mut(activity_name, |activity| {
            let idx = activity
                .participants
                .iter()
                .position(|p| p == email)
                .ok_or(SignupError::NotSignedUp)?;
            activity.participants.remove(idx);
            Ok(format!("Unregistered {} from {}", email, activity_name))
        })
        .await
        .ok_or(SignupError::ActivityNotFound)?
}
