use tracing::info;

use crate::database::ActivityCatalog;
use crate::error::SignupError;

pub fn signup(
    catalog: &ActivityCatalog,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let spots_left = catalog
        .with_activity(activity_name, |activity| {
            if activity.is_signed_up(email) {
                return Err(SignupError::AlreadySignedUp {
                    email: email.to_string(),
                });
            }
            activity.participants.push(email.to_string());
            Ok(activity.spots_left())
        })
        .ok_or(SignupError::ActivityNotFound)??;

    info!(activity = %activity_name, email = %email, spots_left, "participant signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(
    catalog: &ActivityCatalog,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    catalog
        .with_activity(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(SignupError::NotSignedUp {
                    email: email.to_string(),
                });
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .ok_or(SignupError::ActivityNotFound)??;

    info!(activity = %activity_name, email = %email, "participant removed");
    Ok(format!("Removed {} from {}", email, activity_name))
}
