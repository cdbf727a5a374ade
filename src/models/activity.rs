use serde::Serialize;

// One extracurricular offering. `max_participants` is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        for email in emails {
            if !self.is_signed_up(email) {
                self.participants.push(email.to_string());
            }
        }
        self
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_participants_skips_duplicates() {
        let activity = Activity::new("Board games", "Mondays", 4)
            .with_participants(&["a@mergington.edu", "b@mergington.edu", "a@mergington.edu"]);

        assert_eq!(
            activity.participants,
            vec!["a@mergington.edu".to_string(), "b@mergington.edu".to_string()]
        );
        assert_eq!(activity.spots_left(), 2);
    }

    #[test]
    fn spots_left_goes_negative_when_over_capacity() {
        let activity =
            Activity::new("Tiny", "Never", 1).with_participants(&["a@x.edu", "b@x.edu"]);
        assert_eq!(activity.spots_left(), -1);
    }
}
