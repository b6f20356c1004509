use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use super::email;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    fn position_of(&self, email: &str) -> Option<usize> {
        self.participants.iter().position(|p| p == email)
    }
}

pub type Activities = IndexMap<String, Activity>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String, max_participants: u32 },

    #[error("Invalid email address")]
    InvalidEmail { email: String },
}

/// Rules applied on signup on top of the existence/duplicate checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupPolicy {
    /// Reject signups once `max_participants` is reached.
    pub enforce_capacity: bool,
    /// Reject addresses that don't look like `local@domain.tld`.
    pub strict_email: bool,
}

/// Shared handle to the activity table. Clones point at the same data.
///
/// Every mutation holds the write lock across its check and its update,
/// so concurrent signups for the same activity can't both pass the
/// duplicate or capacity check.
#[derive(Debug, Clone)]
pub struct Registry {
    activities: Arc<RwLock<Activities>>,
    policy: SignupPolicy,
}

impl Registry {
    pub fn new(activities: Activities) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
            policy: SignupPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SignupPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Snapshot of every activity, in seed order.
    pub async fn get_all(&self) -> Activities {
        self.activities.read().await.clone()
    }

    pub async fn add_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let Some(entry) = activities.get_mut(activity) else {
            return Err(RegistryError::ActivityNotFound { activity: activity.to_owned() });
        };

        if self.policy.strict_email && !email::is_valid(email) {
            return Err(RegistryError::InvalidEmail { email: email.to_owned() });
        }

        if entry.position_of(email).is_some() {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity.to_owned(),
                email: email.to_owned(),
            });
        }

        if self.policy.enforce_capacity && entry.is_full() {
            return Err(RegistryError::ActivityFull {
                activity: activity.to_owned(),
                max_participants: entry.max_participants,
            });
        }

        entry.participants.push(email.to_owned());
        tracing::info!(%activity, %email, count = entry.participants.len(), "participant added");
        Ok(())
    }

    pub async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let Some(entry) = activities.get_mut(activity) else {
            return Err(RegistryError::ActivityNotFound { activity: activity.to_owned() });
        };

        let Some(index) = entry.position_of(email) else {
            return Err(RegistryError::NotRegistered {
                activity: activity.to_owned(),
                email: email.to_owned(),
            });
        };

        // keep the remaining participants in signup order
        entry.participants.remove(index);
        tracing::info!(%activity, %email, count = entry.participants.len(), "participant removed");
        Ok(())
    }
}
