use std::{collections::HashSet, path::Path};

use anyhow::{Context, ensure};

use crate::include_res;

use super::{Activities, Registry};

/// The activities every fresh process starts with.
pub fn builtin() -> anyhow::Result<Activities> {
    parse(include_res!(str, "/activities.json"))
}

pub async fn from_file(path: &Path) -> anyhow::Result<Activities> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    parse(&json).with_context(|| format!("loading activities from {}", path.display()))
}

pub fn parse(json: &str) -> anyhow::Result<Activities> {
    let activities: Activities = serde_json::from_str(json)?;

    for (name, activity) in &activities {
        ensure!(activity.max_participants > 0, "{name}: max_participants must be positive");
        ensure!(
            activity.participants.len() <= activity.max_participants as usize,
            "{name}: {} participants exceed capacity {}",
            activity.participants.len(),
            activity.max_participants,
        );

        let mut seen = HashSet::new();
        for email in &activity.participants {
            ensure!(seen.insert(email), "{name}: {email} listed twice");
        }
    }

    Ok(activities)
}

impl Registry {
    pub fn seeded() -> anyhow::Result<Self> {
        Ok(Self::new(builtin()?))
    }
}
