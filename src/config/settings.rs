use std::env;

use tracing::warn;

/// Environment variable holding a comma separated approver list.
pub const APPROVERS_ENV: &str = "BATCH_TRANSFER_APPROVERS";

pub const DEFAULT_APPROVERS: [&str; 5] = [
    "John Smith",
    "Jane Doe",
    "Michael Johnson",
    "Sarah Williams",
    "Robert Brown"
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Identities allowed to approve a batch.
    pub approvers: Vec<String>
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            approvers: DEFAULT_APPROVERS.iter().map(|approver| approver.to_string()).collect()
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_approver_list(env::var(APPROVERS_ENV).ok().as_deref())
    }

    /// Builds settings from an optional comma separated list, falling back to the defaults
    /// when the list is absent or names nobody.
    pub fn from_approver_list(list: Option<&str>) -> Self {
        let Some(list) = list else {
            return Self::default();
        };

        let approvers: Vec<String> = list.split(',')
            .map(str::trim)
            .filter(|approver| !approver.is_empty())
            .map(str::to_string)
            .collect();

        if approvers.is_empty() {
            warn!("{APPROVERS_ENV} does not name any approver, using the default list");
            return Self::default();
        }

        Self { approvers }
    }
}
