use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// Directory to change into before touching the database. Relative
    /// database and log paths resolve against it.
    #[serde(default)]
    pub workdir: Option<String>,
}
