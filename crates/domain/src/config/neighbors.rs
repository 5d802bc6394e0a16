use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output dialect of the neighbor diagnostic command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborFormat {
    /// BSD `ndp -an`
    #[default]
    Ndp,
    /// Linux `ip -6 neigh show`
    IpNeigh,
}

impl NeighborFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NeighborFormat::Ndp => "ndp",
            NeighborFormat::IpNeigh => "ip-neigh",
        }
    }

    pub fn default_program(&self) -> &'static str {
        match self {
            NeighborFormat::Ndp => "ndp",
            NeighborFormat::IpNeigh => "ip",
        }
    }

    pub fn default_args(&self) -> Vec<String> {
        let args: &[&str] = match self {
            NeighborFormat::Ndp => &["-an"],
            NeighborFormat::IpNeigh => &["-6", "neigh", "show"],
        };
        args.iter().map(|a| a.to_string()).collect()
    }
}

impl fmt::Display for NeighborFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeighborFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ndp" => Ok(NeighborFormat::Ndp),
            "ip-neigh" | "ip" => Ok(NeighborFormat::IpNeigh),
            other => Err(format!("unknown neighbor format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NeighborsConfig {
    #[serde(default)]
    pub format: NeighborFormat,

    /// Program to run; defaults to the one matching `format`
    #[serde(default)]
    pub command: Option<String>,

    #[serde(default)]
    pub args: Option<Vec<String>>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl NeighborsConfig {
    pub fn program(&self) -> String {
        self.command
            .clone()
            .unwrap_or_else(|| self.format.default_program().to_string())
    }

    pub fn arguments(&self) -> Vec<String> {
        self.args
            .clone()
            .unwrap_or_else(|| self.format.default_args())
    }
}

impl Default for NeighborsConfig {
    fn default() -> Self {
        Self {
            format: NeighborFormat::default(),
            command: None,
            args: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}
