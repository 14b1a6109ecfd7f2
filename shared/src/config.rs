use std::{env, path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub snapshot: SnapshotConfig,
    pub booking: BookingConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: match env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a TCP port number")?,
                Err(_) => 3000,
            },
        };
        let snapshot = SnapshotConfig {
            path: env::var("SNAPSHOT_PATH").ok().map(PathBuf::from),
        };
        let booking = BookingConfig {
            conflict_policy: match env::var("CONFLICT_POLICY") {
                Ok(v) => v.parse()?,
                Err(_) => ConflictPolicy::default(),
            },
        };
        Ok(Self {
            server,
            snapshot,
            booking,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Where the store persists its state. `None` keeps everything in memory.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub conflict_policy: ConflictPolicy,
}

/// How booking intervals on the same room and date are tested for conflicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Endpoint containment: a candidate conflicts only when one of its own
    /// endpoints falls inside an existing booking. A candidate that strictly
    /// contains an existing booking is not flagged. Default, so clients see
    /// the accept/reject decisions they are used to.
    #[default]
    Legacy,
    /// Full interval overlap: two bookings conflict when they share any
    /// instant.
    Canonical,
}

impl FromStr for ConflictPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "canonical" => Ok(Self::Canonical),
            other => bail!("CONFLICT_POLICY must be \"legacy\" or \"canonical\", got \"{other}\""),
        }
    }
}
