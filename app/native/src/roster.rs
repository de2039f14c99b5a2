//! Participant roster ordering.
//!
//! The layout engine places tiles strictly in input order. Broadcast rooms
//! want the host in the first (top-left) tile and, in battle mode, only a
//! fixed number of seats on screen; both rules are applied here, before the
//! roster reaches the engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Opaque identifier for a video participant.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a new participant identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self { Self(id) }
}

/// Options controlling which participants are shown, and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterOptions {
    /// Participant to move to the first tile, if present.
    pub host: Option<ParticipantId>,
    /// Whether `host` is moved to the first tile at all.
    pub host_first: bool,
    /// Maximum number of tiles to show.
    pub max_tiles: Option<usize>,
}

impl Default for RosterOptions {
    fn default() -> Self { Self { host: None, host_first: true, max_tiles: None } }
}

impl RosterOptions {
    /// Builds options from the layout configuration.
    ///
    /// The host itself is only known at runtime and must be set separately.
    #[must_use]
    pub const fn from_config(config: &LayoutConfig) -> Self {
        Self { host: None, host_first: config.host_first, max_tiles: config.max_tiles }
    }

    /// Sets the host participant.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<ParticipantId>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the maximum number of visible tiles.
    #[must_use]
    pub const fn with_max_tiles(mut self, max_tiles: Option<usize>) -> Self {
        self.max_tiles = max_tiles;
        self
    }
}

/// An ordered list of participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<ParticipantId>,
}

impl Roster {
    /// Creates a roster from participants in their current order.
    #[must_use]
    pub fn new<I, P>(participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        Self {
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the participants in order.
    #[must_use]
    pub fn as_slice(&self) -> &[ParticipantId] { &self.participants }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize { self.participants.len() }

    /// Returns true if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.participants.is_empty() }

    /// Moves the host to the front, keeping everyone else in relative order.
    ///
    /// A host that is not in the roster leaves the order unchanged.
    #[must_use]
    pub fn host_first(mut self, host: &ParticipantId) -> Self {
        // Stable sort: only the host's key differs, so guests keep their order
        self.participants.sort_by_key(|p| p != host);
        self
    }

    /// Keeps only the first `max` participants.
    #[must_use]
    pub fn limit(mut self, max: usize) -> Self {
        self.participants.truncate(max);
        self
    }

    /// Applies host-first ordering, then the tile limit.
    #[must_use]
    pub fn visible(self, options: &RosterOptions) -> Self {
        let ordered = match &options.host {
            Some(host) if options.host_first => self.host_first(host),
            _ => self,
        };

        match options.max_tiles {
            Some(max) => ordered.limit(max),
            None => ordered,
        }
    }

    /// Consumes the roster, returning the participants.
    #[must_use]
    pub fn into_vec(self) -> Vec<ParticipantId> { self.participants }
}

impl FromIterator<ParticipantId> for Roster {
    fn from_iter<T: IntoIterator<Item = ParticipantId>>(iter: T) -> Self {
        Self { participants: iter.into_iter().collect() }
    }
}
