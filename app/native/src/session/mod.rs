//! Interactive layout session.
//!
//! A session owns everything a broadcast page feeds into the layout engine:
//! the participant roster, the container size, the spacing and the roster
//! options. Every input change recomputes the layout and publishes it through
//! an observable, so renderers can subscribe instead of polling.
//!
//! Resize notifications and roster changes arrive independently. The session
//! never merges partial updates: each call replaces one input and the
//! published snapshot always reflects the latest complete set of inputs.

mod cache;
mod shared;

pub use cache::{LayoutCache, LayoutKey};
use eyeball::{Observable, Subscriber};
use serde::Serialize;
pub use shared::SharedLayoutSession;

use crate::config::LayoutConfig;
use crate::layout::{ContainerGeometry, LayoutResult, Spacing, TileRect};
use crate::roster::{ParticipantId, Roster, RosterOptions};

/// Published state of a session: who is on screen, and where.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    /// Visible participants, in tile order.
    pub participants: Vec<ParticipantId>,
    /// The computed layout; `layout.tiles[i]` belongs to `participants[i]`.
    pub layout: LayoutResult,
}

impl LayoutSnapshot {
    /// Returns the tile assigned to a participant, if visible.
    #[must_use]
    pub fn tile_for(&self, id: &ParticipantId) -> Option<&TileRect> {
        self.layout.assignments(&self.participants).find(|(p, _)| *p == id).map(|(_, tile)| tile)
    }
}

/// Stateful host around the layout engine.
pub struct LayoutSession {
    roster: Roster,
    options: RosterOptions,
    geometry: ContainerGeometry,
    spacing: Spacing,
    cache: LayoutCache,
    snapshot: Observable<LayoutSnapshot>,
}

impl LayoutSession {
    /// Creates a session with an empty roster.
    #[must_use]
    pub fn new(geometry: ContainerGeometry, spacing: Spacing, options: RosterOptions) -> Self {
        let mut session = Self {
            roster: Roster::default(),
            options,
            geometry,
            spacing,
            cache: LayoutCache::new(),
            snapshot: Observable::new(LayoutSnapshot::default()),
        };
        session.recompute();
        session
    }

    /// Creates a session from the layout configuration.
    #[must_use]
    pub fn from_config(config: &LayoutConfig, geometry: ContainerGeometry) -> Self {
        Self::new(geometry, Spacing::from_config(config), RosterOptions::from_config(config))
    }

    /// Returns the latest published snapshot.
    #[must_use]
    pub fn current(&self) -> &LayoutSnapshot { Observable::get(&self.snapshot) }

    /// Subscribes to snapshot changes.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<LayoutSnapshot> { Observable::subscribe(&self.snapshot) }

    /// Returns the current container geometry.
    #[must_use]
    pub const fn geometry(&self) -> ContainerGeometry { self.geometry }

    /// Returns the full roster, before host ordering and limits.
    #[must_use]
    pub const fn roster(&self) -> &Roster { &self.roster }

    /// Returns the layout cache, for inspection.
    #[must_use]
    pub const fn cache(&self) -> &LayoutCache { &self.cache }

    /// Handles a container resize.
    ///
    /// Returns `true` if the published snapshot changed.
    pub fn resize(&mut self, geometry: ContainerGeometry) -> bool {
        self.geometry = geometry;
        self.recompute()
    }

    /// Replaces the participant roster.
    ///
    /// Returns `true` if the published snapshot changed.
    pub fn set_roster(&mut self, roster: Roster) -> bool {
        self.roster = roster;
        self.recompute()
    }

    /// Sets (or clears) the participant pinned to the first tile.
    ///
    /// Returns `true` if the published snapshot changed.
    pub fn set_host(&mut self, host: Option<ParticipantId>) -> bool {
        self.options.host = host;
        self.recompute()
    }

    /// Changes the gap and padding.
    ///
    /// Returns `true` if the published snapshot changed.
    pub fn set_spacing(&mut self, spacing: Spacing) -> bool {
        self.spacing = spacing;
        self.recompute()
    }

    /// Recomputes the layout from the current inputs and publishes it.
    fn recompute(&mut self) -> bool {
        let visible = self.roster.clone().visible(&self.options).into_vec();
        let count = visible.len();
        let layout = self.cache.get_or_compute(count, &self.geometry, &self.spacing).clone();
        let mode = layout.mode;
        let changed = Observable::set_if_not_eq(
            &mut self.snapshot,
            LayoutSnapshot { participants: visible, layout },
        )
        .is_some();

        if changed {
            tracing::debug!(
                %mode,
                count,
                width = self.geometry.width,
                height = self.geometry.height,
                "layout updated"
            );
        }

        changed
    }
}
