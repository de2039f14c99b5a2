//! Thread-safe handle to a layout session.

use std::sync::Arc;

use eyeball::Subscriber;
use parking_lot::Mutex;

use super::{LayoutSession, LayoutSnapshot};
use crate::layout::{ContainerGeometry, Spacing};
use crate::roster::{ParticipantId, Roster};

/// Cloneable handle that serializes updates to one [`LayoutSession`].
///
/// Resize and roster events may come from different threads; each update runs
/// under the lock, so the last write wins and readers never observe a layout
/// built from a mix of old and new inputs.
#[derive(Clone)]
pub struct SharedLayoutSession {
    inner: Arc<Mutex<LayoutSession>>,
}

impl SharedLayoutSession {
    /// Wraps a session for shared use.
    #[must_use]
    pub fn new(session: LayoutSession) -> Self { Self { inner: Arc::new(Mutex::new(session)) } }

    /// Handles a container resize. Returns `true` if the snapshot changed.
    pub fn resize(&self, geometry: ContainerGeometry) -> bool { self.inner.lock().resize(geometry) }

    /// Replaces the roster. Returns `true` if the snapshot changed.
    pub fn set_roster(&self, roster: Roster) -> bool { self.inner.lock().set_roster(roster) }

    /// Sets (or clears) the host. Returns `true` if the snapshot changed.
    pub fn set_host(&self, host: Option<ParticipantId>) -> bool {
        self.inner.lock().set_host(host)
    }

    /// Changes the spacing. Returns `true` if the snapshot changed.
    pub fn set_spacing(&self, spacing: Spacing) -> bool { self.inner.lock().set_spacing(spacing) }

    /// Returns a copy of the latest snapshot.
    #[must_use]
    pub fn current(&self) -> LayoutSnapshot { self.inner.lock().current().clone() }

    /// Subscribes to snapshot changes.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<LayoutSnapshot> { self.inner.lock().subscribe() }

    /// Runs a closure with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut LayoutSession) -> R) -> R {
        let mut session = self.inner.lock();
        f(&mut *session)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::layout::{LayoutMode, solve};
    use crate::roster::RosterOptions;

    fn shared() -> SharedLayoutSession {
        SharedLayoutSession::new(LayoutSession::new(
            ContainerGeometry::new(1280.0, 720.0),
            Spacing::default(),
            RosterOptions::default(),
        ))
    }

    #[test]
    fn test_clones_share_state() {
        let session = shared();
        let other = session.clone();

        other.set_roster(Roster::new(["a", "b", "c", "d"]));
        assert_eq!(session.current().layout.mode, LayoutMode::Grid2x2);
    }

    #[test]
    fn test_concurrent_updates_settle_on_final_inputs() {
        let session = shared();

        let resizer = {
            let session = session.clone();
            thread::spawn(move || {
                for width in (400..=1600).step_by(100) {
                    session.resize(ContainerGeometry::new(f64::from(width), 720.0));
                }
            })
        };

        let roster = {
            let session = session.clone();
            thread::spawn(move || {
                for count in 1..=8 {
                    let ids: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
                    session.set_roster(Roster::new(ids));
                }
            })
        };

        resizer.join().unwrap();
        roster.join().unwrap();

        let snapshot = session.current();
        let geometry = ContainerGeometry::new(1600.0, 720.0);
        assert_eq!(session.with(|s| s.geometry()), geometry);
        assert_eq!(snapshot.participants.len(), 8);
        assert_eq!(snapshot.layout, solve(&snapshot.participants, &geometry));
    }

    #[test]
    fn test_subscribe_through_handle() {
        let session = shared();
        let mut subscriber = session.subscribe();

        session.set_host(Some("host".into()));
        session.set_roster(Roster::new(["guest", "host"]));

        let next = futures::executor::block_on(subscriber.next()).unwrap();
        assert_eq!(next.participants[0].as_str(), "host");
    }
}
