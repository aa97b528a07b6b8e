//! # Role synchronization cell
//!
//! [`RoleSync`] is the single writer for the role / bank / RIB triple shown
//! to every screen. It hands out immutable [`AuthSnapshot`] values and
//! guarantees two things the UI relies on:
//!
//! 1. **Atomic replace** — a snapshot is always replaced wholesale, never
//!    patched, so a reader can never observe a `bank_id` paired with a stale
//!    `rib`.
//! 2. **Latest-issued wins** — every sync attempt draws a monotonic sequence
//!    number from [`RoleSync::begin`]; [`RoleSync::apply`] discards any
//!    response that is not the latest issued. A slow fetch racing a newer one
//!    can therefore never clobber fresher data.
//!
//! The cell itself performs no I/O: the caller runs the profile fetch and
//! feeds the outcome back in. That keeps the whole state machine testable on
//! any target.

use crate::models::{ProfileRecord, Role};

/// Published authentication snapshot. Immutable value type; replaced as a
/// whole on every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub role: Option<Role>,
    pub bank_id: Option<i32>,
    pub rib: Option<String>,
    pub loading: bool,
    pub error: bool,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self {
            role: None,
            bank_id: None,
            rib: None,
            // A fresh cell is "loading" until the first sync settles, so
            // guards block instead of flashing a redirect.
            loading: true,
            error: false,
        }
    }
}

impl AuthSnapshot {
    /// Snapshot for a signed-out (or never signed-in) user.
    pub fn signed_out() -> Self {
        Self {
            role: None,
            bank_id: None,
            rib: None,
            loading: false,
            error: false,
        }
    }

    fn failed() -> Self {
        Self {
            role: None,
            bank_id: None,
            rib: None,
            loading: false,
            error: true,
        }
    }

    fn from_profile(profile: &ProfileRecord) -> Self {
        Self {
            role: Some(profile.role),
            bank_id: profile.resolved_bank_id(),
            rib: profile.rib.clone(),
            loading: false,
            error: false,
        }
    }
}

/// Single-writer state container for the auth snapshot.
#[derive(Debug, Default)]
pub struct RoleSync {
    seq: u64,
    snapshot: AuthSnapshot,
}

impl RoleSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current published snapshot.
    pub fn snapshot(&self) -> AuthSnapshot {
        self.snapshot.clone()
    }

    /// Start a sync attempt: bumps the sequence number and publishes a
    /// loading snapshot. The returned number must be passed back to
    /// [`RoleSync::apply`] with the fetch outcome.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.snapshot = AuthSnapshot {
            loading: true,
            error: false,
            ..self.snapshot.clone()
        };
        self.seq
    }

    /// Apply the outcome of the sync attempt identified by `seq`.
    ///
    /// Returns `false` (and leaves the snapshot untouched) when a newer
    /// attempt has been issued since — the stale response is discarded.
    pub fn apply<E>(&mut self, seq: u64, outcome: Result<ProfileRecord, E>) -> bool {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "discarding stale role sync response");
            return false;
        }
        self.snapshot = match outcome {
            Ok(profile) => AuthSnapshot::from_profile(&profile),
            Err(_) => AuthSnapshot::failed(),
        };
        true
    }

    /// Drop back to the signed-out snapshot (explicit sign-out). Outstanding
    /// attempts are invalidated.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.snapshot = AuthSnapshot::signed_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(bank_id: Option<i32>, rib: Option<&str>) -> ProfileRecord {
        ProfileRecord {
            role: Role::Beneficiary,
            bank_id,
            rib: rib.map(str::to_string),
        }
    }

    #[test]
    fn successful_sync_publishes_resolved_bank() {
        let mut sync = RoleSync::new();
        let seq = sync.begin();
        assert!(sync.snapshot().loading);

        let applied = sync.apply::<()>(seq, Ok(profile(Some(0), Some("2301234567890123456789"))));
        assert!(applied);

        let snap = sync.snapshot();
        assert_eq!(snap.role, Some(Role::Beneficiary));
        assert_eq!(snap.bank_id, Some(17));
        assert_eq!(snap.rib.as_deref(), Some("2301234567890123456789"));
        assert!(!snap.loading);
        assert!(!snap.error);
    }

    #[test]
    fn failed_sync_clears_everything_and_flags_error() {
        let mut sync = RoleSync::new();
        let seq = sync.begin();
        assert!(sync.apply(seq, Err::<ProfileRecord, &str>("boom")));

        let snap = sync.snapshot();
        assert_eq!(snap.role, None);
        assert_eq!(snap.bank_id, None);
        assert_eq!(snap.rib, None);
        assert!(!snap.loading);
        assert!(snap.error);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut sync = RoleSync::new();
        let slow = sync.begin();
        let fast = sync.begin();

        // The later-issued attempt settles first.
        assert!(sync.apply::<()>(fast, Ok(profile(Some(18), None))));
        assert_eq!(sync.snapshot().bank_id, Some(18));

        // The earlier attempt straggles in afterwards and must not win.
        assert!(!sync.apply::<()>(slow, Ok(profile(Some(19), None))));
        assert_eq!(sync.snapshot().bank_id, Some(18));
    }

    #[test]
    fn reset_invalidates_outstanding_attempts() {
        let mut sync = RoleSync::new();
        let seq = sync.begin();
        sync.reset();

        assert!(!sync.apply::<()>(seq, Ok(profile(Some(17), None))));
        let snap = sync.snapshot();
        assert_eq!(snap.role, None);
        assert!(!snap.loading);
        assert!(!snap.error);
    }

    #[test]
    fn begin_keeps_previous_identity_visible_while_loading() {
        let mut sync = RoleSync::new();
        let seq = sync.begin();
        sync.apply::<()>(seq, Ok(profile(Some(17), Some("2301234567890123456789"))));

        // A refresh shows loading without wiping the current identity.
        sync.begin();
        let snap = sync.snapshot();
        assert!(snap.loading);
        assert_eq!(snap.role, Some(Role::Beneficiary));
        assert_eq!(snap.bank_id, Some(17));
    }
}
