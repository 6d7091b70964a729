//! TLS editing sessions over listener resources.

use crate::config::{TlsBlock, TlsConfig};
use crate::draft::TlsDraft;
use crate::error::BuildError;
use tracing::{debug, info};

/// A listener resource that owns an optional TLS configuration.
pub trait TlsSlot: Clone {
    /// Listener name, used for diagnostics.
    fn name(&self) -> &str;

    /// Current TLS block as stored, if any.
    fn tls(&self) -> Option<&TlsBlock>;

    /// This listener with its TLS slot replaced by a built configuration.
    fn with_tls(self, tls: TlsConfig) -> Self;
}

/// Editing session for one listener's TLS settings.
///
/// The session owns its draft. The listener it was opened on is never
/// modified; saving hands a merged copy to the caller.
#[derive(Debug, Clone)]
pub struct TlsEditor<L> {
    listener: L,
    draft: TlsDraft,
}

impl<L: TlsSlot> TlsEditor<L> {
    /// Open a session seeded from the listener's current TLS slot.
    pub fn open(listener: L) -> Self {
        let draft = TlsDraft::from_listener(&listener);
        debug!(listener = listener.name(), "Opened TLS editor");
        Self { listener, draft }
    }

    /// The listener being edited, as it was when the session opened.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The working draft.
    pub fn draft(&self) -> &TlsDraft {
        &self.draft
    }

    /// Mutable access to the working draft.
    pub fn draft_mut(&mut self) -> &mut TlsDraft {
        &mut self.draft
    }

    /// Whether [`save`](Self::save) would succeed right now.
    pub fn can_save(&self) -> bool {
        self.draft.validation().is_valid()
    }

    /// Build the draft and hand the updated listener to `on_save`.
    ///
    /// `on_save` runs once, and only if the build succeeds. On failure the
    /// draft is kept so the caller can fix it and try again.
    pub fn save<F>(&self, on_save: F) -> Result<(), BuildError>
    where
        F: FnOnce(L),
    {
        let tls = self.draft.build()?;
        info!(listener = self.listener.name(), "Saving listener TLS configuration");
        on_save(self.listener.clone().with_tls(tls));
        Ok(())
    }

    /// Discard the draft and notify `on_cancel`.
    pub fn cancel<F>(self, on_cancel: F)
    where
        F: FnOnce(),
    {
        debug!(listener = self.listener.name(), "Discarded TLS draft");
        on_cancel();
    }
}
