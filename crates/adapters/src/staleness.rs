use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use folio_application::StalenessNotifier;
use folio_domain::PhotographerId;

/// Shared set of photographers whose media listing is stale. The service
/// raises the flag once per successful like; views call `take` and refetch
/// when it returns true. Clones share the same underlying set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStaleSet {
    inner: Arc<Mutex<HashSet<PhotographerId>>>,
}

impl InMemoryStaleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears and returns the stale flag for one photographer.
    pub fn take(&self, photographer_id: PhotographerId) -> bool {
        self.lock().remove(&photographer_id)
    }

    pub fn is_stale(&self, photographer_id: PhotographerId) -> bool {
        self.lock().contains(&photographer_id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<PhotographerId>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StalenessNotifier for InMemoryStaleSet {
    fn media_invalidated(&self, photographer_id: PhotographerId) {
        self.lock().insert(photographer_id);
    }
}
