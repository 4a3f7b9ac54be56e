use crate::core::{format_flag, parse_flag, PreferenceStore, REDUCE_MOTION_KEY};
use web_sys as web;

/// `localStorage`-backed preference. Private browsing or a disabled store
/// degrades to "not set" and silently drops writes.
pub struct LocalStoragePreference {
    storage: Option<web::Storage>,
}

impl LocalStoragePreference {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; motion preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStoragePreference {
    fn load(&self) -> bool {
        let raw = self
            .storage
            .as_ref()
            .and_then(|s| s.get_item(REDUCE_MOTION_KEY).ok().flatten());
        parse_flag(raw.as_deref())
    }

    fn save(&mut self, reduce_motion: bool) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(REDUCE_MOTION_KEY, format_flag(reduce_motion)) {
                log::warn!("could not persist {}: {:?}", REDUCE_MOTION_KEY, e);
            }
        }
    }
}
