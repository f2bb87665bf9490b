//! Persistence for dashboard data.
//!
//! Each dashboard section lives under its own key as a JSON array, the same
//! layout an export document uses. Encrypted notes are stored as their
//! three-field records; nothing here ever sees a password.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::Store;

use serde::de::DeserializeOwned;

use crate::dashboard::Dashboard;
use crate::error::{DockError, Result};
use crate::export::{LEGACY_TAB_KEY, MY_LIST_KEY, SHORT_TAB_KEY};

fn load_section<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Option<Vec<T>>> {
    match store.get(key)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| DockError::Storage(format!("Invalid data under '{}': {}", key, e))),
    }
}

/// Read the dashboard from `store`. Missing sections load as empty.
pub fn load_dashboard(store: &dyn Store) -> Result<Dashboard> {
    let tabs = match load_section(store, SHORT_TAB_KEY)? {
        Some(tabs) => tabs,
        None => load_section(store, LEGACY_TAB_KEY)?.unwrap_or_default(),
    };
    let categories = load_section(store, MY_LIST_KEY)?.unwrap_or_default();
    log::debug!(
        "loaded dashboard: {} tabs, {} categories",
        tabs.len(),
        categories.len()
    );
    Ok(Dashboard { tabs, categories })
}

/// Write both sections of `dashboard` to `store` in a single change.
///
/// A legacy tab key, if present, is dropped in the same write.
pub fn save_dashboard(store: &mut dyn Store, dashboard: &Dashboard) -> Result<()> {
    let puts = vec![
        (SHORT_TAB_KEY, serde_json::to_value(&dashboard.tabs)?),
        (MY_LIST_KEY, serde_json::to_value(&dashboard.categories)?),
    ];
    let migrating = store.get(LEGACY_TAB_KEY)?.is_some();
    let removes: &[&str] = if migrating { &[LEGACY_TAB_KEY] } else { &[] };
    store.apply(puts, removes)?;
    if migrating {
        log::info!("migrated legacy tab data");
    }
    Ok(())
}
