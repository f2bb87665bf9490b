//! JSON export and import of all dashboard data.
//!
//! The document is a single object with one array per section. Encrypted
//! notes travel as their three-field records and are never opened here.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::dashboard::{Category, Dashboard, Tab};
use crate::error::{DockError, Result};

/// Key holding the tabs section.
pub const SHORT_TAB_KEY: &str = "shortTabData";

/// Key holding the categories section.
pub const MY_LIST_KEY: &str = "myListData";

/// Older exports stored tabs under this key.
pub const LEGACY_TAB_KEY: &str = "tabData-dev";

/// The on-disk export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(rename = "shortTabData")]
    pub short_tab_data: Vec<Tab>,

    #[serde(rename = "myListData")]
    pub my_list_data: Vec<Category>,
}

impl From<&Dashboard> for ExportDocument {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            short_tab_data: dashboard.tabs.clone(),
            my_list_data: dashboard.categories.clone(),
        }
    }
}

/// Which sections an import replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub tabs_imported: bool,
    pub categories_imported: bool,
}

impl ImportReport {
    pub fn is_empty(&self) -> bool {
        !self.tabs_imported && !self.categories_imported
    }
}

/// Serialize the dashboard as pretty-printed JSON.
pub fn export_json(dashboard: &Dashboard) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ExportDocument::from(dashboard))?)
}

/// File name for an export taken at `now`: `<base>-<ddMMyyyyHHmmss>.json`.
pub fn export_file_name<Tz: TimeZone>(base: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}-{}.json", base, now.format("%d%m%Y%H%M%S"))
}

/// Apply an export document to `dashboard`.
///
/// Each section that is present and an array replaces the current one;
/// anything else is skipped. A document that is not a JSON object is an error
/// and leaves `dashboard` untouched.
pub fn import_json(dashboard: &mut Dashboard, json: &str) -> Result<ImportReport> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or_else(|| {
        DockError::Validation("Expected a JSON object with dashboard sections".to_string())
    })?;

    let tabs = object
        .get(SHORT_TAB_KEY)
        .filter(|v| !v.is_null())
        .or_else(|| object.get(LEGACY_TAB_KEY));
    let tabs: Option<Vec<Tab>> = match tabs {
        Some(value) if value.is_array() => Some(serde_json::from_value(value.clone())?),
        _ => None,
    };

    let categories: Option<Vec<Category>> = match object.get(MY_LIST_KEY) {
        Some(value) if value.is_array() => Some(serde_json::from_value(value.clone())?),
        _ => None,
    };

    let mut report = ImportReport::default();
    match tabs {
        Some(tabs) => {
            log::info!("importing {} tabs", tabs.len());
            dashboard.tabs = tabs;
            report.tabs_imported = true;
        }
        None => log::warn!("no valid tab data found in import"),
    }
    match categories {
        Some(categories) => {
            log::info!("importing {} categories", categories.len());
            dashboard.categories = categories;
            report.categories_imported = true;
        }
        None => log::warn!("no valid category data found in import"),
    }
    Ok(report)
}
