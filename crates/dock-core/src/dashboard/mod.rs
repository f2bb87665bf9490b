//! Tabs of shortcuts and categories of items.
//!
//! All mutations validate their input and leave the dashboard unchanged on
//! error. Persisting the result is up to the caller (see [`crate::storage`]).

mod links;
mod types;

pub use links::{domain_name, favicon_url, parse_link, ITEM_ICON_SIZE, SHORTCUT_FAVICON_SIZE};
pub use types::{Category, CategoryItem, Dashboard, Shortcut, Tab};

use uuid::Uuid;

use crate::error::{DockError, Result};
use crate::note::NoteBody;

/// Move the element at `from` to `to`, clamping both into range.
///
/// Mirrors drag-and-drop list reordering: out-of-range indices snap to the
/// nearest end, and empty lists or equal indices are left alone.
pub fn move_in_list<T>(list: &mut Vec<T>, from: usize, to: usize) {
    if list.is_empty() {
        return;
    }
    let last = list.len() - 1;
    let from = from.min(last);
    let to = to.min(last);
    if from == to {
        return;
    }
    let element = list.remove(from);
    list.insert(to, element);
}

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::now_v7())
}

fn required_name(value: &str, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DockError::InvalidInput(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// Keep a link only if it parses as a URL; otherwise store it as empty.
fn normalize_link(link: &str) -> String {
    match parse_link(link) {
        Some(_) => link.trim().to_string(),
        None => String::new(),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Dashboard {
    /// Create an empty dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tabs ---

    pub fn tab(&self, id: &str) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|tab| tab.id == id)
            .ok_or_else(|| DockError::NotFound(format!("tab {}", id)))
    }

    fn tab_mut(&mut self, id: &str) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|tab| tab.id == id)
            .ok_or_else(|| DockError::NotFound(format!("tab {}", id)))
    }

    /// Add a tab and return its ID.
    pub fn add_tab(&mut self, name: &str) -> Result<String> {
        let name = required_name(name, "Tab name")?;
        let id = new_id("tab");
        self.tabs.push(Tab {
            id: id.clone(),
            name,
            shortcuts: Vec::new(),
        });
        Ok(id)
    }

    /// Rename a tab. Returns `false` when the name is unchanged.
    pub fn rename_tab(&mut self, id: &str, name: &str) -> Result<bool> {
        let name = required_name(name, "Tab name")?;
        let tab = self.tab_mut(id)?;
        if tab.name == name {
            return Ok(false);
        }
        tab.name = name;
        Ok(true)
    }

    pub fn remove_tab(&mut self, id: &str) -> Result<Tab> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or_else(|| DockError::NotFound(format!("tab {}", id)))?;
        Ok(self.tabs.remove(index))
    }

    pub fn move_tab(&mut self, from: usize, to: usize) {
        move_in_list(&mut self.tabs, from, to);
    }

    /// Add a shortcut to a tab.
    ///
    /// The URL must be absolute and not already present in the tab.
    pub fn add_shortcut(&mut self, tab_id: &str, url: &str, title: &str) -> Result<()> {
        let url = url.trim();
        if parse_link(url).is_none() {
            return Err(DockError::InvalidInput(format!("Invalid URL: {}", url)));
        }
        let title = required_name(title, "Shortcut title")?;
        let tab = self.tab_mut(tab_id)?;
        if tab.shortcuts.iter().any(|s| s.url == url) {
            return Err(DockError::Duplicate(format!(
                "{} is already saved in tab \"{}\"",
                url, tab.name
            )));
        }
        tab.shortcuts.push(Shortcut {
            title,
            url: url.to_string(),
            favicon: non_empty(favicon_url(url, SHORTCUT_FAVICON_SIZE)),
        });
        Ok(())
    }

    pub fn remove_shortcut(&mut self, tab_id: &str, url: &str) -> Result<Shortcut> {
        let tab = self.tab_mut(tab_id)?;
        let index = tab
            .shortcuts
            .iter()
            .position(|s| s.url == url.trim())
            .ok_or_else(|| DockError::NotFound(format!("shortcut {}", url)))?;
        Ok(tab.shortcuts.remove(index))
    }

    pub fn move_shortcut(&mut self, tab_id: &str, from: usize, to: usize) -> Result<()> {
        let tab = self.tab_mut(tab_id)?;
        move_in_list(&mut tab.shortcuts, from, to);
        Ok(())
    }

    // --- Categories ---

    pub fn category(&self, id: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| DockError::NotFound(format!("category {}", id)))
    }

    fn category_mut(&mut self, id: &str) -> Result<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| DockError::NotFound(format!("category {}", id)))
    }

    /// Add a category and return its ID.
    pub fn add_category(&mut self, name: &str) -> Result<String> {
        let name = required_name(name, "Category name")?;
        let id = new_id("cat");
        self.categories.push(Category {
            id: id.clone(),
            name,
            items: Vec::new(),
        });
        Ok(id)
    }

    /// Rename a category. Returns `false` when the name is unchanged.
    pub fn rename_category(&mut self, id: &str, name: &str) -> Result<bool> {
        let name = required_name(name, "Category name")?;
        let category = self.category_mut(id)?;
        if category.name == name {
            return Ok(false);
        }
        category.name = name;
        Ok(true)
    }

    pub fn remove_category(&mut self, id: &str) -> Result<Category> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| DockError::NotFound(format!("category {}", id)))?;
        Ok(self.categories.remove(index))
    }

    pub fn move_category(&mut self, from: usize, to: usize) {
        move_in_list(&mut self.categories, from, to);
    }

    // --- Items ---

    pub fn item(&self, category_id: &str, item_id: &str) -> Result<&CategoryItem> {
        self.category(category_id)?
            .items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| DockError::NotFound(format!("item {}", item_id)))
    }

    pub fn item_mut(&mut self, category_id: &str, item_id: &str) -> Result<&mut CategoryItem> {
        self.category_mut(category_id)?
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| DockError::NotFound(format!("item {}", item_id)))
    }

    /// Add an item to a category and return its ID.
    ///
    /// Item names are unique within a category. A link that is not a valid
    /// URL is kept as an empty string.
    pub fn add_item(&mut self, category_id: &str, name: &str, link: &str) -> Result<String> {
        let name = required_name(name, "Item name")?;
        let link = normalize_link(link);
        let category = self.category_mut(category_id)?;
        if category.items.iter().any(|item| item.name == name) {
            return Err(DockError::Duplicate(format!(
                "\"{}\" is already saved in category \"{}\"",
                name, category.name
            )));
        }
        let id = new_id("item");
        category.items.push(CategoryItem {
            id: id.clone(),
            name,
            icon: non_empty(favicon_url(&link, ITEM_ICON_SIZE)),
            link,
            info_details: None,
        });
        Ok(id)
    }

    /// Update an item's name and link. The note is left untouched.
    pub fn edit_item(
        &mut self,
        category_id: &str,
        item_id: &str,
        name: &str,
        link: &str,
    ) -> Result<()> {
        let name = required_name(name, "Item name")?;
        let link = normalize_link(link);
        let category = self.category_mut(category_id)?;
        if category
            .items
            .iter()
            .any(|item| item.name == name && item.id != item_id)
        {
            return Err(DockError::Duplicate(format!(
                "\"{}\" is already saved in category \"{}\" for another item",
                name, category.name
            )));
        }
        let item = category
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| DockError::NotFound(format!("item {}", item_id)))?;
        item.name = name;
        item.icon = non_empty(favicon_url(&link, ITEM_ICON_SIZE));
        item.link = link;
        Ok(())
    }

    pub fn remove_item(&mut self, category_id: &str, item_id: &str) -> Result<CategoryItem> {
        let category = self.category_mut(category_id)?;
        let index = category
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| DockError::NotFound(format!("item {}", item_id)))?;
        Ok(category.items.remove(index))
    }

    pub fn move_item(&mut self, category_id: &str, from: usize, to: usize) -> Result<()> {
        let category = self.category_mut(category_id)?;
        move_in_list(&mut category.items, from, to);
        Ok(())
    }

    /// Replace an item's note. `None` clears it.
    pub fn set_note(
        &mut self,
        category_id: &str,
        item_id: &str,
        note: Option<NoteBody>,
    ) -> Result<()> {
        self.item_mut(category_id, item_id)?.info_details = note;
        Ok(())
    }

    /// Count of item notes that are encrypted.
    pub fn encrypted_note_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .filter(|item| {
                item.info_details
                    .as_ref()
                    .is_some_and(NoteBody::is_encrypted)
            })
            .count()
    }
}
