//! Text and table output formatting.

use comfy_table::presets::NOTHING;
use comfy_table::{ContentArrangement, Table};

use dock_core::dashboard::{Category, CategoryItem, Tab};
use dock_core::note::size_label;

/// Render a borderless table. Quiet mode drops the header and padding.
fn simple_table(headers: &[&str], rows: &[Vec<String>], quiet: bool) -> String {
    if quiet {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.to_vec());
    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Short note state for listings. Never includes note content.
pub fn note_status(item: &CategoryItem) -> &'static str {
    match &item.info_details {
        None => "-",
        Some(note) if note.is_encrypted() => "encrypted",
        Some(_) => "plain",
    }
}

/// Print each tab followed by its shortcuts.
pub fn print_tab_list(tabs: &[Tab], quiet: bool) {
    if tabs.is_empty() {
        if !quiet {
            println!("No tabs yet. Add one with `dock tab add <NAME>`.");
        }
        return;
    }
    for (position, tab) in tabs.iter().enumerate() {
        if !quiet {
            println!("[{}] {}  ({})", position, tab.name, tab.id);
        }
        let rows: Vec<Vec<String>> = tab
            .shortcuts
            .iter()
            .enumerate()
            .map(|(i, shortcut)| vec![i.to_string(), shortcut.title.clone(), shortcut.url.clone()])
            .collect();
        if !rows.is_empty() {
            println!("{}", simple_table(&["POS", "TITLE", "URL"], &rows, quiet));
        }
    }
}

/// Print each category followed by its items.
pub fn print_category_list(categories: &[Category], quiet: bool) {
    if categories.is_empty() {
        if !quiet {
            println!("No categories yet. Add one with `dock category add <NAME>`.");
        }
        return;
    }
    for (position, category) in categories.iter().enumerate() {
        if !quiet {
            println!("[{}] {}  ({})", position, category.name, category.id);
        }
        let rows: Vec<Vec<String>> = category
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                vec![
                    i.to_string(),
                    item.id.clone(),
                    item.name.clone(),
                    item.link.clone(),
                    note_status(item).to_string(),
                ]
            })
            .collect();
        if !rows.is_empty() {
            println!(
                "{}",
                simple_table(&["POS", "ID", "NAME", "LINK", "NOTE"], &rows, quiet)
            );
        }
    }
}

/// Print a revealed note in human-readable format.
pub fn print_note(item: &CategoryItem, text: &str, quiet: bool) {
    if !quiet {
        println!("Item: {}", item.name);
        if !item.link.is_empty() {
            println!("Link: {}", item.link);
        }
        println!("Note: {}, {}", note_status(item), size_label(text));
        println!();
    }
    println!("{}", text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dock_core::NoteBody;

    fn item(note: Option<NoteBody>) -> CategoryItem {
        CategoryItem {
            id: "item-1".to_string(),
            name: "Bank".to_string(),
            link: String::new(),
            icon: None,
            info_details: note,
        }
    }

    #[test]
    fn test_note_status() {
        assert_eq!(note_status(&item(None)), "-");
        assert_eq!(note_status(&item(Some(NoteBody::plaintext("x")))), "plain");
    }

    #[test]
    fn test_quiet_table_is_space_separated() {
        let rows = vec![vec!["0".to_string(), "Docs".to_string()]];
        assert_eq!(simple_table(&["POS", "TITLE"], &rows, true), "0 Docs");
    }

    #[test]
    fn test_table_has_header() {
        let rows = vec![vec!["0".to_string(), "Docs".to_string()]];
        let rendered = simple_table(&["POS", "TITLE"], &rows, false);
        assert!(rendered.contains("TITLE"));
        assert!(rendered.contains("Docs"));
    }
}
