//! JSON output formatting.

use serde::Serialize;

use dock_core::dashboard::CategoryItem;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Convert a revealed note to JSON for output.
pub fn note_json(category_id: &str, item: &CategoryItem, text: &str) -> serde_json::Value {
    let encrypted = item
        .info_details
        .as_ref()
        .is_some_and(|note| note.is_encrypted());
    serde_json::json!({
        "category_id": category_id,
        "item_id": item.id,
        "item_name": item.name,
        "encrypted": encrypted,
        "bytes": text.len(),
        "text": text,
    })
}
