use serde::{Deserialize, Serialize};

/// Pastel background palette for sticky notes
pub const NOTE_COLORS: [&str; 10] = [
    "#FFE4E1", // Misty Rose
    "#F0FFF0", // Honeydew
    "#F0F8FF", // Alice Blue
    "#FFF0F5", // Lavender Blush
    "#F5F5DC", // Beige
    "#F0FFFF", // Azure
    "#FFF8DC", // Cornsilk
    "#F5F5F5", // White Smoke
    "#FFFAF0", // Floral White
    "#F8F8FF", // Ghost White
];

/// Marker prefixed onto a checked-off note item
pub const CHECKED_PREFIX: &str = "✓ ";

/// A sticky note: a titled list of free-text items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique id, epoch milliseconds at creation (bumped on collision)
    pub id: u64,
    pub title: String,
    /// Item lines; a checked item carries the `✓ ` prefix
    #[serde(rename = "tasks")]
    pub items: Vec<String>,
    /// Background color, one of [`NOTE_COLORS`]
    pub color: String,
    /// RFC 3339 creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Note {
    /// Create a note with an id-derived palette color
    pub fn new(id: u64, title: String, items: Vec<String>, created_at: String) -> Self {
        let color = NOTE_COLORS[(id % NOTE_COLORS.len() as u64) as usize].to_string();
        Note {
            id,
            title,
            items,
            color,
            created_at,
        }
    }

    /// Flip the checked marker on one item. Out-of-range index is a no-op.
    pub fn toggle_item(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            if let Some(rest) = item.strip_prefix(CHECKED_PREFIX) {
                *item = rest.to_string();
            } else {
                *item = format!("{CHECKED_PREFIX}{item}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(items: &[&str]) -> Note {
        Note::new(
            3,
            "Groceries".to_string(),
            items.iter().map(|s| s.to_string()).collect(),
            "2024-06-10T09:00:00Z".to_string(),
        )
    }

    #[test]
    fn color_comes_from_palette() {
        let n = note(&["milk"]);
        assert_eq!(n.color, NOTE_COLORS[3]);
    }

    #[test]
    fn toggle_item_marks_and_unmarks() {
        let mut n = note(&["milk", "eggs"]);
        n.toggle_item(1);
        assert_eq!(n.items[1], "✓ eggs");
        n.toggle_item(1);
        assert_eq!(n.items[1], "eggs");
    }

    #[test]
    fn toggle_item_out_of_range_is_noop() {
        let mut n = note(&["milk"]);
        n.toggle_item(5);
        assert_eq!(n.items, vec!["milk"]);
    }

    #[test]
    fn wire_field_names_match_stored_format() {
        let n = note(&["milk"]);
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains("\"tasks\""));
        assert!(json.contains("\"createdAt\""));
    }
}
