use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed entries the deck is populated with, in display order.
    #[serde(default = "default_items")]
    pub items: Vec<SeedItem>,
}

/// One seed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    /// Stable id as a UUID string. Generated at load time when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name. Any text is accepted, including empty.
    pub name: String,
}

impl SeedItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<SeedItem> {
    ["item 1", "item 2", "item 3"]
        .iter()
        .map(|name| SeedItem::named(*name))
        .collect()
}
