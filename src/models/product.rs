//! Product catalogue model.

use serde::{Serialize, Serializer};

/// Closed set of catalogue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Microcontrollers,
    SingleBoardComputers,
    Sensors,
    Displays,
    Accessories,
    StarterKits,
}

impl ProductCategory {
    /// All categories in display order.
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Microcontrollers,
        ProductCategory::SingleBoardComputers,
        ProductCategory::Sensors,
        ProductCategory::Displays,
        ProductCategory::Accessories,
        ProductCategory::StarterKits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Microcontrollers => "Microcontrollers & Dev Boards",
            ProductCategory::SingleBoardComputers => "Single-Board Computers",
            ProductCategory::Sensors => "Sensors & Modules",
            ProductCategory::Displays => "Displays & Screens",
            ProductCategory::Accessories => "Cables, Connectors & Accessories",
            ProductCategory::StarterKits => "Starter Kits & Bundles",
        }
    }

    /// URL-safe identifier used in query strings.
    pub fn slug(&self) -> &'static str {
        match self {
            ProductCategory::Microcontrollers => "microcontrollers",
            ProductCategory::SingleBoardComputers => "single-board-computers",
            ProductCategory::Sensors => "sensors",
            ProductCategory::Displays => "displays",
            ProductCategory::Accessories => "accessories",
            ProductCategory::StarterKits => "starter-kits",
        }
    }

    /// Resolve a category from either its slug or its display label.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s || c.as_str() == s)
    }
}

impl Serialize for ProductCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An item for sale. Prices are whole AUD cents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub image: String,
    pub category: ProductCategory,
    pub in_stock: bool,
    pub featured: bool,
}

impl Product {
    /// Price formatted for display, e.g. `$59.95`.
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}
