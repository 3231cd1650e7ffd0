use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// ABC band of an item by cumulative revenue contribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcCategory {
    A,
    B,
    C,
}

impl AbcCategory {
    pub const ALL: [AbcCategory; 3] = [AbcCategory::A, AbcCategory::B, AbcCategory::C];
}

impl fmt::Display for AbcCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbcCategory::A => write!(f, "A"),
            AbcCategory::B => write!(f, "B"),
            AbcCategory::C => write!(f, "C"),
        }
    }
}

/// One normalized row of the inventory export.
///
/// Numeric fields are always numbers: anything the export leaves blank or
/// unparsable is 0. `abc_category` stays `None` until the whole dataset has
/// been classified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub code: String,
    pub material: String,
    /// Negative values signal backorders or oversold stock.
    pub available_qty: f64,
    pub physical_qty: f64,
    pub unit: String,
    pub unit_sale_price: f64,
    pub total_sale_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_days: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abc_category: Option<AbcCategory>,
}

impl Default for InventoryRecord {
    fn default() -> Self {
        Self {
            code: String::new(),
            material: String::new(),
            available_qty: 0.0,
            physical_qty: 0.0,
            unit: crate::thresholds::DEFAULT_UNIT.to_string(),
            unit_sale_price: 0.0,
            total_sale_value: 0.0,
            coverage_days: None,
            abc_category: None,
        }
    }
}

impl InventoryRecord {
    /// Unit label as used for grouping.
    pub fn unit_key(&self) -> String {
        self.unit.to_uppercase()
    }
}

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Physical quantity summed over one unit of measure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnitTotal {
    pub unit: String,
    pub quantity: f64,
}

/// Revenue and physical quantity summed over one product category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: &'static str,
    pub revenue: f64,
    pub quantity: f64,
}

/// Count and revenue of one ABC band inside a record subset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AbcBand {
    pub category: AbcCategory,
    pub count: usize,
    pub revenue: f64,
}

/// Everything the view needs about a record subset.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub total_revenue: f64,
    pub unit_totals: Vec<UnitTotal>,
    pub category_totals: Vec<CategoryTotal>,
}
