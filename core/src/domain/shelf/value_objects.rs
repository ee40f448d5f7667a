use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::Notice, shelf::entities::ShelfItem};

/// Limits used when flagging shelf items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfThresholds {
    /// Items with a quantity strictly below this are flagged as low.
    pub low_quantity: u32,
    /// Items expiring within this many days of today are flagged as expiring soon.
    pub expiring_soon_days: u32,
    /// Expiry assigned to items that have none.
    pub default_expiry_days: u32,
}

impl Default for ShelfThresholds {
    fn default() -> Self {
        Self {
            low_quantity: 2,
            expiring_soon_days: 2,
            default_expiry_days: 7,
        }
    }
}

impl ShelfThresholds {
    pub fn default_expiry(&self, today: NaiveDate) -> NaiveDate {
        add_days(today, self.default_expiry_days)
    }

    pub fn expiring_soon_limit(&self, today: NaiveDate) -> NaiveDate {
        add_days(today, self.expiring_soon_days)
    }
}

fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShelfFlag {
    LowQuantity,
    Expired,
    ExpiringSoon,
}

#[derive(Debug, Clone)]
pub struct AddShelfItemInput {
    pub ingredient: String,
    pub quantity: u32,
    pub expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShelfEntry {
    #[serde(flatten)]
    pub item: ShelfItem,
    pub flags: Vec<ShelfFlag>,
    pub shopping_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShelfView {
    pub entries: Vec<ShelfEntry>,
    pub notices: Vec<Notice>,
}
