//! Financial record domain models.
//!
//! Each calculator page (assets, liabilities, income, expenses,
//! subscriptions, epic experiences) edits its own row type with its own
//! display columns. Before any arithmetic happens every row is reduced to a
//! [`FinancialRecord`], the one shape the aggregation engine understands.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::summary::{annual_factor, Frequency};

/// Which calculator page a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordCategory {
    Asset,
    Liability,
    Income,
    Expense,
    Subscription,
    Epic,
}

impl RecordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::Asset => "ASSET",
            RecordCategory::Liability => "LIABILITY",
            RecordCategory::Income => "INCOME",
            RecordCategory::Expense => "EXPENSE",
            RecordCategory::Subscription => "SUBSCRIPTION",
            RecordCategory::Epic => "EPIC",
        }
    }
}

/// The unified record every page row reduces to before aggregation.
///
/// `amount` is the per-occurrence value; the engine multiplies it by the
/// frequency's annual factor. Balance-style rows (assets, liabilities) carry
/// `Frequency::Annually` so their amounts pass through unchanged. Rows with
/// `include == false` stay visible on their page but contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub category: RecordCategory,
    pub label: String,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub include: bool,
}

fn default_include() -> bool {
    true
}

// ==================== Assets ====================

/// A thing the user owns, with an estimated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub owner: String,
    pub include: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRowInput {
    #[serde(default)]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub owner: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

impl AssetRow {
    pub fn from_input(user_id: &str, input: AssetRowInput) -> Self {
        let now = Utc::now();
        AssetRow {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category: input.category.trim().to_string(),
            description: input.description.trim().to_string(),
            amount: input.amount,
            owner: input.owner.trim().to_string(),
            include: input.include,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_record(&self) -> FinancialRecord {
        FinancialRecord {
            category: RecordCategory::Asset,
            label: self.category.clone(),
            amount: self.amount,
            frequency: Frequency::Annually,
            include: self.include,
        }
    }
}

// ==================== Liabilities ====================

/// A debt balance, with an optional regular repayment for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub kind: String,
    pub monthly_payment: Decimal,
    pub notes: String,
    pub include: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityRowInput {
    pub name: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub monthly_payment: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

impl LiabilityRow {
    pub fn from_input(user_id: &str, input: LiabilityRowInput) -> Self {
        let now = Utc::now();
        LiabilityRow {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: input.name.trim().to_string(),
            amount: input.amount,
            kind: input.kind.trim().to_string(),
            monthly_payment: input.monthly_payment,
            notes: input.notes.trim().to_string(),
            include: input.include,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_record(&self) -> FinancialRecord {
        FinancialRecord {
            category: RecordCategory::Liability,
            label: if self.kind.is_empty() {
                self.name.clone()
            } else {
                self.kind.clone()
            },
            amount: self.amount,
            frequency: Frequency::Annually,
            include: self.include,
        }
    }
}

// ==================== Income ====================

/// A recurring income source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRow {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub amount: Decimal,
    pub frequency: String,
    pub notes: String,
    pub include: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRowInput {
    pub source: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

impl IncomeRow {
    pub fn from_input(user_id: &str, input: IncomeRowInput) -> Self {
        let now = Utc::now();
        IncomeRow {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            source: input.source.trim().to_string(),
            amount: input.amount,
            frequency: input.frequency.trim().to_string(),
            notes: input.notes.trim().to_string(),
            include: input.include,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_record(&self) -> FinancialRecord {
        FinancialRecord {
            category: RecordCategory::Income,
            label: self.source.clone(),
            amount: self.amount,
            frequency: Frequency::from_label(&self.frequency),
            include: self.include,
        }
    }
}

// ==================== Expenses ====================

/// A recurring living expense, bucketed by category and tagged
/// Essential or Discretionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRow {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub item: String,
    pub amount: Decimal,
    pub frequency: String,
    pub kind: String,
    pub include: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRowInput {
    #[serde(default)]
    pub category: String,
    pub item: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

impl ExpenseRow {
    pub fn from_input(user_id: &str, input: ExpenseRowInput) -> Self {
        let now = Utc::now();
        ExpenseRow {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category: input.category.trim().to_string(),
            item: input.item.trim().to_string(),
            amount: input.amount,
            frequency: input.frequency.trim().to_string(),
            kind: input.kind.trim().to_string(),
            include: input.include,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_record(&self) -> FinancialRecord {
        FinancialRecord {
            category: RecordCategory::Expense,
            label: if self.category.is_empty() {
                self.item.clone()
            } else {
                self.category.clone()
            },
            amount: self.amount,
            frequency: Frequency::from_label(&self.frequency),
            include: self.include,
        }
    }
}

// ==================== Subscriptions ====================

/// A recurring subscription or service bill.
///
/// `annual_amount` is derived on read by the service; it is never taken
/// from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub provider: String,
    pub amount: Decimal,
    pub frequency: String,
    pub notes: String,
    pub include: bool,
    #[serde(default)]
    pub annual_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRowInput {
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

impl SubscriptionRow {
    pub fn from_input(user_id: &str, input: SubscriptionRowInput) -> Self {
        let now = Utc::now();
        SubscriptionRow {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: input.name.trim().to_string(),
            provider: input.provider.trim().to_string(),
            amount: input.amount,
            frequency: input.frequency.trim().to_string(),
            notes: input.notes.trim().to_string(),
            include: input.include,
            annual_amount: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Annualized cost of this subscription, ignoring the include flag.
    pub fn annualized(&self) -> Decimal {
        self.amount * Decimal::from(annual_factor(&self.frequency))
    }

    pub fn to_record(&self) -> FinancialRecord {
        FinancialRecord {
            category: RecordCategory::Subscription,
            label: self.name.clone(),
            amount: self.amount,
            frequency: Frequency::from_label(&self.frequency),
            include: self.include,
        }
    }
}

// ==================== Epic experiences ====================

/// A bucket-list experience, either one-off or recurring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicRow {
    pub id: String,
    pub user_id: String,
    pub item: String,
    pub amount: Decimal,
    pub frequency: String,
    pub include: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicRowInput {
    pub item: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

impl EpicRow {
    pub fn from_input(user_id: &str, input: EpicRowInput) -> Self {
        let now = Utc::now();
        EpicRow {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            item: input.item.trim().to_string(),
            amount: input.amount,
            frequency: input.frequency.trim().to_string(),
            include: input.include,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_record(&self) -> FinancialRecord {
        FinancialRecord {
            category: RecordCategory::Epic,
            label: self.item.clone(),
            amount: self.amount,
            frequency: Frequency::from_label(&self.frequency),
            include: self.include,
        }
    }
}
