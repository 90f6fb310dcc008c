//! Income layers and spending allocation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One layer of retirement income (employment, super pension, Age Pension,
/// investment income and so on) active over an age range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeLayer {
    pub id: String,
    pub user_id: String,
    pub layer: String,
    pub description: String,
    pub start_age: Option<i32>,
    pub end_age: Option<i32>,
    pub annual_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeLayerInput {
    pub layer: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_age: Option<i32>,
    #[serde(default)]
    pub end_age: Option<i32>,
    #[serde(default)]
    pub annual_amount: Decimal,
}

impl IncomeLayer {
    pub fn from_input(user_id: &str, input: IncomeLayerInput) -> Self {
        let now = Utc::now();
        IncomeLayer {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            layer: input.layer.trim().to_string(),
            description: input.description.trim().to_string(),
            start_age: input.start_age,
            end_age: input.end_age,
            annual_amount: input.annual_amount,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Planned spending for one life phase, split across the five allocation
/// buckets.
///
/// `total` is derived on read by the service; it is never taken from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingAllocation {
    pub id: String,
    pub user_id: String,
    pub phase: String,
    pub cost_base: Decimal,
    pub cost_life: Decimal,
    pub cost_save: Decimal,
    pub cost_health: Decimal,
    pub cost_other: Decimal,
    #[serde(default)]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingAllocationInput {
    pub phase: String,
    #[serde(default)]
    pub cost_base: Decimal,
    #[serde(default)]
    pub cost_life: Decimal,
    #[serde(default)]
    pub cost_save: Decimal,
    #[serde(default)]
    pub cost_health: Decimal,
    #[serde(default)]
    pub cost_other: Decimal,
}

impl SpendingAllocation {
    pub fn from_input(user_id: &str, input: SpendingAllocationInput) -> Self {
        let now = Utc::now();
        SpendingAllocation {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            phase: input.phase.trim().to_string(),
            cost_base: input.cost_base,
            cost_life: input.cost_life,
            cost_save: input.cost_save,
            cost_health: input.cost_health,
            cost_other: input.cost_other,
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sum of the five allocation buckets for this phase.
    pub fn bucket_total(&self) -> Decimal {
        self.cost_base + self.cost_life + self.cost_save + self.cost_health + self.cost_other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_spending_allocation_total() {
        let allocation = SpendingAllocation::from_input(
            "u1",
            SpendingAllocationInput {
                phase: "Go-go".to_string(),
                cost_base: dec!(40000),
                cost_life: dec!(10000),
                cost_save: dec!(5000),
                cost_health: dec!(3000),
                cost_other: dec!(2000),
            },
        );
        assert_eq!(allocation.bucket_total(), dec!(60000));
    }

    #[test]
    fn test_income_layer_keeps_optional_ages() {
        let layer = IncomeLayer::from_input(
            "u1",
            IncomeLayerInput {
                layer: "Age Pension".to_string(),
                description: String::new(),
                start_age: Some(67),
                end_age: None,
                annual_amount: dec!(28000),
            },
        );
        assert_eq!(layer.start_age, Some(67));
        assert_eq!(layer.end_age, None);
    }
}
