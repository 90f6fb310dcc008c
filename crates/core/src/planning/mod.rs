pub mod debt_paydown;
pub mod enough;
pub mod life_expectancy;
mod planning_service;
mod planning_traits;

pub use debt_paydown::{months_to_payoff, DebtRow, DebtRowInput, Payoff};
pub use enough::{compute_outcome, EnoughEstimate, EnoughInput, EnoughOutcome};
pub use life_expectancy::{
    expected_lifespan, Gender, LifeExpectancyEstimate, LifeExpectancyInput, Percentile,
};
pub use planning_service::{PlanningService, PlanningServiceTrait};
pub use planning_traits::PlanningRepositoryTrait;
