pub mod amortization;
pub mod payoff;
pub mod refinance;
pub mod tiers;
