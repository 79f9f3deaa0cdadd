//! Fixed-rate amortization: level-payment formula and full schedules.

pub mod payment;
pub mod schedule;
