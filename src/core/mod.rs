pub mod planner;

pub use planner::{Plan, PlanSource, Planner};
