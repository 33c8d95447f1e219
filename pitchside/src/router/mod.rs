pub mod conditions;
pub mod health;
pub mod impact;
pub mod matches;
