//! BDD step definitions for the status notifier

pub mod notification_steps;
