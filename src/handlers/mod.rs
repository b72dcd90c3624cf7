//! Request handlers

pub mod dashboard;
pub mod health;
pub mod predict;
pub mod widgets;
