//! External service integrations

pub mod blackboard;
