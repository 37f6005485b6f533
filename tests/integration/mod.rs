//! Integration tests over real HTTP

mod config_tests;
mod health_tests;
mod resilience_tests;
