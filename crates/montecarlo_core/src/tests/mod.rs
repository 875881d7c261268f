//! Scenario tests for the simulation pipeline
//!
//! Tests are organized by topic:
//! - `criteria` - Scoring fixed walks against the decision criterion
//! - `pipeline` - Seeded end-to-end runs from configuration to statistics
