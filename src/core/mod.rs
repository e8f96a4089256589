//! Aggregation services shared by every report and export path.

pub mod services;
