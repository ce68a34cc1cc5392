// Application layer: callers of the core that build sample data and render results.

pub mod report;
pub mod sample;
