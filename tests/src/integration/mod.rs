//! Integration tests, grouped by flow.

mod corruption;
mod e2e_pipeline;
mod join_flow;
