//! Integration tests for chatmd.

mod helpers;

mod cli_test;
mod live_test;
mod pipeline_test;
