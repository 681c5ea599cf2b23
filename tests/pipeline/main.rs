//! End-to-end fixture pipeline tests.
//!
//! Each test generates a dataset (fixed seed where content matters), pushes
//! it through the encoders or the export path, and checks that the
//! structural invariants survive the trip.

mod compare_pipeline;
mod export_pipeline;
