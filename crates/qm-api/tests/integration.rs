// Single integration test binary, so the shared helpers compile once
mod common;

mod distance_tests;
mod phonetic_tests;
