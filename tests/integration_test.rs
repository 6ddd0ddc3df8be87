//! Entry point for the `tests/integration/` suite — each module below is a
//! plain file under `tests/integration/`, wired in here since Cargo only
//! auto-discovers files directly under `tests/`.

#[path = "integration/commands_test.rs"]
mod commands_test;

#[path = "integration/core_test.rs"]
mod core_test;

#[path = "integration/types_test.rs"]
mod types_test;

#[path = "integration/healer_test.rs"]
mod healer_test;
