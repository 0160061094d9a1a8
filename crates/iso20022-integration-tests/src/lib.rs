//! Cross-crate integration tests live under `tests/`; this library target
//! is intentionally empty.
