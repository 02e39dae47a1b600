//! Test-only crate. The end-to-end session tests live under `tests/`.
