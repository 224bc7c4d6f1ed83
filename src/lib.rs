//! Workspace-level integration tests for calckit. See `tests/`.
