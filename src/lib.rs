//! Workspace-level integration tests for BodyComp-rs live in `tests/`.
