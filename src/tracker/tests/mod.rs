//! Unit tests for the tracker context.
