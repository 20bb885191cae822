//! Unit tests for the view projections.
