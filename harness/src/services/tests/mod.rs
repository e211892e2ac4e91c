//! Comprehensive tests for harness services
//!
//! These tests exercise the real service implementations against actual
//! files and child processes rather than mocks.
