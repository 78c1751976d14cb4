//! Cross-module vCard tests.
