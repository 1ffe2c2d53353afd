//! Structured logging utilities for mock generation.
//!
//! This module provides helper functions for consistent, structured
//! logging across the crate using the `tracing` crate.

use std::fmt;

/// Log a composed definition, rendered as pseudo-source.
pub fn log_definition_composed<D: fmt::Display>(definition: D) {
    tracing::trace!("Composed definition:\n{}", definition);
}

/// Log a host type declaration.
pub fn log_host_type_declared(name: &str, parent: Option<&str>) {
    tracing::debug!(name, parent, "Host type declared");
}

/// Log a generated mock type definition.
pub fn log_type_defined(name: &str, parent: Option<&str>, intercepts_calls: bool) {
    tracing::debug!(name, parent, intercepts_calls, "Mock type defined");
}

/// Log a rejected definition.
pub fn log_definition_rejected(name: &str, reason: &str) {
    tracing::warn!(name, reason, "Mock type definition rejected");
}

/// Log a stub registration.
pub fn log_stub_registered(type_name: &str, method: &str, replaced: bool) {
    tracing::trace!(type_name, method, replaced, "Stub registered");
}

/// Log a dynamic call that no stub answered.
pub fn log_unmocked_call(type_name: &str, method: &str) {
    tracing::warn!(type_name, method, "No mock found for method call");
}

/// Log short name resolution.
pub fn log_short_name_resolved(kind: &str, short_name: &str, class_name: &str) {
    tracing::debug!(kind, short_name, class_name, "Short name resolved");
}

/// Log configuration loading.
pub fn log_loading_config(path: &str) {
    tracing::info!(config = path, "Loading configuration");
}

/// Log application bootstrap.
pub fn log_app_bootstrap(store: &str, run_type: &str) {
    tracing::info!(store, run_type, "Application bootstrapped");
}

pub fn log_app_reused(store: &str, run_type: &str) {
    tracing::debug!(store, run_type, "Reusing bootstrapped application");
}
