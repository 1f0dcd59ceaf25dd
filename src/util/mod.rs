//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only calls are isolated here so pages and flow code stay testable
//! without a DOM.

pub mod browser;
