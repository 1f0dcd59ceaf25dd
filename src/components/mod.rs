//! Reusable form building blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own form state and pass plain signals and callbacks down; components
//! never read context themselves.

pub mod field;
