//! Form schemas, payload transforms and per-form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `schema` holds the shared rule vocabulary, `register` and `login` declare
//! each form's rules and wire payload, and `state` tracks a mounted form's
//! values and submit phase. Nothing here touches the browser.

pub mod login;
pub mod register;
pub mod schema;
pub mod state;
