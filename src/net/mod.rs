//! Networking for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the `AuthApi` seam and its HTTP implementation. Payload shapes
//! live next to their schemas in `forms`.

pub mod api;
