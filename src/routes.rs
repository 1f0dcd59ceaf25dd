//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` builds its `<Routes>` from these segments and the submit flow
//! navigates by [`AppRoute::path`], so the two never drift apart.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every view the router can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// `/`: account creation form.
    Register,
    /// `/login`: sign-in form.
    Login,
    /// `/dashboard`: landing view after sign-in.
    Dashboard,
}

impl AppRoute {
    /// The full route table, in declaration order.
    pub const ALL: [Self; 3] = [Self::Register, Self::Login, Self::Dashboard];

    /// Absolute path used for navigation.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Path segment handed to `leptos_router::StaticSegment`.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Register => "",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
