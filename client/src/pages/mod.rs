//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a thin controller: it owns one state signal from `state`,
//! wires DOM events to state transitions, and delegates network calls to
//! `net::api` and storage to the typed client store.

pub mod benign;
pub mod find;
pub mod home;
pub mod report;
pub mod response;

use leptos_router::NavigateOptions;

use crate::app::AppRoute;
use crate::util::browser;
use crate::util::storage::client_store;

/// Ask, then drop the sign-in marker and return to the root route.
pub(crate) fn confirm_logout<F>(navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if browser::confirm("Log out?") {
        client_store().clear_doctor_auth();
        navigate(AppRoute::Root.path(), NavigateOptions::default());
    }
}
