//! Root application component with routing.
//!
//! Routes are flat and unguarded. `/` and `/home` both render the staging
//! form.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    benign::BenignPage, find::FindPage, home::HomePage, report::ReportPage, response::ResponsePage,
};

/// Navigation targets used by page controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Home,
    Find,
    Report,
    Benign,
    Response,
}

impl AppRoute {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Home => "/home",
            Self::Find => "/find",
            Self::Report => "/report",
            Self::Benign => "/benign",
            Self::Response => "/response",
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/lungstage.css"/>
        <Title text="Lung Staging"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("find") view=FindPage/>
                <Route path=StaticSegment("report") view=ReportPage/>
                <Route path=StaticSegment("benign") view=BenignPage/>
                <Route path=StaticSegment("response") view=ResponsePage/>
            </Routes>
        </Router>
    }
}
