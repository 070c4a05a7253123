//! Generated report review page.
//!
//! Shows the generated narrative and the record JSON. The JSON is editable;
//! it only reaches storage through validation or "Next", both of which refuse
//! anything that is not a JSON object.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::pages::confirm_logout;
use crate::state::response::ResponseState;
use crate::util::browser::{DOWNLOAD_FILENAME, alert, copy_text, download_json, print, toast};
use crate::util::storage::client_store;

#[component]
pub fn ResponsePage() -> impl IntoView {
    let state = RwSignal::new(ResponseState::default());
    let navigate = use_navigate();

    Effect::new(move || {
        state.set(ResponseState::load(&client_store()));
    });

    let on_copy_report = move |_| {
        copy_text(&state.with_untracked(|s| s.report_text.clone()));
        toast("Report text copied");
    };

    let on_copy_json = move |_| {
        copy_text(&state.with_untracked(|s| s.json_text.clone()));
        toast("JSON copied");
    };

    let on_download = move |_| {
        download_json(DOWNLOAD_FILENAME, &state.with_untracked(ResponseState::download_payload));
        toast("JSON downloaded");
    };

    let on_validate = move |_| match state.try_update(|s| s.validate(&client_store())) {
        Some(Ok(())) => toast("JSON is valid"),
        Some(Err(e)) => {
            #[cfg(feature = "hydrate")]
            log::warn!("generatedReport validation failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            toast("JSON validation failed, check the format");
        }
        None => {}
    };

    let navigate_next = navigate.clone();
    let on_next = move |_| match state.with_untracked(|s| s.proceed(&client_store())) {
        Ok(()) => navigate_next(AppRoute::Home.path(), NavigateOptions::default()),
        Err(_) => alert("❌ Could not save the data. Check that the JSON is a valid object."),
    };

    let navigate_back = navigate.clone();
    let on_back = move |_| navigate_back(AppRoute::Home.path(), NavigateOptions::default());

    let navigate_logout = navigate.clone();
    let on_logout = move |_| confirm_logout(&navigate_logout);

    view! {
        <div class="response-page">
            <header class="page-header">
                <h1>"Generated Report"</h1>
                <div class="page-header__actions">
                    <button class="btn" on:click=move |_| print()>"Print"</button>
                    <button class="btn btn--ghost" on:click=on_logout>"Log out"</button>
                </div>
            </header>

            <section class="panel">
                <div class="panel__head">
                    <h2>"Report text"</h2>
                    <span class="badge">{move || state.with(|s| s.preview_badge.label())}</span>
                </div>
                <pre class="result-text">{move || state.with(|s| s.report_text.clone())}</pre>
                <div class="panel__actions">
                    <button class="btn" on:click=on_copy_report>"Copy"</button>
                </div>
            </section>

            <section class="panel">
                <div class="panel__head">
                    <h2>"Record JSON"</h2>
                    <span class="json-status">{move || state.with(|s| s.json_status.label())}</span>
                </div>
                <textarea
                    class="json-editor"
                    spellcheck="false"
                    prop:value=move || state.with(|s| s.json_text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.json_text = value);
                    }
                ></textarea>
                <div class="panel__actions">
                    <button class="btn" on:click=on_copy_json>"Copy JSON"</button>
                    <button class="btn" on:click=on_download>"Download"</button>
                    <button class="btn" on:click=on_validate>"Validate"</button>
                </div>
            </section>

            <footer class="page-footer">
                <button class="btn" on:click=on_back>"← Back"</button>
                <button class="btn btn--primary" on:click=on_next>"Next →"</button>
            </footer>
        </div>
    }
}
