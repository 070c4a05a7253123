//! Report search page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::components::report_table::ReportTable;
use crate::state::find::FindState;

#[component]
pub fn FindPage() -> impl IntoView {
    let state = RwSignal::new(FindState::default());
    let navigate = use_navigate();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }
        let Some(query) = state.try_update(FindState::prepare).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::query_reports(&query).await;
            match &result {
                Err(e) => log::error!("report query failed: {e}"),
                Ok(records::QueryRows::Malformed(reason)) => log::error!("report query returned {reason}"),
                Ok(_) => {}
            }
            state.update(|s| s.apply(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
        }
    };

    let on_reset = move |_| state.update(FindState::reset);
    let on_home = move |_| navigate(AppRoute::Home.path(), NavigateOptions::default());

    let rows = Signal::derive(move || state.with(|s| s.rows.clone()));

    view! {
        <div class="find-page">
            <header class="page-header">
                <h1>"Find Reports"</h1>
                <button class="btn btn--ghost" on:click=on_home>"← Staging form"</button>
            </header>

            <form class="find-form" on:submit=on_search>
                <label>
                    "Patient ID"
                    <input
                        type="text"
                        prop:value=move || state.with(|s| s.query.patient_id.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.query.patient_id = value);
                        }
                    />
                </label>
                <label>
                    "Patient name"
                    <input
                        type="text"
                        prop:value=move || state.with(|s| s.query.patient_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.query.patient_name = value);
                        }
                    />
                </label>
                <label>
                    "From"
                    <input
                        type="date"
                        prop:value=move || state.with(|s| s.query.date_from.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.query.date_from = value);
                        }
                    />
                </label>
                <label>
                    "To"
                    <input
                        type="date"
                        prop:value=move || state.with(|s| s.query.date_to.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.query.date_to = value);
                        }
                    />
                </label>
                <div class="find-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.loading)>
                        "Search"
                    </button>
                    <button class="btn" type="button" on:click=on_reset>"Reset"</button>
                </div>
            </form>

            <Show when=move || state.with(|s| !s.message.is_empty())>
                <p class="find-message">{move || state.with(|s| s.message.clone())}</p>
            </Show>
            <ReportTable rows=rows/>
        </div>
    }
}
