//! Observation entry page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point of the intake flow. The observation goes to the generation
//! webhook; a returned record is stored for the review and form pages and
//! the classification picks where the user lands next.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::pages::confirm_logout;
use crate::state::report::{ObservationBadge, ReportState, ResultBadge};
use crate::util::browser::{confirm, copy_text, toast};
use crate::util::storage::client_store;

#[component]
pub fn ReportPage() -> impl IntoView {
    let state = RwSignal::new(ReportState::default());
    let navigate = use_navigate();

    Effect::new(move || {
        state.update(|s| s.restore(&client_store()));
    });

    // Another tab may save a report while this one is open.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            let key = ev.key();
            let value = ev.new_value();
            state.update(|s| {
                s.apply_storage_event(key.as_deref(), value.as_deref());
            });
        });
        on_cleanup(move || handle.remove());
    }

    let navigate_after = navigate.clone();
    let submit = move || {
        let store = client_store();
        let request = match state.try_update(|s| s.begin(&store)) {
            Some(Ok(request)) => request,
            Some(Err(rejection)) => {
                #[cfg(feature = "hydrate")]
                if rejection == crate::state::report::GenerateRejection::StorageUnavailable {
                    log::warn!("lastObservation write failed; generation not sent");
                }
                toast(rejection.message());
                return;
            }
            None => return,
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after.clone();
            leptos::task::spawn_local(async move {
                let reply = crate::net::api::generate_report(&request).await;
                if let Err(e) = &reply {
                    log::error!("generation request failed: {e}");
                }
                let finish = state.try_update(|s| s.finish(&client_store(), reply));
                match finish {
                    Some(crate::state::report::GenerateFinish::Navigate(route)) => {
                        toast("Generation complete ✅");
                        gloo_timers::future::TimeoutFuture::new(crate::config::nav_delay_ms()).await;
                        navigate(route.path(), NavigateOptions::default());
                    }
                    Some(crate::state::report::GenerateFinish::Stay) => toast("Generation complete ✅"),
                    Some(crate::state::report::GenerateFinish::Failed(e)) => {
                        crate::util::browser::alert(&format!("Failed to send the observation: {e}"));
                    }
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate_after);
        }
    };

    let submit_click = submit.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let on_clear = move |_| {
        if state.with_untracked(|s| s.observation.is_empty()) {
            toast("Nothing to clear");
            return;
        }
        if confirm("Clear the observation?") {
            state.update(|s| s.clear_input(&client_store()));
            toast("Cleared");
        }
    };

    let on_copy_observation = move |_| {
        copy_text(&state.with_untracked(|s| s.observation.clone()));
        state.update(|s| s.observation_badge = ObservationBadge::Copied);
        toast("Observation copied");
    };

    let on_copy_result = move |_| {
        copy_text(&state.with_untracked(|s| s.result.clone()));
        state.update(|s| s.result_badge = ResultBadge::Copied);
        toast("Result copied");
    };

    let on_save = move |_| match state.try_update(|s| s.save_result(&client_store())) {
        Some(Ok(())) => toast("Saved locally (reportText)"),
        Some(Err(e)) => toast(&e),
        None => {}
    };

    let navigate_response = navigate.clone();
    let on_go_response = move |_| {
        if let Err(e) = state.with_untracked(|s| s.persist_before_leaving(&client_store())) {
            #[cfg(feature = "hydrate")]
            log::warn!("could not store reportText before leaving: {e}");
            toast(&e);
        }
        navigate_response(AppRoute::Response.path(), NavigateOptions::default());
    };

    let navigate_logout = navigate.clone();
    let on_logout = move |_| confirm_logout(&navigate_logout);

    view! {
        <div class="report-page">
            <header class="page-header">
                <h1>"Observation Report"</h1>
                <button class="btn btn--ghost" on:click=on_logout>"Log out"</button>
            </header>

            <section class="panel">
                <div class="panel__head">
                    <h2>"Observation"</h2>
                    <span class="badge">{move || state.with(|s| s.observation_badge.label())}</span>
                    <span class="panel__count">{move || state.with(ReportState::char_count)} " chars"</span>
                </div>
                <textarea
                    class="observation-input"
                    placeholder="Describe the imaging findings… (Ctrl/Cmd+Enter to generate)"
                    prop:value=move || state.with(|s| s.observation.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_observation(value));
                    }
                    on:keydown=on_keydown
                ></textarea>
                <div class="panel__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || state.with(|s| s.in_flight)
                        on:click=move |_| submit_click()
                    >
                        {move || if state.with(|s| s.in_flight) { "Generating…" } else { "Generate report" }}
                    </button>
                    <button class="btn" on:click=on_clear>"Clear"</button>
                    <button class="btn" on:click=on_copy_observation>"Copy"</button>
                </div>
            </section>

            <section class="panel">
                <div class="panel__head">
                    <h2>"Result"</h2>
                    <span class="badge">{move || state.with(|s| s.result_badge.label())}</span>
                </div>
                <pre class="result-text">{move || state.with(|s| s.result.clone())}</pre>
                <div class="panel__actions">
                    <button class="btn" on:click=on_copy_result>"Copy"</button>
                    <button class="btn" on:click=on_save>"Save"</button>
                    <button class="btn btn--primary" on:click=on_go_response>"Review response →"</button>
                </div>
            </section>
        </div>
    }
}
