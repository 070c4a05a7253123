//! Staging form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Autofills from the stored record on load and saves a draft right after a
//! successful autofill. The final save validates first and blocks with a
//! dialog listing every missing field.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{CodeSelection, SaveMode, SizeKind, StagingForm};

use crate::app::AppRoute;
use crate::components::code_checklist::CodeChecklist;
use crate::state::home::{autofill, prepare_save};
use crate::util::browser::alert;
use crate::util::storage::client_store;

fn locations(f: &StagingForm) -> &CodeSelection {
    &f.locations
}
fn locations_mut(f: &mut StagingForm) -> &mut CodeSelection {
    &mut f.locations
}
fn t_codes(f: &StagingForm) -> &CodeSelection {
    &f.t
}
fn t_codes_mut(f: &mut StagingForm) -> &mut CodeSelection {
    &mut f.t
}
fn n_codes(f: &StagingForm) -> &CodeSelection {
    &f.n
}
fn n_codes_mut(f: &mut StagingForm) -> &mut CodeSelection {
    &mut f.n
}
fn m_codes(f: &StagingForm) -> &CodeSelection {
    &f.m
}
fn m_codes_mut(f: &mut StagingForm) -> &mut CodeSelection {
    &mut f.m
}

#[component]
pub fn HomePage() -> impl IntoView {
    let form = RwSignal::new(StagingForm::default());
    let save_status = RwSignal::new(String::new());
    let navigate = use_navigate();

    let persist = move |mode: SaveMode| {
        let store = client_store();
        let record = match form.with_untracked(|f| prepare_save(f, mode, &store)) {
            Ok(record) => record,
            Err(missing) => {
                alert(&missing.message());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_record(mode, &record).await {
                Ok(outcome) => {
                    log::info!("{} save of {}: {}", mode.as_str(), record.record_id, outcome.summary());
                    if mode == SaveMode::Final {
                        alert(&crate::state::home::saved_message(&outcome));
                    }
                    save_status.set(outcome.summary());
                }
                Err(e) => {
                    log::error!("{} save of {} failed: {e}", mode.as_str(), record.record_id);
                    if mode == SaveMode::Final {
                        alert(&format!("❌ Save failed: {e}"));
                    }
                    save_status.set(e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    };

    Effect::new(move || {
        let filled = form.try_update(|f| autofill(f, &client_store())).unwrap_or(false);
        if filled {
            persist(SaveMode::Draft);
        }
    });

    let navigate_report = navigate.clone();
    let on_clear = move |_| {
        form.update(StagingForm::clear);
        navigate_report(AppRoute::Report.path(), NavigateOptions::default());
    };
    let navigate_find = navigate.clone();
    let on_find = move |_| navigate_find(AppRoute::Find.path(), NavigateOptions::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        persist(SaveMode::Final);
    };

    let size_is = move |kind: SizeKind| form.with(|f| f.size.kind == kind);

    view! {
        <div class="home-page">
            <header class="page-header">
                <h1>"Lung Tumor Staging"</h1>
                <button class="btn btn--ghost" type="button" on:click=on_find>"Find reports"</button>
            </header>

            <form class="staging-form" on:submit=on_submit>
                <fieldset class="staging-form__identity">
                    <legend>"Patient"</legend>
                    <label>
                        "Record ID"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.record_id.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.record_id = value);
                            }
                        />
                    </label>
                    <label>
                        "Patient name"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.patient_name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.patient_name = value);
                            }
                        />
                    </label>
                    <label>
                        "Patient info"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.patient_info.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.patient_info = value);
                            }
                        />
                    </label>
                    <label>
                        "Imaging date"
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.date = value);
                            }
                        />
                    </label>
                </fieldset>

                <fieldset class="code-checklist">
                    <legend>"Imaging Modality"</legend>
                    <label class="code-checklist__item">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.modalities.ct)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.modalities.ct = checked);
                            }
                        />
                        <span>"CT"</span>
                    </label>
                    <label class="code-checklist__item">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.modalities.mri)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.modalities.mri = checked);
                            }
                        />
                        <span>"MRI"</span>
                    </label>
                </fieldset>

                <CodeChecklist title="Tumor Location" form=form read=locations write=locations_mut/>
                <label class="staging-form__other">
                    "Other location"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.other_location.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.other_location = value);
                        }
                    />
                </label>

                <fieldset class="staging-form__size">
                    <legend>"Tumor Size"</legend>
                    <label>
                        <input
                            type="radio"
                            name="tumor-size"
                            prop:checked=move || size_is(SizeKind::NonMeasurable)
                            on:change=move |_| form.update(|f| f.size.kind = SizeKind::NonMeasurable)
                        />
                        "Non-measurable"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="tumor-size"
                            prop:checked=move || size_is(SizeKind::Measurable)
                            on:change=move |_| form.update(|f| f.size.kind = SizeKind::Measurable)
                        />
                        "Measurable"
                    </label>
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="cm"
                        prop:value=move || form.with(|f| f.size.value.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.size.value = value);
                        }
                    />
                </fieldset>

                <CodeChecklist title="Tumor Invasion (T Classification)" form=form read=t_codes write=t_codes_mut/>
                <CodeChecklist title="Regional Lymph Node (N Classification)" form=form read=n_codes write=n_codes_mut/>
                <CodeChecklist title="Distant Metastasis (M Classification)" form=form read=m_codes write=m_codes_mut/>

                <label class="staging-form__findings">
                    "Other findings"
                    <textarea
                        prop:value=move || form.with(|f| f.other_finding.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.other_finding = value);
                        }
                    ></textarea>
                </label>

                <fieldset class="staging-form__imp">
                    <legend>"IMP"</legend>
                    <label>
                        "T"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.imp.t.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.imp.t = value);
                            }
                        />
                    </label>
                    <label>
                        "N"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.imp.n.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.imp.n = value);
                            }
                        />
                    </label>
                    <label>
                        "M"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.imp.m.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.imp.m = value);
                            }
                        />
                    </label>
                </fieldset>

                <div class="staging-form__actions">
                    <button class="btn btn--primary" type="submit">"Save"</button>
                    <button class="btn" type="button" on:click=on_clear>"Clear"</button>
                </div>
                <Show when=move || save_status.with(|s| !s.is_empty())>
                    <p class="save-status">{move || save_status.get()}</p>
                </Show>
            </form>
        </div>
    }
}
