//! Checkbox group for one TNM or location code set.
//!
//! DESIGN
//! ======
//! The group does not own its selection. It borrows one `CodeSelection` out of
//! the page's `StagingForm` signal through a pair of accessors, so ticking a
//! box updates the same form that validation and record building read.

use leptos::prelude::*;
use records::{CodeSelection, StagingForm};

/// Checkboxes for every code in the selected set, in table order.
#[component]
pub fn CodeChecklist(
    title: &'static str,
    form: RwSignal<StagingForm>,
    read: fn(&StagingForm) -> &CodeSelection,
    write: fn(&mut StagingForm) -> &mut CodeSelection,
) -> impl IntoView {
    let codes = form.with_untracked(|f| read(f).codes());

    view! {
        <fieldset class="code-checklist">
            <legend>{title}</legend>
            {codes
                .iter()
                .map(|&code| {
                    view! {
                        <label class="code-checklist__item">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| read(f).is_checked(code))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| {
                                        write(f).set(code, checked);
                                    });
                                }
                            />
                            <span>{code}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}
