//! Result table for the report search page.

use leptos::prelude::*;
use records::ReportRow;

const HEADERS: [&str; 11] = [
    "Created",
    "Record ID",
    "Patient",
    "Location",
    "Size (cm)",
    "T",
    "N",
    "M",
    "Lung-RADS",
    "Other findings",
    "Report",
];

#[component]
pub fn ReportTable(rows: Signal<Vec<ReportRow>>) -> impl IntoView {
    view! {
        <Show when=move || !rows.with(Vec::is_empty)>
            <table class="report-table">
                <thead>
                    <tr>{HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.created_at}</td>
                                        <td>{row.record_id}</td>
                                        <td>{row.patient_name}</td>
                                        <td>{row.tumor_location}</td>
                                        <td>{row.tumor_size_cm}</td>
                                        <td>{row.t_stage}</td>
                                        <td>{row.n_stage}</td>
                                        <td>{row.m_stage}</td>
                                        <td>{row.lung_rads_category}</td>
                                        <td>{row.other_findings}</td>
                                        <td class="report-table__text">{row.report_text}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
