//! Terminal page for benign outcomes.

use leptos::prelude::*;

use crate::app::AppRoute;
use crate::state::benign::BenignView;
use crate::util::storage::client_store;

#[component]
pub fn BenignPage() -> impl IntoView {
    let view_state = RwSignal::new(None::<BenignView>);

    Effect::new(move || {
        view_state.set(Some(BenignView::load(&client_store())));
    });

    view! {
        <div class="benign-page">
            <header class="page-header">
                <h1>"Benign Finding"</h1>
            </header>
            <section class="panel">
                <div class="panel__head">
                    <h2>"Classification"</h2>
                    <span class="badge badge--benign">
                        {move || view_state.with(|v| v.as_ref().map(|v| v.classification.clone()).unwrap_or_default())}
                    </span>
                </div>
                <pre class="result-text">
                    {move || view_state.with(|v| v.as_ref().map(|v| v.report_text.clone()).unwrap_or_default())}
                </pre>
            </section>
            <footer class="page-footer">
                <a class="btn" href=AppRoute::Report.path()>"← New observation"</a>
                <a class="btn btn--primary" href=AppRoute::Home.path()>"Staging form →"</a>
            </footer>
        </div>
    }
}
