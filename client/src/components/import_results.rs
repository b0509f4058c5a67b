//! Import preview table and results panel.

use leptos::prelude::*;

use crate::state::import::{ImportResults, Preview};

#[component]
pub fn PreviewTable(preview: Preview) -> impl IntoView {
    let more = preview.more_label();

    view! {
        <table class="preview-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Room Type"</th>
                    <th>"Room"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {preview
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.name}</td>
                                <td>{row.room_type}</td>
                                <td>{row.room}</td>
                                <td>"Pending"</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
                {more.map(|label| view! {
                    <tr>
                        <td colspan="4" class="preview-table__more">{label}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

#[component]
pub fn ImportResultsPanel(results: ImportResults) -> impl IntoView {
    let summary = results.summary();
    let errors = results.errors;

    view! {
        <div class="import-results">
            <p class="import-results__success">{summary}</p>
            {(!errors.is_empty())
                .then(|| {
                    view! {
                        <div class="import-results__errors">
                            <p class="import-results__errors-title">"Errors occurred:"</p>
                            <ul>
                                {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })}
        </div>
    }
}
