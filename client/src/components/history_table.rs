//! Recent-calls table on the operator console.
//!
//! Rows are rebuilt on every refresh; Recall/Complete buttons render only for
//! entries still in the `Called` state.

use leptos::prelude::*;

use crate::state::operation::HistoryRow;

#[component]
pub fn HistoryTable(
    #[prop(into)] rows: Signal<Vec<HistoryRow>>,
    on_recall: Callback<String>,
    on_complete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>"Number"</th>
                    <th>"Call Time"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| view! { <HistoryLine row=row on_recall=on_recall on_complete=on_complete/> })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn HistoryLine(row: HistoryRow, on_recall: Callback<String>, on_complete: Callback<String>) -> impl IntoView {
    let HistoryRow { number, call_time, status, actionable } = row;
    let status_class = format!("status status--{}", status.as_str().to_ascii_lowercase());
    let actions = actionable.then(|| {
        let recall_number = number.clone();
        let complete_number = number.clone();
        view! {
            <button class="btn btn--small" on:click=move |_| on_recall.run(recall_number.clone())>
                "Recall"
            </button>
            <button class="btn btn--small btn--success" on:click=move |_| on_complete.run(complete_number.clone())>
                "Complete"
            </button>
        }
    });

    view! {
        <tr>
            <td class="history-table__number">{number}</td>
            <td>{call_time}</td>
            <td><span class=status_class>{status.as_str()}</span></td>
            <td class="history-table__actions">{actions}</td>
        </tr>
    }
}
