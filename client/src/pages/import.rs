//! Bulk registration import from an uploaded sheet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff download a template, fill it in and upload it back. Rows are checked
//! against the room config before anything is sent; a batch with any invalid
//! row is rejected locally. Valid batches go to the backend in one request
//! and the per-row outcome comes back in the results panel.

use leptos::prelude::*;

use crate::components::import_results::{ImportResultsPanel, PreviewTable};
use crate::components::notification_modal::LoadingModal;
use crate::state::import::ImportState;

#[cfg(feature = "hydrate")]
use crate::{
    config::TEMPLATE_FILE_NAME,
    net::api,
    state::config::ConfigState,
    state::import::{ImportResults, Preview, build_template},
    util::browser,
    util::sheet::{SheetError, XLSX_MIME},
};

#[cfg(feature = "hydrate")]
const TEMPLATE_FAILED_ALERT: &str = "Failed to create template file. Please try again.";

#[component]
pub fn ImportPage() -> impl IntoView {
    let state = RwSignal::new(ImportState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::fetch_config().await {
            Ok(config) => {
                crate::util::signal::update_live(state, |s| s.config = config);
            }
            Err(e) => leptos::logging::warn!("Error fetching room configuration: {e}"),
        }
    });

    let on_download = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_config().await {
                Ok(config) => {
                    if download_template(&config).is_err() {
                        browser::alert(TEMPLATE_FAILED_ALERT);
                    }
                    crate::util::signal::update_live(state, |s| s.config = config);
                }
                Err(e) => {
                    leptos::logging::warn!("Error creating template: {e}");
                    browser::alert(TEMPLATE_FAILED_ALERT);
                }
            }
        });
    };

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            match read_upload(&input).await {
                Ok(Some(rows)) => {
                    crate::util::signal::update_live(state, |s| s.preview = Some(Preview::of(&rows)));
                }
                Ok(None) => {}
                Err(e) => {
                    leptos::logging::warn!("Error reading file: {e}");
                    browser::alert(crate::state::import::READ_ERROR_ALERT);
                }
            }
        });
    };

    let on_import = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            if input.files().and_then(|files| files.get(0)).is_none() {
                browser::alert(crate::state::import::NO_FILE_ALERT);
                return;
            }
            crate::util::signal::update_live(state, |s| s.importing = true);
            let results = run_import(state, &input).await;
            crate::util::signal::update_live(state, |s| {
                s.results = Some(results);
                s.importing = false;
            });
        });
    };

    let importing = Signal::derive(move || state.with(|s| s.importing));

    view! {
        <div class="import-page">
            <header class="page-header">
                <h1>"Import Patients"</h1>
            </header>

            <section class="import-page__template">
                <p>"Download the template, fill in one patient per row, then upload it here."</p>
                <button class="btn" on:click=on_download>"Download Template"</button>
            </section>

            <section class="import-page__upload">
                <input class="import-page__file" type="file" accept=".xlsx,.xls,.ods,.csv" node_ref=file_input on:change=on_file_change/>
                <button class="btn btn--primary" on:click=on_import disabled=move || importing.get()>
                    "Import"
                </button>
            </section>

            {move || {
                state
                    .with(|s| s.preview.clone())
                    .map(|preview| {
                        view! {
                            <section class="import-page__preview">
                                <h2>"Preview"</h2>
                                <PreviewTable preview=preview/>
                            </section>
                        }
                    })
            }}

            {move || {
                state
                    .with(|s| s.results.clone())
                    .map(|results| {
                        view! {
                            <section class="import-page__results">
                                <h2>"Results"</h2>
                                <ImportResultsPanel results=results/>
                            </section>
                        }
                    })
            }}

            <LoadingModal visible=importing message="Importing..."/>
        </div>
    }
}

/// Encode the template workbook and offer it as a download.
#[cfg(feature = "hydrate")]
fn download_template(config: &ConfigState) -> Result<(), SheetError> {
    let workbook = build_template(config);
    let bytes = workbook.to_xlsx()?;
    browser::download_bytes(TEMPLATE_FILE_NAME, XLSX_MIME, &bytes);
    Ok(())
}

/// Parse the selected file. `Ok(None)` means nothing is selected.
#[cfg(feature = "hydrate")]
async fn read_upload(input: &web_sys::HtmlInputElement) -> Result<Option<Vec<crate::net::types::ImportRow>>, String> {
    let Some((_, bytes)) = browser::read_selected_file(input).await? else {
        return Ok(None);
    };
    crate::state::import::parse_upload(&bytes).map(Some).map_err(|e| e.to_string())
}

/// Validate and submit the selected file, producing the results to show.
#[cfg(feature = "hydrate")]
async fn run_import(state: RwSignal<ImportState>, input: &web_sys::HtmlInputElement) -> ImportResults {
    let rows = match read_upload(input).await {
        Ok(Some(rows)) => rows,
        Ok(None) => return ImportResults::failed(None),
        Err(e) => {
            leptos::logging::warn!("Import error: {e}");
            return ImportResults::failed(None);
        }
    };

    if !state.try_with_untracked(ImportState::has_config).unwrap_or(false) {
        match api::fetch_config().await {
            Ok(config) => {
                crate::util::signal::update_live(state, |s| s.config = config);
            }
            Err(e) => leptos::logging::warn!("Error fetching room configuration: {e}"),
        }
    }

    let Some(prepared) = state.try_update(|s| s.prepare(&rows)) else {
        return ImportResults::failed(None);
    };
    if let Err(rejected) = prepared {
        return rejected;
    }

    match api::import_batch(&rows).await {
        Ok(resp) => {
            input.set_value("");
            ImportResults::from(resp)
        }
        Err(e) => {
            leptos::logging::warn!("Import error: {e}");
            ImportResults::failed(e.server_message())
        }
    }
}
