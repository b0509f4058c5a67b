//! Thin wrappers over browser APIs used by the views.
//!
//! Every function is a no-op (or a passthrough) outside the `hydrate` build
//! so pages can call them unconditionally during SSR.
//!
//! ERROR HANDLING
//! ==============
//! Browser API failures are logged to the console and swallowed. Audio in
//! particular is expected to fail under autoplay restrictions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                leptos::logging::warn!("alert failed: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Whether the page is currently hidden (background tab, minimized window).
pub fn document_hidden() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.hidden())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Try to play the alert sound at `src` from the start.
pub fn play_sound(src: &str) {
    #[cfg(feature = "hydrate")]
    {
        let audio = match web_sys::HtmlAudioElement::new_with_src(src) {
            Ok(audio) => audio,
            Err(e) => {
                leptos::logging::warn!("Could not create alert sound: {e:?}");
                return;
            }
        };
        match audio.play() {
            Ok(promise) => leptos::task::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    leptos::logging::warn!("Could not play alert sound: {e:?}");
                }
            }),
            Err(e) => leptos::logging::warn!("Error playing alert sound: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = src;
    }
}

/// Offer `content` to the user as a downloaded file.
pub fn download_bytes(file_name: &str, mime: &str, content: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = trigger_download(file_name, mime, content) {
            leptos::logging::warn!("download of {file_name} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, mime, content);
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(file_name: &str, mime: &str, content: &[u8]) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

/// Read the first file selected in a file input.
///
/// Returns `Ok(None)` when no file is selected.
///
/// # Errors
///
/// Returns the browser's error text if reading fails.
#[cfg(feature = "hydrate")]
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Result<Option<(String, Vec<u8>)>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some((file.name(), bytes)))
}

/// Format a server call timestamp as a local time of day.
///
/// Unparseable or SSR input is returned unchanged.
pub fn format_call_time(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_time_string("en-US"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
