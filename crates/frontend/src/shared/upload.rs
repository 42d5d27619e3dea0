//! Multipart bodies for the upload-bearing endpoints.

use leptos::html;
use leptos::prelude::*;
use web_sys::{File, FormData};

use super::http::ApiError;

/// First file chosen in a file input, if any
pub fn picked_file(input: NodeRef<html::Input>) -> Option<File> {
    input.get_untracked()?.files()?.get(0)
}

/// Text parts in order, then every file that was actually picked
pub fn multipart(
    parts: &[(&'static str, String)],
    files: &[(&'static str, Option<File>)],
) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Validation(format!("{:?}", e));
    let form = FormData::new().map_err(js_err)?;
    for (name, value) in parts {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    for (name, file) in files {
        if let Some(file) = file {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(js_err)?;
        }
    }
    Ok(form)
}
