/// Offer `bytes` to the user as a file named `file_name`
#[cfg(target_arch = "wasm32")]
pub fn save_file(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| format!("{:?}", e);

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);

    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document is not available".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "failed to create download link".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}

/// Offer `bytes` to the user as a file named `file_name`
///
/// Outside the browser the file is written to the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(file_name: &str, _mime: &str, bytes: &[u8]) -> Result<(), String> {
    std::fs::write(file_name, bytes).map_err(|e| format!("failed to write {}: {}", file_name, e))
}
