//! Trigger a browser download for in-memory bytes.
//!
//! Hydrate-only; SSR and native builds no-op.

/// Offer `bytes` as a file named `file_name`.
///
/// # Errors
///
/// Returns an error string if the blob, object URL, or anchor cannot be created.
pub fn save_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let data = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&data);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| "could not create blob".to_owned())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "could not create object URL".to_owned())?;

        let anchor = document
            .create_element("a")
            .map_err(|_| "could not create link".to_owned())?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "could not create link".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, mime, bytes);
        Ok(())
    }
}
