use crate::client::error::Error;

/// Hands `bytes` to the browser as a download named `file_name`
#[cfg(target_arch = "wasm32")]
pub fn save_file(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), Error> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let fail = |e: wasm_bindgen::JsValue| Error::Download {
        file_name: file_name.to_string(),
        reason: format!("{:?}", e),
    };

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(fail)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(fail)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Download {
            file_name: file_name.to_string(),
            reason: "no document available".to_string(),
        })?;
    let anchor = document
        .create_element("a")
        .map_err(fail)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| Error::Download {
            file_name: file_name.to_string(),
            reason: "created element is not an anchor".to_string(),
        })?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(fail)
}

/// Writes `bytes` to `file_name` in the working directory
#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(bytes: &[u8], file_name: &str, _mime_type: &str) -> Result<(), Error> {
    std::fs::write(file_name, bytes).map_err(|e| Error::Download {
        file_name: file_name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_download_writes_file() {
        let path = std::env::temp_dir().join("budgetwise-download-test.csv");
        let name = path.to_string_lossy().to_string();

        save_file(b"id,amount\n1,50\n", &name, "text/csv").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"id,amount\n1,50\n");
        std::fs::remove_file(path).unwrap();
    }
}
