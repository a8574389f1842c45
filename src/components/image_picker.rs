//! Image Picker Component
//!
//! Multi-file image input with previews. Files are read into memory as they
//! are picked so the close request can be built without touching the DOM.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::api::Upload;

/// A picked file plus its object-URL preview
#[derive(Debug, Clone, PartialEq)]
pub struct PickedImage {
    pub key: u32,
    pub upload: Upload,
    pub preview: Option<String>,
}

async fn read_upload(file: &web_sys::File) -> Result<Upload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Upload { file_name: file.name(), mime: file.type_(), bytes })
}

fn revoke(image: &PickedImage) {
    if let Some(url) = &image.preview {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}

/// Drop all picked images and their previews
pub fn clear_images(images: RwSignal<Vec<PickedImage>>) {
    images.update(|list| {
        list.iter().for_each(revoke);
        list.clear();
    });
}

#[component]
pub fn ImagePicker(images: RwSignal<Vec<PickedImage>>) -> impl IntoView {
    let next_key = StoredValue::new(0u32);

    let on_pick = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else { return };
        let picked: Vec<web_sys::File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        // Same file can be picked again after removal
        input.set_value("");

        spawn_local(async move {
            for file in picked {
                match read_upload(&file).await {
                    Ok(upload) => {
                        let key = next_key.get_value();
                        next_key.set_value(key + 1);
                        let preview = web_sys::Url::create_object_url_with_blob(&file).ok();
                        images.update(|list| list.push(PickedImage { key, upload, preview }));
                    }
                    Err(e) => log::warn!("[Images] cannot read {}: {:?}", file.name(), e),
                }
            }
        });
    };

    let remove = move |key: u32| {
        images.update(|list| {
            if let Some(index) = list.iter().position(|img| img.key == key) {
                revoke(&list.remove(index));
            }
        });
    };

    view! {
        <div class="image-picker">
            <input type="file" accept="image/*" multiple=true on:change=on_pick />
            <div class="image-previews">
                <For
                    each=move || images.get()
                    key=|img| img.key
                    children=move |img| {
                        let key = img.key;
                        view! {
                            <figure class="image-preview">
                                {img.preview.map(|src| view! { <img src=src alt=img.upload.file_name.clone() /> })}
                                <figcaption>{img.upload.file_name.clone()}</figcaption>
                                <button type="button" class="btn btn-danger" on:click=move |_| remove(key)>"Remove"</button>
                            </figure>
                        }
                    }
                />
            </div>
            <p class="hint">{move || format!("{} image(s) attached", images.get().len())}</p>
        </div>
    }
}
