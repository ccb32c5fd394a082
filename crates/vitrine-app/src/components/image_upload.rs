//! File-input widget that delivers the picked image as a data URL.

use leptos::prelude::*;

use crate::collab;

#[component]
pub fn ImageUpload(
    label: &'static str,
    on_upload: impl Fn(String) + Clone + 'static,
) -> impl IntoView {
    view! {
        <label class="image-upload no-print">
            {label}
            <input
                type="file"
                accept="image/*"
                on:change=move |ev| {
                    if let Some(file) = collab::file_from_input(&ev) {
                        let on_upload = on_upload.clone();
                        collab::read_file_as_data_url(
                            file,
                            move |data_url| on_upload(data_url),
                        );
                    }
                }
            />
        </label>
    }
}
