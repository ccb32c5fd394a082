//! About page: story text, workshop image, contact editing.

use leptos::prelude::*;
use vitrine_commerce::prelude::*;

use crate::app::use_store;
use crate::components::image_upload::ImageUpload;

#[component]
pub fn AboutSection() -> impl IntoView {
    let store = use_store();

    let about_text = move || {
        store
            .shop
            .with(|s| s.as_ref().map(|s| s.about_text.clone()).unwrap_or_default())
    };

    view! {
        <section class="page about">
            <h2>"Sobre o ateliê"</h2>

            <div class="about-image">
                {move || {
                    store
                        .shop
                        .with(|s| s.as_ref().and_then(|s| s.about_image.clone()))
                        .map(|src| view! { <img src=src alt="Ateliê"/> })
                }}
                {move || {
                    store
                        .editing()
                        .then(|| {
                            view! {
                                <ImageUpload
                                    label="Foto do ateliê"
                                    on_upload=move |data_url| {
                                        store
                                            .update_shop(|s| s.about_image = Some(data_url))
                                    }
                                />
                            }
                        })
                }}
            </div>

            {move || {
                if store.editing() {
                    view! {
                        <textarea
                            class="about-text"
                            prop:value=about_text
                            on:input=move |ev| {
                                store
                                    .update_shop(|s| s.about_text = event_target_value(&ev))
                            }
                        ></textarea>
                    }
                        .into_any()
                } else {
                    view! { <p class="about-text">{about_text()}</p> }.into_any()
                }
            }}

            <ContactList/>
        </section>
    }
}

#[component]
fn ContactList() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="contacts">
            <h3>"Contato"</h3>
            <For
                each=move || {
                    store
                        .shop
                        .with(|s| {
                            s.as_ref().map(|s| s.contacts.clone()).unwrap_or_default()
                        })
                }
                key=|contact| contact.id.clone()
                children=move |contact| {
                    view! { <ContactRow contact=contact/> }
                }
            />
            {move || {
                store
                    .editing()
                    .then(|| {
                        view! {
                            <div class="add-contact no-print">
                                {ContactKind::all()
                                    .into_iter()
                                    .map(|kind| {
                                        view! {
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    store
                                                        .update_shop(|s| {
                                                            s.add_contact(kind, "");
                                                        })
                                                }
                                            >
                                                "+ " {kind.display_name()}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ContactRow(contact: Contact) -> impl IntoView {
    let store = use_store();
    let id = contact.id.clone();
    let id_for_edit = id.clone();
    let id_for_remove = id.clone();
    let value = contact.value.clone();

    view! {
        <div class="contact-row">
            <strong>{contact.kind.display_name()} ": "</strong>
            {move || {
                if store.editing() {
                    let id = id_for_edit.clone();
                    view! {
                        <input
                            type="text"
                            prop:value=value.clone()
                            on:input=move |ev| {
                                store
                                    .update_shop(|s| {
                                        s.update_contact(&id, event_target_value(&ev))
                                    })
                            }
                        />
                    }
                        .into_any()
                } else {
                    view! { <span>{value.clone()}</span> }.into_any()
                }
            }}
            {move || {
                store
                    .editing()
                    .then(|| {
                        let id = id_for_remove.clone();
                        view! {
                            <button
                                class="btn btn-remove no-print"
                                on:click=move |_| {
                                    store.update_shop(|s| s.remove_contact(&id))
                                }
                            >
                                "Remover"
                            </button>
                        }
                    })
            }}
        </div>
    }
}
