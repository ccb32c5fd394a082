//! Product detail/editor modal.

use leptos::prelude::*;
use vitrine_commerce::prelude::*;
use vitrine_studio::prelude::*;

use crate::app::use_store;
use crate::collab::{self, SuggestionService};
use crate::components::image_upload::ImageUpload;

#[component]
pub fn ProductModal() -> impl IntoView {
    let store = use_store();
    let cursor = RwSignal::new(GalleryCursor::new());

    // New selection starts at the first image.
    Effect::new(move |_| {
        store.selected_product.track();
        cursor.update(|c| c.reset());
    });

    view! {
        {move || {
            let selected = store.selected_product.get()?;
            let product = store.catalog.with(|c| c.product(&selected).cloned())?;
            Some(view! { <ModalBody product=product cursor=cursor/> })
        }}
    }
}

#[component]
fn ModalBody(product: Product, cursor: RwSignal<GalleryCursor>) -> impl IntoView {
    let store = use_store();
    let service: SuggestionService = expect_context();
    let id = product.id.clone();

    let edit = {
        let id = id.clone();
        move |f: &dyn Fn(&mut Product)| {
            store.catalog.update(|c| {
                if let Some(p) = c.product_mut(&id) {
                    f(p);
                }
            });
        }
    };

    let suggest_description = {
        let id = id.clone();
        let edit = edit.clone();
        move |_| {
            let mut begun = Ok(());
            store.description_call.update(|call| begun = call.begin());
            if begun.is_err() {
                return;
            }
            let prompt = store
                .catalog
                .with_untracked(|c| c.product(&id).map(description_prompt));
            match prompt {
                Some(Ok(prompt)) => {
                    let edit = edit.clone();
                    service.request(
                        &prompt,
                        Box::new(move |result| match result {
                            Ok(text) => {
                                edit(&move |p: &mut Product| p.description = text.clone());
                                store.description_call.update(|call| call.succeed());
                            }
                            Err(message) => {
                                store.description_call.update(|call| call.fail(message));
                            }
                        }),
                    );
                }
                _ => {
                    store.description_call.update(|call| {
                        call.fail("Dê um nome ao produto antes de gerar a descrição.".to_string())
                    });
                }
            }
        }
    };

    let order = {
        let product = product.clone();
        move |_| {
            let contacts = store
                .with_shop_untracked(|s| s.contacts.clone())
                .unwrap_or_default();
            match product_order_link(&product, &contacts) {
                Ok(url) => collab::open_in_new_tab(&url),
                Err(err) => collab::alert(collab::order_failure_message(&err)),
            }
        }
    };

    let add_to_cart = {
        let product = product.clone();
        move |_| {
            store.cart.update(|cart| cart.add(&product));
            store.cart_open.set(true);
        }
    };

    let gallery_len = product.images.len();
    let current_image = {
        let images: Vec<String> = product.images.iter().map(str::to_string).collect();
        move || {
            let index = cursor.with(|c| c.index());
            images.get(index).cloned()
        }
    };

    view! {
        <div class="modal-overlay no-print">
            <div class="modal product-modal">
                <button
                    class="btn modal-close"
                    on:click=move |_| store.selected_product.set(None)
                >
                    "Fechar"
                </button>

                <div class="modal-gallery">
                    {move || {
                        match current_image() {
                            Some(src) => view! { <img src=src alt=""/> }.into_any(),
                            None => {
                                view! { <div class="image-placeholder"></div> }.into_any()
                            }
                        }
                    }}
                    {(gallery_len > 1)
                        .then(|| {
                            view! {
                                <div class="carousel-controls">
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            cursor.update(|c| c.retreat(gallery_len))
                                        }
                                    >
                                        "‹"
                                    </button>
                                    <span>
                                        {move || {
                                            format!(
                                                "{} / {gallery_len}",
                                                cursor.with(|c| c.index()) + 1,
                                            )
                                        }}
                                    </span>
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            cursor.update(|c| c.advance(gallery_len))
                                        }
                                    >
                                        "›"
                                    </button>
                                </div>
                            }
                        })}
                </div>

                {
                    let product = product.clone();
                    move || {
                        if store.editing() {
                            view! {
                                <ProductEditor
                                    product=product.clone()
                                    cursor=cursor
                                    suggest=suggest_description.clone()
                                />
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="product-detail">
                                    <h3>{product.name.clone()}</h3>
                                    <p class="price">{product.price.display()}</p>
                                    <p class="description">{product.description.clone()}</p>
                                    <button class="btn" on:click=add_to_cart.clone()>
                                        "Adicionar à sacola"
                                    </button>
                                    <button class="btn" on:click=order.clone()>
                                        "Encomendar"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }
            </div>
        </div>
    }
}

#[component]
fn ProductEditor(
    product: Product,
    cursor: RwSignal<GalleryCursor>,
    suggest: impl Fn(leptos::ev::MouseEvent) + Clone + 'static,
) -> impl IntoView {
    let store = use_store();
    let id = product.id.clone();

    let edit = {
        let id = id.clone();
        move |f: Box<dyn Fn(&mut Product)>| {
            store.catalog.update(|c| {
                if let Some(p) = c.product_mut(&id) {
                    f(p);
                }
            });
        }
    };

    let categories = store
        .catalog
        .with_untracked(|c| c.categories.iter().map(str::to_string).collect::<Vec<_>>());

    let pending = move || store.description_call.with(|c| c.is_pending());
    let gallery = product.images.clone();

    view! {
        <div class="product-editor">
            <label>
                "Nome"
                <input
                    type="text"
                    prop:value=product.name.clone()
                    on:input={
                        let edit = edit.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            edit(Box::new(move |p| p.name = value.clone()));
                        }
                    }
                />
            </label>

            <label>
                "Preço (R$)"
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    prop:value=product.price.display_fixed()
                    on:change={
                        let edit = edit.clone();
                        move |ev| {
                            if let Ok(reais) = event_target_value(&ev).parse::<f64>() {
                                edit(Box::new(move |p| {
                                    p.price = Money::from_reais(reais)
                                }));
                            }
                        }
                    }
                />
            </label>

            <label>
                "Categoria"
                <select on:change={
                    let edit = edit.clone();
                    move |ev| {
                        let value = event_target_value(&ev);
                        edit(Box::new(move |p| p.category = value.clone()));
                    }
                }>
                    {categories
                        .into_iter()
                        .map(|name| {
                            let selected = name == product.category;
                            view! {
                                <option value=name.clone() selected=selected>
                                    {name.clone()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label>
                "Descrição"
                <textarea
                    prop:value=product.description.clone()
                    on:input={
                        let edit = edit.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            edit(Box::new(move |p| p.description = value.clone()));
                        }
                    }
                ></textarea>
            </label>

            <div class="suggest">
                <button class="btn" disabled=pending on:click=suggest>
                    {move || if pending() { "Criando..." } else { "Sugerir descrição" }}
                </button>
                {move || {
                    store
                        .description_call
                        .with(|call| match call.state() {
                            CallState::Failed(message) => {
                                Some(view! { <p class="error">{message.clone()}</p> })
                            }
                            _ => None,
                        })
                }}
            </div>

            <div class="gallery-editor">
                {gallery
                    .iter()
                    .enumerate()
                    .map(|(index, src)| {
                        let edit = edit.clone();
                        let remaining = gallery.len().saturating_sub(1);
                        view! {
                            <div class="thumb">
                                <img src=src.to_string() alt=""/>
                                <button
                                    class="btn btn-remove"
                                    on:click=move |_| {
                                        edit(
                                            Box::new(move |p| {
                                                let _ = p.images.remove(index);
                                            }),
                                        );
                                        cursor.update(|c| c.clamp_to(remaining));
                                    }
                                >
                                    "x"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                {gallery
                    .next_slot()
                    .map(|slot| {
                        let edit = edit.clone();
                        view! {
                            <ImageUpload
                                label="+ Foto"
                                on_upload=move |data_url| {
                                    edit(
                                        Box::new(move |p| {
                                            let _ = p
                                                .images
                                                .upload_to_slot(slot, data_url.clone());
                                        }),
                                    )
                                }
                            />
                        }
                    })}
            </div>
        </div>
    }
}
