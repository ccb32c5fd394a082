//! Catalog page: categories and product cards.

use leptos::prelude::*;
use vitrine_commerce::prelude::*;

use crate::app::use_store;
use crate::collab;

#[component]
pub fn CatalogSection() -> impl IntoView {
    let store = use_store();

    let categories = move || {
        store
            .catalog
            .with(|c| c.categories.iter().map(str::to_string).collect::<Vec<_>>())
    };
    let has_uncategorized = move || store.catalog.with(|c| c.uncategorized().next().is_some());

    view! {
        <section class="page catalog">
            <h2>"Nossos produtos"</h2>

            {move || store.editing().then(|| view! { <CategoryEditor/> })}

            <For
                each=categories
                key=|name| name.clone()
                children=move |name| {
                    view! { <CategoryGroup name=name/> }
                }
            />

            {move || {
                has_uncategorized()
                    .then(|| {
                        view! {
                            <div class="category-group">
                                <h3>"Outros"</h3>
                                <div class="products">
                                    <For
                                        each=move || {
                                            store
                                                .catalog
                                                .with(|c| {
                                                    c.uncategorized().cloned().collect::<Vec<_>>()
                                                })
                                        }
                                        key=|product| product.id.clone()
                                        children=move |product| {
                                            view! { <ProductCard product=product/> }
                                        }
                                    />
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                store
                    .editing()
                    .then(|| {
                        view! {
                            <button
                                class="btn btn-add no-print"
                                on:click=move |_| {
                                    let mut id = None;
                                    store
                                        .catalog
                                        .update(|c| id = Some(c.add_product()));
                                    store.selected_product.set(id);
                                }
                            >
                                "+ Novo produto"
                            </button>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn CategoryEditor() -> impl IntoView {
    let store = use_store();
    let draft = RwSignal::new(String::new());

    let add = move |_| {
        let name = draft.get_untracked();
        let mut added = false;
        store.catalog.update(|c| added = c.add_category(name));
        if added {
            draft.set(String::new());
        }
    };

    view! {
        <div class="category-editor no-print">
            <input
                type="text"
                placeholder="Nova categoria"
                prop:value=draft
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button class="btn" on:click=add>
                "Adicionar categoria"
            </button>
        </div>
    }
}

#[component]
fn CategoryGroup(name: String) -> impl IntoView {
    let store = use_store();
    // First click arms the delete, second click confirms.
    let confirm_delete = RwSignal::new(false);
    let title = name.clone();
    let name_for_list = name.clone();
    let name_for_delete = name.clone();

    view! {
        <div class="category-group">
            <h3>
                {title}
                {move || {
                    store
                        .editing()
                        .then(|| {
                            let name = name_for_delete.clone();
                            view! {
                                <button
                                    class="btn btn-remove no-print"
                                    on:click=move |_| {
                                        if confirm_delete.get_untracked() {
                                            store
                                                .catalog
                                                .update(|c| {
                                                    c.delete_category(&name);
                                                });
                                        } else {
                                            confirm_delete.set(true);
                                        }
                                    }
                                >
                                    {move || {
                                        if confirm_delete.get() {
                                            "Confirmar exclusão?"
                                        } else {
                                            "Excluir"
                                        }
                                    }}
                                </button>
                            }
                        })
                }}
            </h3>
            <div class="products">
                <For
                    each=move || {
                        store
                            .catalog
                            .with(|c| {
                                c.products_in(&name_for_list).cloned().collect::<Vec<_>>()
                            })
                    }
                    key=|product| product.id.clone()
                    children=move |product| {
                        view! { <ProductCard product=product/> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = use_store();
    // First click arms the delete, second click confirms.
    let confirm_delete = RwSignal::new(false);
    let id = product.id.clone();
    let id_for_open = id.clone();
    let id_for_delete = id.clone();
    let name = product.name.clone();
    let price = product.price.display();
    let cover = product.cover_image().map(str::to_string);
    let product_for_order = product.clone();
    let product_for_cart = product.clone();

    let order = move |_| {
        let contacts = store
            .with_shop_untracked(|s| s.contacts.clone())
            .unwrap_or_default();
        match product_order_link(&product_for_order, &contacts) {
            Ok(url) => collab::open_in_new_tab(&url),
            Err(err) => collab::alert(collab::order_failure_message(&err)),
        }
    };

    view! {
        <div class="product-card">
            <div
                class="product-image"
                on:click=move |_| store.selected_product.set(Some(id_for_open.clone()))
            >
                {match cover {
                    Some(src) => view! { <img src=src alt=""/> }.into_any(),
                    None => view! { <div class="image-placeholder"></div> }.into_any(),
                }}
            </div>
            <div class="product-info">
                <h4>{name}</h4>
                <p class="price">{price}</p>
                <div class="actions">
                    <button
                        class="btn no-print"
                        on:click=move |_| {
                            store.cart.update(|cart| cart.add(&product_for_cart));
                            store.cart_open.set(true);
                        }
                    >
                        "Adicionar à sacola"
                    </button>
                    <button class="btn no-print" on:click=order>
                        "Encomendar"
                    </button>
                    {move || {
                        store
                            .editing()
                            .then(|| {
                                let id = id_for_delete.clone();
                                view! {
                                    <button
                                        class="btn btn-remove no-print"
                                        on:click=move |_| {
                                            if confirm_delete.get_untracked() {
                                                store
                                                    .catalog
                                                    .update(|c| c.delete_product(&id));
                                            } else {
                                                confirm_delete.set(true);
                                            }
                                        }
                                    >
                                        {move || {
                                            if confirm_delete.get() {
                                                "Confirmar exclusão?"
                                            } else {
                                                "Excluir"
                                            }
                                        }}
                                    </button>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
