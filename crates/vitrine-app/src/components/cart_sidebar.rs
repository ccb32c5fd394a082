//! Sliding cart panel with the WhatsApp checkout handoff.

use leptos::prelude::*;
use vitrine_commerce::prelude::*;

use crate::app::use_store;
use crate::collab;

#[component]
pub fn CartSidebar() -> impl IntoView {
    let store = use_store();

    let checkout = move |_| {
        let cart = store.cart.get_untracked();
        let name = store
            .with_shop_untracked(|s| s.name.clone())
            .unwrap_or_default();
        let phone = store
            .with_shop_untracked(|s| {
                s.whatsapp_value().map(str::to_string).unwrap_or_default()
            })
            .unwrap_or_default();

        // The cart stays intact: the handoff can be cancelled in the
        // external app and the order resumed here.
        match checkout_link(&cart, &name, &phone) {
            Ok(url) => collab::open_in_new_tab(&url),
            Err(err) => collab::alert(collab::order_failure_message(&err)),
        }
    };

    view! {
        {move || {
            store
                .cart_open
                .get()
                .then(|| {
                    view! {
                        <aside class="cart-sidebar no-print">
                            <header>
                                <h3>"Sacola"</h3>
                                <button
                                    class="btn"
                                    on:click=move |_| store.cart_open.set(false)
                                >
                                    "Fechar"
                                </button>
                            </header>

                            {move || {
                                store
                                    .cart
                                    .with(|cart| {
                                        if cart.is_empty() {
                                            view! {
                                                <p class="empty">"Sua sacola está vazia."</p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="cart-lines">
                                                    {cart
                                                        .items()
                                                        .iter()
                                                        .map(|item| {
                                                            view! {
                                                                <CartLine item=item.clone()/>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                                <div class="cart-total">
                                                    <strong>"Total"</strong>
                                                    <strong>{cart.total().display()}</strong>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}

                            <button
                                class="btn btn-checkout"
                                disabled=move || store.cart.with(|c| c.is_empty())
                                on:click=checkout
                            >
                                "Finalizar pedido no WhatsApp"
                            </button>
                        </aside>
                    }
                })
        }}
    }
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let store = use_store();
    let id_minus = item.product_id.clone();
    let id_plus = item.product_id.clone();
    let subtotal = item.subtotal().display();

    view! {
        <div class="cart-line">
            {item.image.clone().map(|src| view! { <img src=src alt=""/> })}
            <div class="line-info">
                <strong>{item.name.clone()}</strong>
                <span>{item.price.display()} " x " {item.quantity.to_string()}</span>
                <span class="subtotal">{subtotal}</span>
            </div>
            <div class="line-actions">
                <button
                    class="btn"
                    on:click=move |_| {
                        store.cart.update(|cart| {
                            cart.update_quantity(&id_minus, -1);
                        })
                    }
                >
                    "-"
                </button>
                <button
                    class="btn"
                    on:click=move |_| {
                        store.cart.update(|cart| {
                            cart.update_quantity(&id_plus, 1);
                        })
                    }
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
