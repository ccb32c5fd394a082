//! Cover page: logo, shop name, subtitle, decorations, hero carousel.

use leptos::prelude::*;
use vitrine_studio::prelude::*;

use crate::app::use_store;
use crate::collab::SuggestionService;
use crate::components::hero_carousel::HeroCarousel;
use crate::components::image_upload::ImageUpload;

#[component]
pub fn CoverSection() -> impl IntoView {
    let store = use_store();
    let service: SuggestionService = expect_context();

    let name = move || {
        store
            .shop
            .with(|s| s.as_ref().map(|s| s.name.clone()).unwrap_or_default())
    };
    let subtitle = move || {
        store
            .shop
            .with(|s| s.as_ref().map(|s| s.subtitle.clone()).unwrap_or_default())
    };
    let show_decorations = move || {
        store
            .shop
            .with(|s| s.as_ref().map(|s| s.show_decorations).unwrap_or(false))
    };

    let suggest_subtitle = move |_| {
        let mut begun = Ok(());
        store.subtitle_call.update(|call| begun = call.begin());
        if begun.is_err() {
            return;
        }
        let shop_name = store
            .with_shop_untracked(|s| s.name.clone())
            .unwrap_or_default();
        service.request(
            &subtitle_prompt(&shop_name),
            Box::new(move |result| match result {
                Ok(text) => {
                    store.update_shop(|shop| shop.subtitle = text);
                    store.subtitle_call.update(|call| call.succeed());
                }
                Err(message) => {
                    store.subtitle_call.update(|call| call.fail(message));
                }
            }),
        );
    };

    view! {
        <section class="page cover">
            {move || {
                (show_decorations())
                    .then(|| {
                        view! {
                            <div class="decorations">
                                <Decoration side=DecorationSide::Left/>
                                <Decoration side=DecorationSide::Right/>
                            </div>
                        }
                    })
            }}

            <div class="cover-logo">
                {move || {
                    store
                        .shop
                        .with(|s| s.as_ref().and_then(|s| s.logo.clone()))
                        .map(|src| view! { <img src=src alt="Logo"/> })
                }}
                {move || {
                    store
                        .editing()
                        .then(|| {
                            view! {
                                <ImageUpload
                                    label="Logo"
                                    on_upload=move |data_url| {
                                        store.update_shop(|s| s.logo = Some(data_url))
                                    }
                                />
                            }
                        })
                }}
            </div>

            <h1 class="shop-name">
                {move || {
                    if store.editing() {
                        view! {
                            <input
                                type="text"
                                prop:value=name
                                on:input=move |ev| {
                                    store
                                        .update_shop(|s| {
                                            s.name = event_target_value(&ev)
                                        })
                                }
                            />
                        }
                            .into_any()
                    } else {
                        view! { <span>{name()}</span> }.into_any()
                    }
                }}
            </h1>

            <p class="subtitle">
                {move || {
                    if store.editing() {
                        view! {
                            <input
                                type="text"
                                prop:value=subtitle
                                on:input=move |ev| {
                                    store
                                        .update_shop(|s| {
                                            s.subtitle = event_target_value(&ev)
                                        })
                                }
                            />
                        }
                            .into_any()
                    } else {
                        view! { <span>{subtitle()}</span> }.into_any()
                    }
                }}
            </p>

            {move || {
                store
                    .editing()
                    .then(|| {
                        let pending = move || store.subtitle_call.with(|c| c.is_pending());
                        view! {
                            <div class="suggest no-print">
                                <button
                                    class="btn"
                                    disabled=pending
                                    on:click=suggest_subtitle.clone()
                                >
                                    {move || {
                                        if pending() { "Criando..." } else { "Sugerir frase" }
                                    }}
                                </button>
                                {move || {
                                    store
                                        .subtitle_call
                                        .with(|call| match call.state() {
                                            CallState::Failed(message) => {
                                                Some(
                                                    view! {
                                                        <p class="error">{message.clone()}</p>
                                                    },
                                                )
                                            }
                                            _ => None,
                                        })
                                }}
                                <label class="toggle">
                                    <input
                                        type="checkbox"
                                        prop:checked=show_decorations
                                        on:change=move |_| {
                                            store
                                                .update_shop(|s| {
                                                    s.show_decorations = !s.show_decorations
                                                })
                                        }
                                    />
                                    "Mostrar decorações"
                                </label>
                            </div>
                        }
                    })
            }}

            <HeroCarousel/>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum DecorationSide {
    Left,
    Right,
}

#[component]
fn Decoration(side: DecorationSide) -> impl IntoView {
    let store = use_store();

    let image = move || {
        store.shop.with(|s| {
            s.as_ref().and_then(|s| match side {
                DecorationSide::Left => s.left_decoration.clone(),
                DecorationSide::Right => s.right_decoration.clone(),
            })
        })
    };
    let class = match side {
        DecorationSide::Left => "decoration decoration-left",
        DecorationSide::Right => "decoration decoration-right",
    };

    view! {
        <div class=class>
            {move || image().map(|src| view! { <img src=src alt=""/> })}
            {move || {
                store
                    .editing()
                    .then(|| {
                        view! {
                            <ImageUpload
                                label="Decoração"
                                on_upload=move |data_url| {
                                    store
                                        .update_shop(|s| match side {
                                            DecorationSide::Left => {
                                                s.left_decoration = Some(data_url)
                                            }
                                            DecorationSide::Right => {
                                                s.right_decoration = Some(data_url)
                                            }
                                        })
                                }
                            />
                        }
                    })
            }}
        </div>
    }
}
