//! Cover-page carousel over the catalog's cover images.

use leptos::prelude::*;
use vitrine_commerce::prelude::*;

use crate::app::use_store;

#[component]
pub fn HeroCarousel() -> impl IntoView {
    let store = use_store();
    let cursor = RwSignal::new(GalleryCursor::new());

    let images = Memo::new(move |_| {
        store.catalog.with(|catalog| {
            catalog
                .products
                .iter()
                .filter_map(|p| p.cover_image().map(str::to_string))
                .collect::<Vec<_>>()
        })
    });

    // Deleting products can shrink the image list under the cursor.
    Effect::new(move |_| {
        let len = images.with(|imgs| imgs.len());
        cursor.update(|c| c.clamp_to(len));
    });

    let current = move || {
        let index = cursor.with(|c| c.index());
        images.with(|imgs| imgs.get(index).cloned())
    };

    view! {
        {move || {
            current()
                .map(|src| {
                    let len = move || images.with(|imgs| imgs.len());
                    view! {
                        <div class="hero-carousel">
                            <button
                                class="btn carousel-nav no-print"
                                on:click=move |_| cursor.update(|c| c.retreat(len()))
                            >
                                "‹"
                            </button>
                            <img src=src alt="Destaque"/>
                            <button
                                class="btn carousel-nav no-print"
                                on:click=move |_| cursor.update(|c| c.advance(len()))
                            >
                                "›"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
