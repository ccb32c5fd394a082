//! Application shell: signal store, top controls, page layout.

use leptos::prelude::*;
use std::sync::Arc;
use vitrine_commerce::prelude::*;
use vitrine_studio::prelude::*;

use crate::collab::{self, NoSuggestions, SuggestionService};
use crate::components::cart_sidebar::CartSidebar;
use crate::components::product_modal::ProductModal;
use crate::components::setup::SetupWizard;
use crate::sections::about::AboutSection;
use crate::sections::catalog::CatalogSection;
use crate::sections::cover::CoverSection;

// ============================================================================
// Signal Store
// ============================================================================

/// All reactive state, shared through context.
///
/// `shop` is `None` until the setup wizard finishes.
#[derive(Clone, Copy)]
pub struct Store {
    pub shop: RwSignal<Option<ShopInfo>>,
    pub catalog: RwSignal<Catalog>,
    pub cart: RwSignal<Cart>,
    pub view: RwSignal<ViewState>,
    pub cart_open: RwSignal<bool>,
    pub selected_product: RwSignal<Option<ProductId>>,
    pub subtitle_call: RwSignal<RemoteCall>,
    pub description_call: RwSignal<RemoteCall>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            shop: RwSignal::new(None),
            catalog: RwSignal::new(Catalog::new()),
            cart: RwSignal::new(Cart::new()),
            view: RwSignal::new(ViewState::new()),
            cart_open: RwSignal::new(false),
            selected_product: RwSignal::new(None),
            subtitle_call: RwSignal::new(RemoteCall::new()),
            description_call: RwSignal::new(RemoteCall::new()),
        }
    }

    /// Edit affordances visible right now.
    pub fn editing(&self) -> bool {
        self.view.with(|v| v.effective_editing())
    }

    /// Read a shop field without subscribing (event handlers only).
    pub fn with_shop_untracked<T>(&self, f: impl FnOnce(&ShopInfo) -> T) -> Option<T> {
        self.shop.with_untracked(|shop| shop.as_ref().map(f))
    }

    /// Mutate the shop in place, no-op before setup.
    pub fn update_shop(&self, f: impl FnOnce(&mut ShopInfo)) {
        self.shop.update(|shop| {
            if let Some(shop) = shop.as_mut() {
                f(shop);
            }
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}

// ============================================================================
// Print / Export Flow
// ============================================================================

/// Switch to the stacked layout, wait for it to settle, run the side
/// effect, then restore the paged layout.
pub fn start_export(store: Store, kind: ExportKind) {
    let mut begun = Ok(());
    store.view.update(|v| begun = v.print_flow.begin(kind));
    if begun.is_err() {
        return;
    }

    collab::run_after(kind.settle_delay_ms(), move || {
        let mut settled = None;
        store.view.update(|v| settled = v.print_flow.settled().ok());
        let Some(kind) = settled else {
            return;
        };

        let opened = match kind {
            ExportKind::Print => collab::trigger_print(),
            ExportKind::Pdf => {
                // The document title seeds the save-as-PDF file name.
                let previous = collab::document_title();
                if let Some(name) = store.with_shop_untracked(|s| s.name.clone()) {
                    collab::set_document_title(&pdf_file_name(&name));
                }
                let opened = collab::trigger_print();
                if let Some(previous) = previous {
                    collab::set_document_title(&previous);
                }
                opened
            }
        };
        if !opened {
            collab::alert(collab::export_failure_message(kind));
        }

        store.view.update(|v| {
            let _ = v.print_flow.finish();
        });
    });
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new();
    provide_context(store);
    provide_context::<SuggestionService>(Arc::new(NoSuggestions));

    view! {
        {move || match store.shop.get() {
            None => view! { <SetupWizard/> }.into_any(),
            Some(shop) => {
                let (handwriting, body) = shop.font_theme.font_classes();
                let theme = format!(
                    "storefront theme-{} {} {}",
                    shop.theme_color.as_str(),
                    handwriting,
                    body,
                );
                view! {
                    <div class=theme>
                        <TopBar/>
                        <PageView/>
                        <PagerBar/>
                        <SiteFooter/>
                        <CartSidebar/>
                        <ProductModal/>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

// ============================================================================
// Chrome
// ============================================================================

#[component]
fn TopBar() -> impl IntoView {
    let store = use_store();
    let printing = move || store.view.with(|v| v.print_flow.is_active());
    let cart_count = move || store.cart.with(|c| c.item_count());

    view! {
        <header class="top-bar no-print">
            <button
                class="btn"
                on:click=move |_| store.view.update(|v| v.toggle_editing())
            >
                {move || {
                    if store.view.with(|v| v.editing) {
                        "Concluir edição"
                    } else {
                        "Editar"
                    }
                }}
            </button>

            {move || store.editing().then(|| view! { <ThemePicker/> })}

            <button
                class="btn"
                disabled=printing
                on:click=move |_| start_export(store, ExportKind::Print)
            >
                "Imprimir"
            </button>
            <button
                class="btn"
                disabled=printing
                on:click=move |_| start_export(store, ExportKind::Pdf)
            >
                "Salvar PDF"
            </button>

            <button
                class="btn cart-button"
                on:click=move |_| store.cart_open.update(|open| *open = !*open)
            >
                "Sacola (" {move || cart_count().to_string()} ")"
            </button>
        </header>
    }
}

#[component]
fn ThemePicker() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="theme-picker">
            {ThemeColor::all()
                .into_iter()
                .map(|color| {
                    view! {
                        <button
                            class=format!("swatch swatch-{}", color.as_str())
                            title=color.display_name()
                            on:click=move |_| {
                                store.update_shop(|shop| shop.theme_color = color)
                            }
                        >
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <select on:change=move |ev| {
                if let Some(font) = FontTheme::parse(&event_target_value(&ev)) {
                    store.update_shop(|shop| shop.font_theme = font);
                }
            }>
                {FontTheme::all()
                    .into_iter()
                    .map(|font| {
                        let selected = move || {
                            store
                                .shop
                                .with(|s| {
                                    s.as_ref().map(|s| s.font_theme) == Some(font)
                                })
                        };
                        view! {
                            <option value=font.as_str() selected=selected>
                                {font.display_name()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

#[component]
fn PagerBar() -> impl IntoView {
    let store = use_store();
    let paged = move || store.view.with(|v| v.layout() == Layout::Paged);

    view! {
        {move || {
            paged()
                .then(|| {
                    view! {
                        <nav class="pager no-print">
                            <button
                                class="btn"
                                disabled=move || store.view.with(|v| v.page == Page::Cover)
                                on:click=move |_| store.view.update(|v| v.go_prev())
                            >
                                "Anterior"
                            </button>
                            <span>{move || store.view.with(|v| v.page.label())}</span>
                            <button
                                class="btn"
                                disabled=move || store.view.with(|v| v.page == Page::Catalog)
                                on:click=move |_| store.view.update(|v| v.go_next())
                            >
                                "Próxima"
                            </button>
                        </nav>
                    }
                })
        }}
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let store = use_store();

    view! {
        <footer class="site-footer">
            {move || {
                store
                    .shop
                    .with(|shop| {
                        shop.as_ref()
                            .map(|shop| {
                                shop.contacts
                                    .iter()
                                    .map(|contact| {
                                        view! {
                                            <span class="contact">
                                                <strong>
                                                    {contact.kind.display_name()} ": "
                                                </strong>
                                                {contact.value.clone()}
                                            </span>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    })
            }}
            <p class="copyright">
                {move || {
                    store
                        .shop
                        .with(|s| {
                            s.as_ref()
                                .map(|s| format!("© {}. Feito com carinho.", s.name))
                        })
                }}
            </p>
        </footer>
    }
}

// ============================================================================
// Page Layout
// ============================================================================

/// One page at a time, or all pages stacked for print capture.
#[component]
fn PageView() -> impl IntoView {
    let store = use_store();

    view! {
        {move || match store.view.with(|v| v.layout()) {
            Layout::Paged => {
                match store.view.with(|v| v.page) {
                    Page::Cover => view! { <CoverSection/> }.into_any(),
                    Page::About => view! { <AboutSection/> }.into_any(),
                    Page::Catalog => view! { <CatalogSection/> }.into_any(),
                }
            }
            Layout::PrintStack => {
                view! {
                    <div class="print-stack">
                        <CoverSection/>
                        <AboutSection/>
                        <CatalogSection/>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
