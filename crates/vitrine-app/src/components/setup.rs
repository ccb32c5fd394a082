//! First-run setup wizard.

use leptos::prelude::*;
use vitrine_studio::prelude::*;

use crate::app::use_store;

#[component]
pub fn SetupWizard() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(SetupForm::new());

    let submit = move |_| {
        let form = form.get_untracked();
        if !form.is_submittable() {
            return;
        }
        let (info, catalog) = form.apply();
        store.catalog.set(catalog);
        store.shop.set(Some(info));
    };

    view! {
        <div class="setup-wizard">
            <h1>"Monte sua vitrine"</h1>
            <p>"Dê um nome à sua loja, escolha uma cor e comece a vender."</p>

            <div class="examples">
                {SETUP_EXAMPLES
                    .iter()
                    .map(|example| {
                        let example = *example;
                        view! {
                            <button
                                class="btn btn-example"
                                on:click=move |_| {
                                    form.update(|f| f.apply_example(&example))
                                }
                            >
                                {example.store_name}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <label>
                "Nome da loja"
                <input
                    type="text"
                    placeholder="Ex.: Sonhos de Papel"
                    prop:value=move || form.with(|f| f.store_name.clone())
                    on:input=move |ev| {
                        form.update(|f| f.store_name = event_target_value(&ev))
                    }
                />
            </label>

            <label>
                "WhatsApp (opcional)"
                <input
                    type="tel"
                    placeholder="(11) 99999-9999"
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| {
                        form.update(|f| f.phone = event_target_value(&ev))
                    }
                />
            </label>

            <div class="theme-choice">
                {ThemeColor::all()
                    .into_iter()
                    .map(|color| {
                        let active = move || form.with(|f| f.theme == Some(color));
                        view! {
                            <button
                                class=move || {
                                    format!(
                                        "swatch swatch-{}{}",
                                        color.as_str(),
                                        if active() { " active" } else { "" },
                                    )
                                }
                                title=color.display_name()
                                on:click=move |_| {
                                    form.update(|f| f.theme = Some(color))
                                }
                            >
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <button
                class="btn btn-primary"
                disabled=move || form.with(|f| !f.is_submittable())
                on:click=submit
            >
                "Criar vitrine"
            </button>
        </div>
    }
}
