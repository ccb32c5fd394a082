//! Browser side effects and external collaborators.
//!
//! Everything that touches `web_sys` or an external service funnels
//! through here so components stay declarative.

use gloo::timers::callback::Timeout;
use leptos::logging;
use std::sync::Arc;
use vitrine_commerce::CommerceError;
use vitrine_studio::prelude::ExportKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileReader, HtmlInputElement, ProgressEvent};

/// Open a URL in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        logging::warn!("failed to open tab: {err:?}");
    }
}

/// Show a blocking message dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        logging::warn!("alert failed: {err:?}");
    }
}

/// Open the native print dialog. Returns whether it opened.
pub fn trigger_print() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.print() {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("print dialog failed: {err:?}");
            false
        }
    }
}

/// Dialog text when an order deep link cannot be composed.
pub fn order_failure_message(err: &CommerceError) -> &'static str {
    match err {
        CommerceError::MissingWhatsappContact => {
            "Número de WhatsApp não configurado no ateliê."
        }
        CommerceError::EmptyCart => "Sua sacola está vazia.",
        _ => "Não foi possível montar o pedido.",
    }
}

/// Dialog text when a print/export pass cannot open the dialog.
pub fn export_failure_message(kind: ExportKind) -> &'static str {
    match kind {
        ExportKind::Pdf => {
            "Erro ao gerar PDF. Tente usar a opção de Imprimir > Salvar como PDF."
        }
        ExportKind::Print => {
            "Erro ao abrir a impressão. Tente imprimir pelo menu do navegador."
        }
    }
}

/// Current document title, if available.
pub fn document_title() -> Option<String> {
    let document = web_sys::window()?.document()?;
    Some(document.title())
}

/// Set the document title. Browsers use it as the default file name
/// when saving a printed page.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn run_after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// The first file picked in a file-input change event.
pub fn file_from_input(ev: &Event) -> Option<File> {
    let input: HtmlInputElement = ev.target()?.dyn_into().ok()?;
    input.files()?.get(0)
}

/// Read a picked file as a `data:` URL and hand it to `on_done`.
///
/// The data URL is stored directly as an image reference, so uploads
/// survive only for the session.
pub fn read_file_as_data_url(file: File, on_done: impl FnOnce(String) + 'static) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            logging::warn!("file reader unavailable: {err:?}");
            return;
        }
    };

    let reader_for_closure = reader.clone();
    let onload = Closure::once(move |_: ProgressEvent| {
        match reader_for_closure.result() {
            Ok(value) => {
                if let Some(data_url) = value.as_string() {
                    on_done(data_url);
                }
            }
            Err(err) => logging::warn!("file read failed: {err:?}"),
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(err) = reader.read_as_data_url(&file) {
        logging::warn!("file read failed: {err:?}");
    }
}

/// External text-suggestion service seam.
///
/// The shell only knows how to send a prompt and receive text back;
/// prompt composition and call-state tracking live in the studio
/// crate.
pub trait TextSuggestions {
    fn request(&self, prompt: &str, on_done: Box<dyn FnOnce(Result<String, String>)>);
}

/// Shared handle for the suggestion service, stored in context.
pub type SuggestionService = Arc<dyn TextSuggestions + Send + Sync>;

/// Default service when no provider is configured: every request
/// fails with a user-facing message.
pub struct NoSuggestions;

impl TextSuggestions for NoSuggestions {
    fn request(&self, _prompt: &str, on_done: Box<dyn FnOnce(Result<String, String>)>) {
        on_done(Err("Serviço de sugestões não configurado.".to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_missing_whatsapp_contact_gets_a_user_facing_message() {
        let message = order_failure_message(&CommerceError::MissingWhatsappContact);
        assert_eq!(message, "Número de WhatsApp não configurado no ateliê.");
    }

    #[test]
    fn test_export_failure_suggests_a_manual_fallback() {
        assert!(export_failure_message(ExportKind::Pdf).contains("Salvar como PDF"));
        assert!(export_failure_message(ExportKind::Print).contains("navegador"));
    }

    #[test]
    fn test_no_suggestions_always_fails() {
        let outcome = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&outcome);
        NoSuggestions.request(
            "qualquer prompt",
            Box::new(move |result| {
                *sink.borrow_mut() = Some(result);
            }),
        );
        assert!(matches!(&*outcome.borrow(), Some(Err(_))));
    }
}
