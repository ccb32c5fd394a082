//! Authoring and view state for the Vitrine storefront builder.
//!
//! Everything here is UI-framework agnostic: shop metadata, theme
//! tokens, page/print state machines, remote suggestion tracking, and
//! the first-run setup wizard. The app crate wires these to signals
//! and browser side effects.

pub mod error;
pub mod export;
pub mod info;
pub mod remote;
pub mod setup;
pub mod theme;
pub mod view;

pub use error::StudioError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StudioError;
    pub use crate::export::pdf_file_name;
    pub use crate::info::ShopInfo;
    pub use crate::remote::{description_prompt, subtitle_prompt, CallState, RemoteCall};
    pub use crate::setup::{SetupExample, SetupForm, SETUP_EXAMPLES};
    pub use crate::theme::{FontTheme, ThemeColor};
    pub use crate::view::{
        ExportKind, Layout, Page, PrintFlow, ViewState, EXPORT_SETTLE_DELAY_MS,
        PRINT_SETTLE_DELAY_MS,
    };
}
