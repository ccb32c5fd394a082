//! Client-side Leptos shell for the Vitrine storefront builder.
//!
//! The crate is a thin rendering layer: all domain logic lives in
//! `vitrine-commerce` and `vitrine-studio`. Components read and write
//! those types through reactive signals; browser side effects (file
//! reads, new tabs, printing, timers) are isolated in [`collab`].

pub mod app;
pub mod collab;
pub mod components;
pub mod sections;
