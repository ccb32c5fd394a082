//! View and mode state: page navigation, edit mode, print flow.

use crate::error::StudioError;
use serde::{Deserialize, Serialize};

/// Milliseconds to let the DOM settle before opening the print dialog.
pub const PRINT_SETTLE_DELAY_MS: u32 = 500;
/// Milliseconds to let the DOM settle before a PDF capture.
pub const EXPORT_SETTLE_DELAY_MS: u32 = 1_000;

/// The three storefront pages, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Cover,
    About,
    Catalog,
}

impl Page {
    /// Zero-based position in reading order.
    pub fn index(&self) -> usize {
        match self {
            Page::Cover => 0,
            Page::About => 1,
            Page::Catalog => 2,
        }
    }

    /// Total number of pages.
    pub const COUNT: usize = 3;

    /// All pages, in reading order.
    pub fn all() -> [Page; Page::COUNT] {
        [Page::Cover, Page::About, Page::Catalog]
    }

    /// Next page, clamped at the last.
    pub fn next(&self) -> Page {
        match self {
            Page::Cover => Page::About,
            Page::About => Page::Catalog,
            Page::Catalog => Page::Catalog,
        }
    }

    /// Previous page, clamped at the first.
    pub fn prev(&self) -> Page {
        match self {
            Page::Cover => Page::Cover,
            Page::About => Page::Cover,
            Page::Catalog => Page::About,
        }
    }

    /// Pager label, e.g. "Página 1 de 3".
    pub fn label(&self) -> String {
        format!("Página {} de {}", self.index() + 1, Page::COUNT)
    }
}

/// How pages are laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One page at a time with pager controls.
    #[default]
    Paged,
    /// All pages stacked vertically for print/capture.
    PrintStack,
}

/// What a print-stack pass is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Native print dialog.
    Print,
    /// PDF capture of the stacked pages.
    Pdf,
}

impl ExportKind {
    /// How long to let the stacked layout settle before acting.
    pub fn settle_delay_ms(&self) -> u32 {
        match self {
            ExportKind::Print => PRINT_SETTLE_DELAY_MS,
            ExportKind::Pdf => EXPORT_SETTLE_DELAY_MS,
        }
    }
}

/// The print/export flow state machine.
///
/// `Idle -> Settling -> Ready -> Idle`. While non-idle the layout is
/// [`Layout::PrintStack`] and editing is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFlow {
    /// Nothing in progress.
    #[default]
    Idle,
    /// Stacked layout mounted; waiting for the settle delay.
    Settling(ExportKind),
    /// Settle delay elapsed; the side effect may run.
    Ready(ExportKind),
}

impl PrintFlow {
    fn state_name(&self) -> &'static str {
        match self {
            PrintFlow::Idle => "idle",
            PrintFlow::Settling(_) => "settling",
            PrintFlow::Ready(_) => "ready",
        }
    }

    /// Whether a print/export pass is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, PrintFlow::Idle)
    }

    /// Begin a pass. Fails if one is already running.
    pub fn begin(&mut self, kind: ExportKind) -> Result<(), StudioError> {
        match self {
            PrintFlow::Idle => {
                *self = PrintFlow::Settling(kind);
                Ok(())
            }
            _ => Err(StudioError::ExportInFlight),
        }
    }

    /// The settle delay elapsed; move to ready and return the kind.
    pub fn settled(&mut self) -> Result<ExportKind, StudioError> {
        match *self {
            PrintFlow::Settling(kind) => {
                *self = PrintFlow::Ready(kind);
                Ok(kind)
            }
            other => Err(StudioError::InvalidPrintTransition(other.state_name())),
        }
    }

    /// The side effect ran; return to idle.
    pub fn finish(&mut self) -> Result<(), StudioError> {
        match self {
            PrintFlow::Ready(_) => {
                *self = PrintFlow::Idle;
                Ok(())
            }
            other => Err(StudioError::InvalidPrintTransition(other.state_name())),
        }
    }
}

/// The full view/mode state for a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Currently shown page in paged layout.
    pub page: Page,
    /// Whether the owner toggled edit mode on.
    pub editing: bool,
    /// Print/export flow.
    pub print_flow: PrintFlow,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current layout, derived from the print flow.
    pub fn layout(&self) -> Layout {
        if self.print_flow.is_active() {
            Layout::PrintStack
        } else {
            Layout::Paged
        }
    }

    /// Edit affordances render only when editing is on and no
    /// print/export pass is running.
    pub fn effective_editing(&self) -> bool {
        self.editing && !self.print_flow.is_active()
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    pub fn go_next(&mut self) {
        self.page = self.page.next();
    }

    pub fn go_prev(&mut self) {
        self.page = self.page.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_navigation_clamps() {
        let mut view = ViewState::new();
        view.go_prev();
        assert_eq!(view.page, Page::Cover);
        view.go_next();
        view.go_next();
        assert_eq!(view.page, Page::Catalog);
        view.go_next();
        assert_eq!(view.page, Page::Catalog);
    }

    #[test]
    fn test_page_labels() {
        assert_eq!(Page::Cover.label(), "Página 1 de 3");
        assert_eq!(Page::Catalog.label(), "Página 3 de 3");
    }

    #[test]
    fn test_print_flow_happy_path() {
        let mut flow = PrintFlow::default();
        flow.begin(ExportKind::Print).unwrap();
        assert!(flow.is_active());
        assert_eq!(flow.settled().unwrap(), ExportKind::Print);
        flow.finish().unwrap();
        assert_eq!(flow, PrintFlow::Idle);
    }

    #[test]
    fn test_print_flow_rejects_concurrent_begin() {
        let mut flow = PrintFlow::default();
        flow.begin(ExportKind::Pdf).unwrap();
        assert_eq!(
            flow.begin(ExportKind::Print),
            Err(StudioError::ExportInFlight)
        );
    }

    #[test]
    fn test_print_flow_rejects_out_of_order_steps() {
        let mut flow = PrintFlow::default();
        assert!(flow.settled().is_err());
        assert!(flow.finish().is_err());
        flow.begin(ExportKind::Print).unwrap();
        assert!(flow.finish().is_err());
    }

    #[test]
    fn test_editing_suspended_while_printing() {
        let mut view = ViewState::new();
        view.toggle_editing();
        assert!(view.effective_editing());
        assert_eq!(view.layout(), Layout::Paged);

        view.print_flow.begin(ExportKind::Pdf).unwrap();
        assert!(!view.effective_editing());
        assert_eq!(view.layout(), Layout::PrintStack);

        view.print_flow.settled().unwrap();
        view.print_flow.finish().unwrap();
        assert!(view.effective_editing());
    }

    #[test]
    fn test_settle_delays() {
        assert_eq!(ExportKind::Print.settle_delay_ms(), 500);
        assert_eq!(ExportKind::Pdf.settle_delay_ms(), 1_000);
    }
}
