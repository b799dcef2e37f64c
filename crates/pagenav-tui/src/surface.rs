//! Terminal-side surface for the pagination control.

use pagenav_core::{PageSurface, PageView};

/// Holds the view the pager bar draws.
///
/// The controller mounts into this surface on every render; the drawing
/// code reads it back on the next frame.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    mounted: Option<PageView>,
    mounts: u64,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted view, if the control has not been torn down.
    pub fn view(&self) -> Option<&PageView> {
        self.mounted.as_ref()
    }

    /// Number of times a view has been mounted.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }
}

impl PageSurface for TerminalSurface {
    fn mount(&mut self, view: &PageView) {
        self.mounted = Some(view.clone());
        self.mounts += 1;
    }

    fn unmount(&mut self) {
        self.mounted = None;
    }
}
