//! Selection guard for item-scoped handlers.

use arbor_core::{ListContext, PanelError, Worktree};

/// Run `handler` on the current selection.
///
/// With nothing selected this returns `Ok(())` without calling anything
/// else on the host. Otherwise the handler's result is returned as is.
pub fn guarded<H, F>(host: &mut H, handler: F) -> Result<(), PanelError>
where
    H: ListContext + ?Sized,
    F: FnOnce(&mut H, Worktree) -> Result<(), PanelError>,
{
    match host.selected() {
        Some(item) => handler(host, item),
        None => Ok(()),
    }
}
