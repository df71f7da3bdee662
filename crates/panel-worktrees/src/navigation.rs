//! Entering a worktree.

use arbor_core::{NavigationHost, PanelError, Worktree};

/// Switch the active repository to `item`, remembering where we came from.
///
/// The caller's location is resolved first; if that fails nothing is pushed
/// and no switch happens. A failed push also prevents the switch, and a
/// failed switch takes the pushed location back off the stack.
pub fn enter<H>(host: &mut H, item: &Worktree) -> Result<(), PanelError>
where
    H: NavigationHost + ?Sized,
{
    let location = host
        .current_location()
        .map_err(PanelError::NavigationFailure)?;
    host.push(location).map_err(PanelError::NavigationFailure)?;
    if let Err(e) = host.switch_to(item.path(), true) {
        host.pop();
        return Err(PanelError::NavigationFailure(e));
    }

    log::info!("Entered worktree {}", item.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, RecordingHost};
    use std::path::PathBuf;

    #[test]
    fn test_enter_pushes_then_switches_once() {
        let mut host = RecordingHost::new();
        let item = Worktree::new("feature", "/worktrees/feature");

        enter(&mut host, &item).unwrap();

        assert_eq!(
            host.calls,
            vec![
                Call::Push(PathBuf::from("/repo")),
                Call::SwitchTo(PathBuf::from("/worktrees/feature"), true),
            ]
        );
    }

    #[test]
    fn test_unresolvable_location_aborts() {
        let mut host = RecordingHost::new();
        host.location = None;

        let err = enter(&mut host, &Worktree::new("feature", "/wt")).unwrap_err();

        assert!(matches!(err, PanelError::NavigationFailure(_)));
        assert_eq!(err.to_string(), "current directory is gone");
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_push_failure_prevents_switch() {
        let mut host = RecordingHost::new();
        host.fail_push = true;

        let err = enter(&mut host, &Worktree::new("feature", "/wt")).unwrap_err();

        assert!(matches!(err, PanelError::NavigationFailure(_)));
        assert_eq!(host.count(|c| matches!(c, Call::SwitchTo(..))), 0);
    }

    #[test]
    fn test_switch_failure_unwinds_push() {
        let mut host = RecordingHost::new();
        host.fail_switch = true;

        let err = enter(&mut host, &Worktree::new("feature", "/wt")).unwrap_err();

        assert_eq!(err.to_string(), "cannot enter /wt");
        assert_eq!(
            host.calls,
            vec![Call::Push(PathBuf::from("/repo")), Call::Pop]
        );
        assert!(host.stack.is_empty());
    }
}
