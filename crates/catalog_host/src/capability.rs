//! Optional DOM-rooted capabilities.
//!
//! Each page enhancement depends on a root element that a given page may or may not render. A
//! subsystem is polymorphic over that presence: [`mount_subsystem`] probes once and either
//! installs the subsystem against its root or leaves the page untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of probing a page for a subsystem's root element.
pub enum Capability {
    /// The root was found and the subsystem installed its listeners.
    Present,
    /// The root was absent; the subsystem performed no further work.
    Absent,
}

impl Capability {
    /// Returns `true` when the subsystem was installed.
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// A page enhancement that requires a root element to exist before it does anything.
pub trait PageSubsystem {
    /// Handles resolved by a successful probe.
    type Root;

    /// Stable subsystem name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Performs the single existence check for the subsystem's root element.
    fn probe(&self) -> Option<Self::Root>;

    /// Resolves remaining handles and registers listeners against a probed root.
    fn install(&self, root: Self::Root);
}

/// Probes `subsystem` and installs it only when its root is present.
pub fn mount_subsystem<S: PageSubsystem + ?Sized>(subsystem: &S) -> Capability {
    match subsystem.probe() {
        Some(root) => {
            subsystem.install(root);
            Capability::Present
        }
        None => Capability::Absent,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct CountingSubsystem {
        root_present: bool,
        probes: Cell<u32>,
        installs: Cell<u32>,
    }

    impl PageSubsystem for CountingSubsystem {
        type Root = ();

        fn name(&self) -> &'static str {
            "counting"
        }

        fn probe(&self) -> Option<()> {
            self.probes.set(self.probes.get() + 1);
            self.root_present.then_some(())
        }

        fn install(&self, _root: ()) {
            self.installs.set(self.installs.get() + 1);
        }
    }

    #[test]
    fn absent_root_stops_after_single_probe() {
        let subsystem = CountingSubsystem::default();
        assert_eq!(mount_subsystem(&subsystem), Capability::Absent);
        assert_eq!(subsystem.probes.get(), 1);
        assert_eq!(subsystem.installs.get(), 0);
    }

    #[test]
    fn present_root_installs_once() {
        let subsystem = CountingSubsystem {
            root_present: true,
            ..CountingSubsystem::default()
        };
        assert!(mount_subsystem(&subsystem).is_present());
        assert_eq!(subsystem.probes.get(), 1);
        assert_eq!(subsystem.installs.get(), 1);
    }
}
