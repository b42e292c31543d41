use catalog_host::{mount_subsystem, Capability, PageConfig, PageSubsystem};
use catalog_host_web::{host_strategy_name, load_page_config};
use leptos::*;

/// Reads the embedded page configuration, falling back to defaults when it is malformed.
pub fn resolve_page_config() -> PageConfig {
    match load_page_config() {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("{err}; using default page config");
            PageConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Mount outcome of each subsystem, in mount order.
pub struct MountReport {
    entries: Vec<(&'static str, Capability)>,
}

impl MountReport {
    /// Mounts `subsystem` and records whether its root was present.
    pub fn mount<S: PageSubsystem + ?Sized>(&mut self, subsystem: &S) -> Capability {
        let capability = mount_subsystem(subsystem);
        if !capability.is_present() {
            logging::log!("{}: root element absent, skipped", subsystem.name());
        }
        self.entries.push((subsystem.name(), capability));
        capability
    }

    pub fn present(&self) -> Vec<&'static str> {
        self.names_with(Capability::Present)
    }

    pub fn absent(&self) -> Vec<&'static str> {
        self.names_with(Capability::Absent)
    }

    fn names_with(&self, wanted: Capability) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(_, capability)| *capability == wanted)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Installs every page enhancement whose root element exists on the current page.
///
/// Renders nothing; it exists to give the subsystems a reactive owner.
#[component]
pub fn CatalogEnhancements() -> impl IntoView {
    let config = resolve_page_config();
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_mut))]
    let mut report = MountReport::default();

    #[cfg(target_arch = "wasm32")]
    {
        use page_enhancements::{GridFilterSubsystem, RevealSubsystem, UploadPreviewSubsystem};
        use quick_view::QuickViewSubsystem;

        report.mount(&RevealSubsystem::new(config.reveal));
        report.mount(&GridFilterSubsystem::new(config.grid_filter));
        report.mount(&UploadPreviewSubsystem::new(config.upload));
        report.mount(&QuickViewSubsystem::new(config.quick_view));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;

    logging::log!(
        "catalog enhancements ({} host): mounted {:?}",
        host_strategy_name(),
        report.present()
    );
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    struct FakeSubsystem {
        name: &'static str,
        present: bool,
        installed: Cell<bool>,
    }

    impl FakeSubsystem {
        fn new(name: &'static str, present: bool) -> Self {
            Self {
                name,
                present,
                installed: Cell::new(false),
            }
        }
    }

    impl PageSubsystem for FakeSubsystem {
        type Root = ();

        fn name(&self) -> &'static str {
            self.name
        }

        fn probe(&self) -> Option<()> {
            self.present.then_some(())
        }

        fn install(&self, _root: ()) {
            self.installed.set(true);
        }
    }

    #[test]
    fn report_separates_present_and_absent_subsystems() {
        let reveal = FakeSubsystem::new("reveal", true);
        let upload = FakeSubsystem::new("upload-preview", false);
        let quick_view = FakeSubsystem::new("quick-view", true);

        let mut report = MountReport::default();
        report.mount(&reveal);
        assert_eq!(report.mount(&upload), Capability::Absent);
        report.mount(&quick_view);

        assert_eq!(report.present(), vec!["reveal", "quick-view"]);
        assert_eq!(report.absent(), vec!["upload-preview"]);
        assert!(reveal.installed.get());
        assert!(!upload.installed.get());
    }

    #[test]
    fn native_build_resolves_default_config() {
        assert_eq!(resolve_page_config(), PageConfig::default());
    }
}
