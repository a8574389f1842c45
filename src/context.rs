//! Page Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Reload trigger for one page's list
#[derive(Clone, Copy)]
pub struct Reloader {
    /// Bumped after every accepted mutation - read
    pub version: ReadSignal<u32>,
    /// Bumped after every accepted mutation - write
    set_version: WriteSignal<u32>,
}

impl Reloader {
    pub fn new() -> Self {
        let (version, set_version) = signal(0u32);
        Self { version, set_version }
    }

    /// Provide a fresh reloader to the page's children
    pub fn provide() -> Self {
        let reloader = Self::new();
        provide_context(reloader);
        reloader
    }

    /// Trigger a reload of the list
    pub fn reload(&self) {
        self.set_version.update(|v| *v += 1);
    }

    /// Subscribe the calling effect to reloads
    pub fn track(&self) -> u32 {
        self.version.get()
    }
}

pub fn use_reloader() -> Reloader {
    use_context::<Reloader>().expect("Reloader should be provided by the page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_bumps_version_once() {
        let owner = Owner::new();
        owner.set();
        let reloader = Reloader::new();
        assert_eq!(reloader.version.get_untracked(), 0);
        reloader.reload();
        assert_eq!(reloader.version.get_untracked(), 1);
    }
}
