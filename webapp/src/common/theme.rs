use dioxus::prelude::*;
use tracing::{debug, warn};

use site::{
    config::ThemeConfig,
    theme::{ThemePreference, ThemeSetting},
};

use crate::common::storage::LocalThemeStore;

// class on the <html> element that the stylesheet keys dark mode off
const DARK_CLASS: &str = "dark";

// theme context
//
// the one piece of page-wide state.  it is provided once at the root and injected
// wherever a component needs to branch on the theme; only the nav bar toggle writes it
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    setting: Signal<ThemeSetting<LocalThemeStore>>,
}

impl ThemeContext {
    pub fn current(&self) -> ThemePreference {
        self.setting.read().current()
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let theme = self.setting.write().toggle();
        apply_presentation(theme);
        theme
    }
}

// reads storage once and installs the context; call from the root component
pub fn provide_theme(config: &ThemeConfig) -> ThemeContext {
    let key = config.storage_key.clone();

    use_context_provider(move || {
        let setting = ThemeSetting::load(LocalThemeStore, &key);
        apply_presentation(setting.current());

        ThemeContext {
            setting: Signal::new(setting),
        }
    })
}

pub fn use_theme() -> ThemePreference {
    use_context::<ThemeContext>().current()
}

fn apply_presentation(theme: ThemePreference) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    let Some(root) = root else {
        warn!("no document element, theme class not applied");
        return;
    };

    let result = if theme.is_dark() {
        root.class_list().add_1(DARK_CLASS)
    } else {
        root.class_list().remove_1(DARK_CLASS)
    };

    match result {
        Ok(()) => debug!(%theme, "applied theme"),
        Err(err) => warn!("failed to apply theme class: {err:?}"),
    }
}
