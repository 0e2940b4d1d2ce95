use std::fmt::Debug;

use gloo_console::error as console_error;

use site::theme::ThemeStore;

// a missing window, a blocked storage area, and an absent one are all just errors
// here.  gloo's LocalStorage::raw() throws on these instead, which would take the
// page down before the theme could fail open
fn available<T, E: Debug>(storage: Result<Option<T>, E>) -> anyhow::Result<T> {
    match storage {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(anyhow::Error::msg("local storage is not available")),
        Err(err) => Err(anyhow::Error::msg(format!(
            "local storage is blocked: {err:?}"
        ))),
    }
}

fn local_storage() -> anyhow::Result<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| anyhow::Error::msg("no window for local storage"))?;

    available(window.local_storage())
}

// local storage backed theme store
//
// values are read and written raw rather than through gloo's json layer, so the
// stored literal is exactly "light" or "dark" and stays readable by older builds
// of the site
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        let fetch = || {
            local_storage()?
                .get_item(key)
                .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
        };

        fetch().map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn save(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let store = || {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
        };

        store().map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_storage_is_used() {
        let storage: Result<Option<u32>, &str> = Ok(Some(7));

        assert_eq!(available(storage).unwrap(), 7);
    }

    #[test]
    fn missing_storage_is_an_error() {
        let storage: Result<Option<u32>, &str> = Ok(None);

        assert!(available(storage).is_err());
    }

    #[test]
    fn blocked_storage_is_an_error() {
        let storage: Result<Option<u32>, &str> = Err("SecurityError");

        let err = available(storage).unwrap_err();
        assert!(err.to_string().contains("SecurityError"));
    }
}
