//! Thin window wrappers used by the controller and the push client.
//!
//! Requires a browser environment; SSR paths safely no-op so server
//! rendering stays deterministic.

/// Reload the current page. No-op outside the browser.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Navigate the current tab to `url`. No-op outside the browser.
pub fn navigate(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Blocking confirmation dialog. `false` outside the browser.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Collect a `FileList` into a plain vector.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn file_list_to_vec(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}
