//! Platform glue: which shell we run in and the share surface it offers.

use crate::core::share::{SharePayload, ShareSurface, ShareError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Public address used for share links outside the browser.
pub const DEFAULT_PUBLIC_URL: &str = "https://flirtquiz.app/";

/// Env var overriding [`DEFAULT_PUBLIC_URL`] (read at runtime, then at build time).
pub const PUBLIC_URL_ENV: &str = "FLIRTQUIZ_PUBLIC_URL";

/// Share surface for the platform this build targets.
#[cfg(target_arch = "wasm32")]
pub fn share_surface(_route: &str) -> BrowserShare {
    BrowserShare
}

/// Share surface for the platform this build targets.
///
/// `route` is the in-app path of the current view; native shells have no page
/// URL, so it is joined onto the configured public URL.
#[cfg(not(target_arch = "wasm32"))]
pub fn share_surface(route: &str) -> NativeShare {
    NativeShare::new(public_url_for(&configured_public_url(), route))
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_public_url() -> String {
    std::env::var(PUBLIC_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| option_env!("FLIRTQUIZ_PUBLIC_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string())
}

/// Join an in-app route onto a public base URL.
pub fn public_url_for(base: &str, route: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let route = route.trim().trim_start_matches('/');
    if route.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{route}")
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserShare;

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{ShareError, SharePayload, ShareSurface};

    /// `navigator.share` / `navigator.clipboard` / `window.location`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserShare;

    impl ShareSurface for BrowserShare {
        fn supports_native_share(&self) -> bool {
            navigator()
                .and_then(|nav| Reflect::get(&nav, &JsValue::from_str("share")).ok())
                .is_some_and(|share| share.is_function())
        }

        async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            let nav = navigator().ok_or(ShareError::Unavailable("navigator"))?;
            let share: Function = Reflect::get(&nav, &JsValue::from_str("share"))
                .ok()
                .and_then(|value| value.dyn_into().ok())
                .ok_or(ShareError::Unavailable("navigator.share"))?;

            let data = Object::new();
            for (key, value) in [
                ("title", payload.title.as_str()),
                ("text", payload.text.as_str()),
                ("url", payload.url.as_str()),
            ] {
                Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                    .map_err(|err| ShareError::Rejected(describe(err)))?;
            }

            let promise: Promise = share
                .call1(&nav, &data)
                .map_err(|err| ShareError::Rejected(describe(err)))?
                .dyn_into()
                .map_err(|_| ShareError::Rejected("share did not return a promise".into()))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| ShareError::Rejected(describe(err)))
        }

        async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
            match write_async_clipboard(text).await {
                Ok(()) => Ok(()),
                Err(err) => {
                    tracing::debug!("async clipboard unavailable ({err}); trying execCommand");
                    copy_with_textarea(text)
                }
            }
        }

        fn current_url(&self) -> String {
            web_sys::window()
                .and_then(|window| window.location().href().ok())
                .unwrap_or_default()
        }
    }

    fn navigator() -> Option<web_sys::Navigator> {
        web_sys::window().map(|window| window.navigator())
    }

    async fn write_async_clipboard(text: &str) -> Result<(), ShareError> {
        let nav = navigator().ok_or(ShareError::Unavailable("navigator"))?;
        let clipboard = Reflect::get(&nav, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|value| value.is_object())
            .ok_or(ShareError::Unavailable("navigator.clipboard"))?;
        let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|value| value.dyn_into().ok())
            .ok_or(ShareError::Unavailable("clipboard.writeText"))?;

        let promise: Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|err| ShareError::Clipboard(describe(err)))?
            .dyn_into()
            .map_err(|_| ShareError::Clipboard("writeText did not return a promise".into()))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ShareError::Clipboard(describe(err)))
    }

    fn copy_with_textarea(text: &str) -> Result<(), ShareError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ShareError::Unavailable("document"))?;
        let body = document.body().ok_or(ShareError::Unavailable("document body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| ShareError::Clipboard("unable to create textarea".into()))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| ShareError::Clipboard("textarea cast failed".into()))?;
        textarea.set_value(text);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .ok_or(ShareError::Unavailable("html document"))
            .map(|html| html.exec_command("copy").unwrap_or(false));
        textarea.remove();
        let copied = copied?;

        if copied {
            Ok(())
        } else {
            Err(ShareError::Clipboard("copy command blocked".into()))
        }
    }

    /// DOMException name (`AbortError`, …) or whatever string the value carries.
    fn describe(err: JsValue) -> String {
        Reflect::get(&err, &JsValue::from_str("name"))
            .ok()
            .and_then(|name| name.as_string())
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}"))
    }
}

/// Native shells: no share sheet, system clipboard through `arboard`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct NativeShare {
    page_url: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeShare {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ShareSurface for NativeShare {
    fn supports_native_share(&self) -> bool {
        false
    }

    async fn native_share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unavailable("native share"))
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ShareError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ShareError::Clipboard(err.to_string()))
    }

    fn current_url(&self) -> String {
        self.page_url.clone()
    }
}
