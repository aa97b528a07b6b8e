//! Browser bindings to the identity provider SDK.
//!
//! The SDK is loaded from a `<script>` tag and hangs itself off
//! `window.Clerk`; these bindings reach it through `js-sys` reflection so the
//! rest of the workspace only sees the [`api::IdentityProvider`] trait. On
//! native targets (tests, SSR tooling) every accessor reports a loaded SDK
//! with nobody signed in.

use api::IdentityProvider;

/// Identity provider backed by the SDK's global JS object.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClerkIdentity;

#[cfg(target_arch = "wasm32")]
mod js {
    use wasm_bindgen::{JsCast, JsValue};

    pub fn clerk() -> Option<JsValue> {
        let window = web_sys::window()?;
        field(window.as_ref(), "Clerk")
    }

    pub fn field(target: &JsValue, name: &str) -> Option<JsValue> {
        let value = js_sys::Reflect::get(target, &JsValue::from_str(name)).ok()?;
        if value.is_undefined() || value.is_null() {
            None
        } else {
            Some(value)
        }
    }

    pub fn call0(target: &JsValue, name: &str) -> Option<JsValue> {
        let function: js_sys::Function = field(target, name)?.dyn_into().ok()?;
        function.call0(target).ok()
    }
}

impl IdentityProvider for ClerkIdentity {
    fn is_loaded(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            js::clerk()
                .and_then(|clerk| js::field(&clerk, "loaded"))
                .and_then(|loaded| loaded.as_bool())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            true
        }
    }

    fn is_signed_in(&self) -> bool {
        self.user_id().is_some()
    }

    fn user_id(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let clerk = js::clerk()?;
            let user = js::field(&clerk, "user")?;
            js::field(&user, "id")?.as_string()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    async fn bearer_token(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let clerk = js::clerk()?;
            let session = js::field(&clerk, "session")?;
            let promise: js_sys::Promise = js::call0(&session, "getToken")?.dyn_into().ok()?;
            let token = wasm_bindgen_futures::JsFuture::from(promise).await.ok()?;
            token.as_string()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

/// Open the identity provider's hosted sign-in dialog.
pub fn open_sign_in() {
    #[cfg(target_arch = "wasm32")]
    {
        match js::clerk() {
            Some(clerk) => {
                let _ = js::call0(&clerk, "openSignIn");
            }
            None => tracing::warn!("identity SDK is not loaded yet"),
        }
    }
}

/// Sign the current user out of the identity provider session.
pub fn sign_out() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(clerk) = js::clerk() {
            let _ = js::call0(&clerk, "signOut");
        }
    }
}
