//! Hosted authentication widgets backed by the Clerk browser SDK (`window.Clerk`).
//!
//! Sign-in and sign-up live on Clerk-hosted pages; this module only reports
//! whether someone is signed in and mounts Clerk's user menu.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::HtmlDivElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type ClerkJs;

    #[wasm_bindgen(method, catch)]
    fn load(this: &ClerkJs) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn user(this: &ClerkJs) -> JsValue;

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &ClerkJs, callback: &Function) -> JsValue;

    #[wasm_bindgen(method, js_name = mountUserButton)]
    fn mount_user_button(this: &ClerkJs, node: &HtmlDivElement);

    #[wasm_bindgen(method, js_name = unmountUserButton)]
    fn unmount_user_button(this: &ClerkJs, node: &HtmlDivElement);
}

fn clerk() -> Option<ClerkJs> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("Clerk")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into())
}

fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    SignedOut,
    SignedIn,
}

impl AuthState {
    pub fn from_user_present(present: bool) -> Self {
        if present {
            AuthState::SignedIn
        } else {
            AuthState::SignedOut
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProps) -> Html {
    let auth = use_state(|| AuthState::Loading);
    {
        let auth = auth.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let Some(sdk) = clerk() else {
                        log::warn!("Clerk SDK not loaded, rendering signed-out view");
                        auth.set(AuthState::SignedOut);
                        return;
                    };
                    match sdk.load() {
                        Ok(promise) => {
                            if let Err(e) = JsFuture::from(promise).await {
                                log::warn!("Clerk failed to load: {:?}", e);
                            }
                        }
                        Err(e) => log::warn!("Clerk load threw: {:?}", e),
                    }
                    auth.set(AuthState::from_user_present(is_present(&sdk.user())));

                    let listener = Closure::<dyn Fn(JsValue)>::new(move |resources: JsValue| {
                        let user = Reflect::get(&resources, &JsValue::from_str("user"))
                            .unwrap_or(JsValue::UNDEFINED);
                        auth.set(AuthState::from_user_present(is_present(&user)));
                    });
                    sdk.add_listener(listener.as_ref().unchecked_ref());
                    // Lives as long as the page; the provider sits at the app root.
                    listener.forget();
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<AuthState> context={*auth}>
            { for props.children.iter() }
        </ContextProvider<AuthState>>
    }
}

#[hook]
fn use_auth_state() -> AuthState {
    use_context::<AuthState>().unwrap_or(AuthState::Loading)
}

/// Renders children only once a user is known to be signed in.
#[function_component(SignedIn)]
pub fn signed_in(props: &AuthProps) -> Html {
    if use_auth_state() == AuthState::SignedIn {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {}
    }
}

/// Renders children only once nobody is known to be signed in.
#[function_component(SignedOut)]
pub fn signed_out(props: &AuthProps) -> Html {
    if use_auth_state() == AuthState::SignedOut {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {}
    }
}

/// Clerk's hosted user menu.
#[function_component(UserButton)]
pub fn user_button() -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = match (clerk(), node.cast::<HtmlDivElement>()) {
                    (Some(sdk), Some(div)) => {
                        sdk.mount_user_button(&div);
                        Some((sdk, div))
                    }
                    _ => None,
                };
                move || {
                    if let Some((sdk, div)) = mounted {
                        sdk.unmount_user_button(&div);
                    }
                }
            },
            (),
        );
    }
    html! { <div class="user-button" ref={node}></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_presence_decides_the_state() {
        assert_eq!(AuthState::from_user_present(true), AuthState::SignedIn);
        assert_eq!(AuthState::from_user_present(false), AuthState::SignedOut);
        assert_ne!(AuthState::Loading, AuthState::SignedOut);
    }
}
