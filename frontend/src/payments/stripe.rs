use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Object, Promise, Reflect};

use crate::checkout::{CheckoutError, PaymentRedirect};
use crate::config;

#[wasm_bindgen]
extern "C" {
    /// Instance returned by Stripe.js's global `Stripe(publishableKey)`.
    #[derive(Clone)]
    pub type StripeJs;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe_js(publishable_key: &str) -> Result<StripeJs, JsValue>;

    #[wasm_bindgen(method, catch, js_name = redirectToCheckout)]
    fn redirect_to_checkout(this: &StripeJs, options: &JsValue) -> Result<Promise, JsValue>;
}

thread_local! {
    static STRIPE: OnceCell<StripeJs> = OnceCell::new();
}

/// Loads the Stripe client once per page and reuses it afterwards.
fn get_stripe() -> Result<StripeJs, CheckoutError> {
    STRIPE.with(|cell| {
        cell.get_or_try_init(|| {
            let key = config::stripe_publishable_key().ok_or_else(|| {
                CheckoutError::PaymentsUnavailable("no STRIPE_PUBLISHABLE_KEY in this build".to_string())
            })?;
            stripe_js(key).map_err(|e| CheckoutError::PaymentsUnavailable(js_message(&e)))
        })
        .cloned()
    })
}

fn js_message(value: &JsValue) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// `result.error.message` from a `redirectToCheckout` result, if Stripe reported one.
fn redirect_error(result: &JsValue) -> Option<String> {
    let error = Reflect::get(result, &JsValue::from_str("error")).ok()?;
    if error.is_undefined() || error.is_null() {
        return None;
    }
    Some(js_message(&error))
}

/// Hands checkout sessions to Stripe's hosted checkout page.
pub struct StripeCheckout;

#[async_trait(?Send)]
impl PaymentRedirect for StripeCheckout {
    async fn redirect_to_checkout(&self, session_id: &str) -> Result<(), CheckoutError> {
        let stripe = get_stripe()?;
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("sessionId"), &JsValue::from_str(session_id))
            .map_err(|e| CheckoutError::PaymentsUnavailable(js_message(&e)))?;

        let promise = stripe
            .redirect_to_checkout(&options)
            .map_err(|e| CheckoutError::Redirect { message: js_message(&e) })?;
        let result = JsFuture::from(promise)
            .await
            .map_err(|e| CheckoutError::Redirect { message: js_message(&e) })?;

        match redirect_error(&result) {
            Some(message) => Err(CheckoutError::Redirect { message }),
            None => Ok(()),
        }
    }
}
