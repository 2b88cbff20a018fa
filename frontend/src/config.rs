//! Build-time settings, baked in by Trunk from the environment.

/// Origin header sent with the checkout-session request.
pub const DEFAULT_CHECKOUT_ORIGIN: &str = "http://localhost:3000";

/// Base URL prepended to API paths. Empty means same origin as the page.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

pub fn checkout_origin() -> &'static str {
    option_env!("CHECKOUT_ORIGIN").unwrap_or(DEFAULT_CHECKOUT_ORIGIN)
}

/// Stripe publishable key, `None` when the build was made without one.
pub fn stripe_publishable_key() -> Option<&'static str> {
    option_env!("STRIPE_PUBLISHABLE_KEY").filter(|key| !key.trim().is_empty())
}
