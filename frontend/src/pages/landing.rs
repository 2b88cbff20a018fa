use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::auth::clerk::{SignedIn, SignedOut, UserButton};
use crate::checkout::CheckoutInitiator;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast::Snackbar;
use crate::content::{self, Plan, FEATURES, PLANS};
use crate::hooks::use_theme::use_theme;
use crate::navigation::{navigate, ExternalRoute};
use crate::payments::stripe::StripeCheckout;
use crate::toast::{ToastAction, ToastState};
use crate::utils::api::HttpCheckoutSessions;

const PAGE_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: var(--background);
        color: var(--text-primary);
        font-family: "Roboto", "Helvetica", "Arial", sans-serif;
        transition: background 0.3s, color 0.3s;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 24px;
    }
    .app-bar {
        display: flex;
        align-items: center;
        gap: 8px;
        min-height: 64px;
        padding: 0 16px;
        background: var(--primary);
        color: #fff;
        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
    }
    .app-bar-title {
        flex-grow: 1;
        margin: 0;
        font-size: 1.25rem;
        font-weight: 500;
    }
    .app-bar button {
        background: none;
        border: none;
        color: inherit;
        font-size: 0.875rem;
        font-weight: 500;
        text-transform: uppercase;
        padding: 6px 8px;
        cursor: pointer;
    }
    .icon-button {
        border-radius: 50%;
        font-size: 1.25rem !important;
    }
    .hero {
        text-align: center;
        margin: 32px 0;
        padding: 48px 16px;
        border-radius: 8px;
        background-size: cover;
        background-position: center;
        color: #fff;
    }
    .hero h1 {
        font-size: 3.75rem;
        font-weight: var(--h2-weight);
        margin: 0 0 0.35em;
    }
    .hero h2 {
        font-size: 1.5rem;
        font-weight: var(--h5-weight);
        margin: 0 0 0.35em;
    }
    .btn {
        display: inline-block;
        margin-top: 16px;
        padding: 6px 16px;
        border-radius: 4px;
        font-size: 0.875rem;
        font-weight: 500;
        text-transform: uppercase;
        text-decoration: none;
        cursor: pointer;
    }
    .btn-contained {
        background: var(--primary);
        border: 1px solid var(--primary);
        color: #fff;
    }
    .btn-outlined {
        background: transparent;
        border: 1px solid var(--primary);
        color: var(--primary);
    }
    .hero .btn-contained {
        margin-right: 16px;
    }
    .section {
        margin: 48px 0;
    }
    .section-title {
        font-size: 2.125rem;
        font-weight: 400;
        margin: 0 0 0.35em;
    }
    .pricing {
        text-align: center;
    }
    .grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 32px;
    }
    .pricing .grid {
        justify-content: center;
    }
    .card {
        background: var(--paper);
        border-radius: 4px;
        box-shadow: 0 2px 1px -1px rgba(0, 0, 0, 0.2), 0 1px 1px rgba(0, 0, 0, 0.14);
        transition: transform 0.3s;
        text-align: left;
    }
    .card:hover {
        transform: scale(1.05);
    }
    .card.highlighted {
        border: 2px solid #3f51b5;
    }
    .card-content {
        padding: 16px;
    }
    .card-content h3 {
        font-size: 1.5rem;
        font-weight: var(--h5-weight);
        margin: 0;
    }
    .card-content .price {
        font-size: 1.25rem;
        font-weight: 500;
    }
    .card-content p {
        color: var(--text-secondary);
        font-size: 0.875rem;
    }
    .card-actions {
        padding: 8px;
    }
    .card-actions .btn {
        margin-top: 0;
    }
    .snackbar {
        position: fixed;
        left: 24px;
        bottom: 24px;
        z-index: 1400;
    }
    .alert {
        display: flex;
        align-items: center;
        gap: 12px;
        width: 100%;
        padding: 6px 16px;
        border-radius: 4px;
    }
    .alert-success {
        background: rgb(237, 247, 237);
        color: rgb(30, 70, 32);
    }
    .alert-close {
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
    }
    @media (max-width: 900px) {
        .grid {
            grid-template-columns: 1fr;
        }
        .hero h1 {
            font-size: 2.5rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: Plan,
    on_choose: Callback<MouseEvent>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    html! {
        <div class={classes!("card", plan.is_highlighted().then_some("highlighted"))}>
            <div class="card-content">
                <h3>{ plan.name }</h3>
                <div class="price">{ plan.price }</div>
                <p>{ plan.feature_summary() }</p>
            </div>
            <div class="card-actions">
                <button class="btn btn-contained" onclick={props.on_choose.clone()}>
                    { plan.cta_label() }
                </button>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme_handle = use_theme();
    let toast = use_reducer(ToastState::default);

    let on_login = Callback::from(|_: MouseEvent| navigate(ExternalRoute::SignIn));
    let on_signup = Callback::from(|_: MouseEvent| navigate(ExternalRoute::SignUp));

    let on_checkout = {
        let dispatcher = toast.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let initiator = CheckoutInitiator::new(HttpCheckoutSessions::from_config(), StripeCheckout);
                initiator
                    .start(|| dispatcher.dispatch(ToastAction::Show))
                    .await;
            });
        })
    };

    let theme = theme_handle.theme;
    let hero_style = format!("background-image: url('{}');", content::HERO_IMAGE);

    html! {
        <div class="landing-page">
            <style>{ theme.css_variables(".landing-page") }</style>
            <style>{ PAGE_CSS }</style>
            <header class="app-bar">
                <h6 class="app-bar-title">{ content::SITE_TITLE }</h6>
                <ThemeToggle mode={theme.mode} on_toggle={theme_handle.toggle.clone()} />
                <SignedOut>
                    <button onclick={on_login}>{"Log in"}</button>
                    <button onclick={on_signup}>{"Sign up"}</button>
                </SignedOut>
                <SignedIn>
                    <UserButton />
                </SignedIn>
            </header>
            <main class="container">
                <section class="hero" style={hero_style}>
                    <h1>{ content::SITE_TITLE }</h1>
                    <h2>{ content::TAGLINE }</h2>
                    <a class="btn btn-contained" href={ExternalRoute::Generate.path()}>{"Get Started"}</a>
                    <button class="btn btn-outlined">{"Learn More"}</button>
                </section>

                <section class="section features">
                    <h2 class="section-title">{"Features"}</h2>
                    <div class="grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="card" key={*feature}>
                                <div class="card-content">
                                    <h3>{ *feature }</h3>
                                    <p>{ content::feature_description(feature) }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="section pricing">
                    <h2 class="section-title">{"Pricing"}</h2>
                    <div class="grid">
                        { for PLANS.iter().map(|plan| html! {
                            <PlanCard key={plan.name} plan={*plan} on_choose={on_checkout.clone()} />
                        }) }
                    </div>
                </section>
            </main>
            <Snackbar toast={toast.clone()} message={content::CHECKOUT_TOAST} />
        </div>
    }
}
