use yew::prelude::*;
use yew_router::prelude::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to Lock-In"}</Link<Route>>
        </div>
    }
}
