use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "404 - Page Not Found" }</h2>
                <p>{ "That page isn't part of Smart Learning. One of our courses might be what you were after." }</p>
                <Link<Route> to={Route::Courses}>
                    <button class="btn btn-secondary">{ "Browse Courses" }</button>
                </Link<Route>>
                { " " }
                <Link<Route> to={Route::Home}>
                    <button class="btn btn-primary">{ "Go Home" }</button>
                </Link<Route>>
            </div>
        </div>
    }
}
