use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="container">
                <h2 class="brand">{ "Smart Learning" }</h2>
                <div class="nav-links">
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::About}>{ "About" }</Link<Route>>
                    <Link<Route> to={Route::Courses}>{ "Courses" }</Link<Route>>
                    <Link<Route> to={Route::Contact}>{ "Contact" }</Link<Route>>
                    <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                    <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
                </div>
            </div>
        </nav>
    }
}
