use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="hero">
            <div class="container">
                <h1>{ "Upgrade Your Skills Online 🚀" }</h1>
                <p>{ "Learn from industry experts and boost your career." }</p>
                <Link<Route> to={Route::Courses}>
                    <button class="btn btn-primary">{ "Explore Courses" }</button>
                </Link<Route>>
            </div>
        </div>
    }
}
