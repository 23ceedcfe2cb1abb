use yew::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <div class="container">
            <div class="form-card">
                <h2>{ "Login" }</h2>
                <input class="form-input" type="email" placeholder="Email" />
                <input class="form-input" type="password" placeholder="Password" />
                <button class="btn btn-primary">{ "Login" }</button>
            </div>
        </div>
    }
}
