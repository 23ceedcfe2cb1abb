use yew::prelude::*;

#[function_component(Register)]
pub fn register() -> Html {
    html! {
        <div class="container">
            <div class="form-card">
                <h2>{ "Register" }</h2>
                <input class="form-input" type="text" placeholder="Full Name" />
                <input class="form-input" type="email" placeholder="Email" />
                <input class="form-input" type="password" placeholder="Password" />
                <button class="btn btn-primary">{ "Register" }</button>
            </div>
        </div>
    }
}
