use yew::prelude::*;

/// Contact form. Submission is intentionally unwired; there is no backend to
/// send anything to.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="container">
            <div class="form-card">
                <h2>{ "Contact Us" }</h2>
                <input class="form-input" type="text" placeholder="Name" />
                <input class="form-input" type="email" placeholder="Email" />
                <textarea class="form-input" placeholder="Message"></textarea>
                <button class="btn btn-primary">{ "Send Message" }</button>
            </div>
        </div>
    }
}
