use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="container">
            <h2>{ "About Us" }</h2>
            <p>
                { "We provide high-quality online education with expert instructors. \
                   Our mission is to make learning accessible and affordable." }
            </p>
        </div>
    }
}
