use shared::catalog::Catalog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CourseDetailsProps {
    /// Raw path segment; anything non-numeric is a lookup miss.
    pub id: String,
}

#[function_component(CourseDetails)]
pub fn course_details(props: &CourseDetailsProps) -> Html {
    let catalog = Catalog::new();

    match catalog.find_by_segment(&props.id) {
        Some(course) => html! {
            <div class="container course-details">
                <h1>{ &course.title }</h1>
                <p>{ &course.description }</p>
                <p class="course-price">{ format!("Price: {}", course.price) }</p>
                <button class="btn btn-primary">{ "Enroll Now" }</button>
            </div>
        },
        None => {
            tracing::warn!(id = %props.id, "course lookup missed");
            html! {
                <div class="container empty-state">
                    <h2>{ "Course Not Found" }</h2>
                </div>
            }
        }
    }
}
