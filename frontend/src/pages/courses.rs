use shared::catalog::Catalog;
use yew::prelude::*;

use crate::components::course_card::{CourseCard, CourseCardProps};

/// One set of card props per catalog entry, in catalog order.
fn card_props(catalog: &Catalog) -> Vec<CourseCardProps> {
    catalog
        .courses()
        .iter()
        .map(|course| CourseCardProps {
            course: course.clone(),
        })
        .collect()
}

#[function_component(Courses)]
pub fn courses() -> Html {
    let catalog = Catalog::new();

    html! {
        <div class="container">
            <h2>{ "Our Courses" }</h2>
            <div class="course-grid">
                { for card_props(&catalog).into_iter().map(|props| html! {
                    <CourseCard ..props />
                })}
            </div>
        </div>
    }
}
