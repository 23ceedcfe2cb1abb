use shared::models::Course;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;

    html! {
        <div class="course-card">
            <h3 class="course-title">{ &course.title }</h3>
            <p class="course-description">{ &course.description }</p>
            <p class="course-price">{ &course.price }</p>
            <Link<Route> to={Route::CourseDetails { id: course.id.to_string() }}>
                <button class="btn btn-secondary">{ "View Details" }</button>
            </Link<Route>>
        </div>
    }
}
