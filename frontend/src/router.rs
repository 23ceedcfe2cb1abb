use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    about::About, contact::Contact, course_details::CourseDetails, courses::Courses, home::Home,
    login::Login, not_found::NotFound, register::Register,
};

/// The `id` segment stays a `String` here so that `/courses/abc` still
/// matches and degrades to the "Course Not Found" state inside the page
/// instead of falling through to the 404 route.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/courses")]
    Courses,
    #[at("/courses/:id")]
    CourseDetails { id: String },
    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Courses => html! { <Courses /> },
        Route::CourseDetails { id } => html! { <CourseDetails {id} /> },
        Route::Contact => html! { <Contact /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_static_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/courses"), Some(Route::Courses));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/register"), Some(Route::Register));
    }

    #[test]
    fn extracts_course_id_segment() {
        assert_eq!(
            Route::recognize("/courses/2"),
            Some(Route::CourseDetails { id: "2".to_string() })
        );
        // Non-numeric segments still match; the page decides they are a miss.
        assert_eq!(
            Route::recognize("/courses/abc"),
            Some(Route::CourseDetails { id: "abc".to_string() })
        );
    }

    #[test]
    fn undefined_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Courses.to_path(), "/courses");
        assert_eq!(
            Route::CourseDetails { id: "3".to_string() }.to_path(),
            "/courses/3"
        );
    }
}
