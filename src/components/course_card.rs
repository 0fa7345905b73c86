//! Course card for the homepage popular-courses grid.

use leptos::prelude::*;

use crate::net::types::Course;

/// A popular-course card exposing the two marketing actions.
#[component]
pub fn CourseCard(
    course: Course,
    on_learn_more: Callback<Course>,
    on_enroll: Callback<Course>,
) -> impl IntoView {
    let learn_more_course = course.clone();
    let enroll_course = course.clone();

    view! {
        <div class="course-card">
            <span class="course-card__icon">{course.icon}</span>
            <h3 class="course-card__name">{course.name}</h3>
            <p class="course-card__description">{course.short_description}</p>
            <div class="course-card__meta">
                <span class="course-card__duration">{course.duration}</span>
                <span class="course-card__level">{course.level}</span>
            </div>
            <div class="course-card__actions">
                <button class="btn" on:click=move |_| on_learn_more.run(learn_more_course.clone())>
                    "Learn More"
                </button>
                <button
                    class="btn btn--primary"
                    on:click=move |_| on_enroll.run(enroll_course.clone())
                >
                    "Enroll Now"
                </button>
            </div>
        </div>
    }
}
