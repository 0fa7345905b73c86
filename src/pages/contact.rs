//! Contact page: the navigation target carried by the marketing actions.
//!
//! Reads the `course` and `action` query parameters and reflects the
//! inquiry in a banner; the institute's contact details render below.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::InstituteInfo;

/// Banner headline for the inquiry the visitor arrived with.
fn inquiry_banner(action: Option<&str>) -> &'static str {
    match action {
        Some("enroll") => "Enrollment",
        Some("learn-more") => "Course inquiry",
        _ => "Get in touch",
    }
}

/// One-line description under the banner.
fn inquiry_detail(action: Option<&str>, course: Option<&str>) -> String {
    match (action, course) {
        (Some("enroll"), Some(course)) => {
            format!("You are enrolling in {course}. Our counsellors will confirm your batch.")
        }
        (Some("learn-more"), Some(course)) => {
            format!("Ask us anything about {course}.")
        }
        _ => "Questions about courses, batches, or placements? Reach out.".to_owned(),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let query = use_query_map();
    let info = InstituteInfo::default();

    let banner = move || query.with(|params| inquiry_banner(params.get("action").as_deref()));
    let detail = move || {
        query.with(|params| {
            inquiry_detail(params.get("action").as_deref(), params.get("course").as_deref())
        })
    };

    view! {
        <div class="contact-page">
            <section class="contact-page__banner">
                <h1>{banner}</h1>
                <p class="contact-page__detail">{detail}</p>
            </section>

            <section class="contact-page__details">
                <h2>"Contact Details"</h2>
                <p class="contact-page__line">{info.display_email().to_owned()}</p>
                <p class="contact-page__line">{info.display_phone().to_owned()}</p>
                <p class="contact-page__line">{info.display_address().to_owned()}</p>
            </section>
        </div>
    }
}
