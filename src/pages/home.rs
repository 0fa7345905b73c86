//! Homepage: hero, statistics, features, popular courses, testimonials.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::course_card::CourseCard;
use crate::content;
use crate::net::types::{Course, InstituteInfo};
use crate::state::snackbar::{SnackbarRequest, SnackbarState};
use crate::util::query::contact_href;

#[cfg(feature = "hydrate")]
use crate::state::{LoadFailurePolicy, report_load_failure};

/// Metadata load failures fall back to the built-in defaults, silently.
#[cfg(feature = "hydrate")]
const LOAD_FAILURE_POLICY: LoadFailurePolicy = LoadFailurePolicy::Silent;

/// How long the learn-more snackbar stays up, and with it the window in
/// which its "Contact Us" action can still navigate.
const LEARN_MORE_DURATION_MS: u32 = 8000;
/// Enrollment confirmation snackbar duration.
const ENROLL_DURATION_MS: u32 = 3000;
/// Delay before the enroll flow navigates to the contact page.
#[cfg(feature = "hydrate")]
const ENROLL_NAVIGATE_DELAY_MS: u32 = 1000;

/// Learn-more snackbar. Its "Contact Us" action is the only path to the
/// contact page; letting the snackbar expire navigates nowhere.
fn learn_more_request(course: &Course) -> SnackbarRequest {
    SnackbarRequest::info(
        format!("{}: {}", course.name, course.short_description),
        LEARN_MORE_DURATION_MS,
    )
    .with_action("Contact Us", Some(contact_href(&course.name, "learn-more")))
}

/// Enroll snackbar. "OK" only dismisses; the contact navigation is issued
/// separately and does not depend on the snackbar's fate.
fn enroll_request(course: &Course) -> SnackbarRequest {
    SnackbarRequest::success(
        format!("Enrollment process started for {}!", course.name),
        ENROLL_DURATION_MS,
    )
    .with_action("OK", None)
}

/// Homepage component.
///
/// Performs one best-effort read of the institute metadata; on failure the
/// built-in defaults stay in place and nothing is surfaced to the user.
#[component]
pub fn HomePage() -> impl IntoView {
    let snackbar = expect_context::<RwSignal<SnackbarState>>();
    let info = RwSignal::new(InstituteInfo::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_institute_info().await {
            Ok(fetched) => {
                let _ = info.try_set(fetched);
            }
            Err(err) => {
                report_load_failure(LOAD_FAILURE_POLICY, "institute info", &err, snackbar);
            }
        }
    });

    let learn_more = Callback::new(move |course: Course| {
        snackbar.update(|state| {
            state.show(learn_more_request(&course));
        });
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Enroll: confirmation snackbar, then exactly one navigation after a
    // fixed delay, no matter what happens to the snackbar.
    let enroll_now = Callback::new(move |course: Course| {
        snackbar.update(|state| {
            state.show(enroll_request(&course));
        });

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let href = contact_href(&course.name, "enroll");
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    ENROLL_NAVIGATE_DELAY_MS,
                )))
                .await;
                navigate(&href, NavigateOptions::default());
            });
        }
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>{move || info.get().display_name().to_owned()}</h1>
                <p class="home-page__tagline">{move || info.get().display_tagline().to_owned()}</p>
                <a class="btn btn--primary" href="/contact">"Get Started"</a>
            </section>

            <section class="home-page__stats">
                {content::STATISTICS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <span class="stat__value">{stat.value}</span>
                                <span class="stat__label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home-page__features">
                <h2>"Why Choose Us"</h2>
                <div class="home-page__feature-grid">
                    {content::FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature">
                                    <span class="feature__icon">{feature.icon}</span>
                                    <h3 class="feature__title">{feature.title}</h3>
                                    <p class="feature__description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home-page__courses">
                <h2>"Popular Courses"</h2>
                <div class="home-page__course-grid">
                    {content::popular_courses()
                        .into_iter()
                        .map(|course| {
                            view! {
                                <CourseCard
                                    course=course
                                    on_learn_more=learn_more
                                    on_enroll=enroll_now
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home-page__testimonials">
                <h2>"What Our Students Say"</h2>
                {content::TESTIMONIALS
                    .iter()
                    .map(|testimonial| {
                        view! {
                            <blockquote class="testimonial">
                                <p class="testimonial__quote">{testimonial.quote}</p>
                                <footer class="testimonial__author">
                                    {testimonial.author}", "{testimonial.role}
                                </footer>
                            </blockquote>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
