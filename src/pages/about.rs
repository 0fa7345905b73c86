//! About page: mission, values, team, and history timeline.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-page__mission">
                <h1>"About Us"</h1>
                <p>
                    "Excellence Institute trains career-changers and graduates in the skills employers hire for, pairing every course with mentoring and placement support."
                </p>
            </section>

            <section class="about-page__values">
                <h2>"Our Values"</h2>
                <div class="about-page__value-grid">
                    {content::VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <div class="value-card">
                                    <span class="value-card__icon">{value.icon}</span>
                                    <h3 class="value-card__title">{value.title}</h3>
                                    <p class="value-card__description">{value.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="about-page__timeline">
                <h2>"Our Journey"</h2>
                <ol class="timeline">
                    {content::TIMELINE
                        .iter()
                        .map(|event| {
                            view! {
                                <li class="timeline__event">
                                    <span class="timeline__year">{event.year}</span>
                                    <div class="timeline__body">
                                        <h3 class="timeline__title">{event.title}</h3>
                                        <p class="timeline__description">{event.description}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </section>

            <section class="about-page__team">
                <h2>"Meet the Team"</h2>
                <div class="about-page__team-grid">
                    {content::TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="team-card">
                                    <h3 class="team-card__name">{member.name}</h3>
                                    <span class="team-card__role">{member.role}</span>
                                    <p class="team-card__bio">{member.bio}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
