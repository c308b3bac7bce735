use yew::prelude::*;

#[function_component(Cohort)]
pub fn cohort() -> Html {
    html! {
        <section id="cohort" class="cohort-section">
            <div class="cohort-container">
                <div class="cohort-header">
                    <div class="section-badge">{"Our next Cohort Classes"}</div>
                </div>

                <div class="cohort-content">
                    <div class="cohort-image">
                        <img src="/images/cohort.jpg" alt="Cohort Classes" loading="lazy" />
                    </div>

                    <div class="cohort-info">
                        <p class="cohort-description primary">
                            {"Every three months, Pinkline Academy brings together a vibrant and \
                              talented group of young creatives and tech enthusiasts for an intensive \
                              learning experience that transforms careers and communities. This image \
                              captures a moment from one of our recent Cohort Classes, where over 70 \
                              passionate learners gathered in a fully immersive studio environment to \
                              gain real-world skills in digital media, tech entrepreneurship, branding, \
                              and creative strategy."}
                        </p>

                        <p class="cohort-description secondary">
                            {"Our quarterly cohort program is more than just a class — it's a \
                              collaborative hub of ideas, mentorship, and growth. With hands-on \
                              training, live project sessions, and industry-led facilitators, students \
                              leave empowered and ready to shape the future. Stay tuned for the next \
                              cohort. At Pinkline, we don't just teach — we inspire."}
                        </p>

                        <button class="register-btn">{"Register Now"}</button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .cohort-section {
                        padding: 6rem 2rem;
                        background: #120a16;
                    }

                    .cohort-container {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .cohort-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .cohort-content {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }

                    .cohort-image img {
                        width: 420px;
                        border-radius: 1rem;
                    }

                    .cohort-description {
                        color: #d9cdd6;
                        margin-bottom: 1.25rem;
                    }

                    .cohort-description.secondary {
                        color: #b9aab5;
                        font-size: 0.98rem;
                    }

                    .register-btn {
                        padding: 0.8rem 2.2rem;
                        border-radius: 2rem;
                        border: none;
                        background: #E91E8C;
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }

                    .register-btn:hover {
                        background: #FF5FA2;
                    }

                    @media (max-width: 900px) {
                        .cohort-content {
                            flex-direction: column;
                        }

                        .cohort-image img {
                            width: 100%;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
