use yew::prelude::*;

use crate::content;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-container">
                <div class="about-header">
                    <div class="section-badge">{"About Us"}</div>
                </div>

                <div class="about-description">
                    <p>
                        {"Pinkline Network is the umbrella that unifies and represents both Pinkline \
                          Films and Pinkline Academy, serving as the overarching identity under which \
                          the creative, educational, and production arms operate. It provides a "}
                        <span class="highlight">
                            {"consolidated platform for all Pinkline initiatives, ensuring consistency \
                              in brand presence, strategic alignment, and industry impact."}
                        </span>
                    </p>
                </div>

                <div class="programs-section">
                    <div class="section-badge">{"Program & Training"}</div>

                    <div class="programs-grid">
                        { for content::PROGRAMS.iter().map(|program| html! {
                            <div key={program.title} class="program-card">
                                <div class="program-icon">
                                    <img src={program.icon} alt={program.title} />
                                </div>
                                <h4 class="program-title">{ program.title }</h4>
                                <p class="program-description">{ program.description }</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="founder-section">
                    <div class="founder-content">
                        <div class="founder-image">
                            <img src="/images/Aboutimg.png" alt="Director Pink - Founder" />
                        </div>
                        <div class="founder-info">
                            <h3 class="founder-title">
                                {"Founder – Director Pink (Praise Onyeagwalam)"}
                            </h3>
                            <p class="founder-bio">
                                {"Born November 28, 1999, Director Pink rose from church-video editing \
                                  beginnings to becoming one of Afrobeats most sought-after music video \
                                  directors by the age of 25. She launched Pinkline Films, her \
                                  all-female-led video production company, as a platform empowering \
                                  emerging creatives—particularly women in film."}
                            </p>
                            <button class="learn-more-btn">{"Learn More"}</button>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about-section {
                        padding: 6rem 2rem;
                        background: #120a16;
                    }

                    .about-container {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .about-header {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }

                    .about-description {
                        max-width: 820px;
                        margin: 0 auto 4rem;
                        text-align: center;
                        font-size: 1.15rem;
                        color: #d9cdd6;
                    }

                    .about-description .highlight {
                        color: #FF5FA2;
                    }

                    .programs-section {
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .programs-grid {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }

                    .program-card {
                        padding: 2rem 1.5rem;
                        border-radius: 1rem;
                        background: rgba(233, 30, 140, 0.06);
                        border: 1px solid rgba(233, 30, 140, 0.2);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }

                    .program-card:hover {
                        transform: translateY(-4px);
                        border-color: rgba(233, 30, 140, 0.5);
                    }

                    .program-icon img {
                        height: 56px;
                        width: auto;
                        margin-bottom: 1rem;
                    }

                    .program-title {
                        font-size: 1.15rem;
                        margin-bottom: 0.5rem;
                        color: #fff;
                    }

                    .program-description {
                        font-size: 0.95rem;
                        color: #c9bcc6;
                    }

                    .founder-content {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }

                    .founder-image img {
                        width: 320px;
                        border-radius: 1rem;
                    }

                    .founder-title {
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                        color: #fff;
                    }

                    .founder-bio {
                        color: #d9cdd6;
                        margin-bottom: 1.5rem;
                    }

                    .learn-more-btn {
                        padding: 0.7rem 1.8rem;
                        border-radius: 2rem;
                        border: 1px solid #E91E8C;
                        background: transparent;
                        color: #FF5FA2;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.3s ease, color 0.3s ease;
                    }

                    .learn-more-btn:hover {
                        background: #E91E8C;
                        color: #fff;
                    }

                    @media (max-width: 768px) {
                        .founder-content {
                            flex-direction: column;
                            text-align: center;
                        }

                        .founder-image img {
                            width: 100%;
                            max-width: 360px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
