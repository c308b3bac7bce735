use yew::prelude::*;

use crate::content;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="features-container">
                <div class="features-header">
                    <div class="section-badge">
                        {"We Offer Various for Features"}<br />
                        {"Training for our Upbringing Students"}
                    </div>
                </div>

                <div class="features-grid">
                    { for content::FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class="feature-card-main">
                            <div class="feature-image">
                                <img src={feature.image} alt={feature.title} loading="lazy" />
                            </div>
                            <div class="feature-content">
                                <h3 class="feature-title">{ feature.title }</h3>
                                <p class="feature-description">{ feature.description }</p>
                                <a href="#" class="feature-link">{ feature.link_label }</a>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .features-section {
                        padding: 6rem 2rem;
                        background: #0c060e;
                    }

                    .features-container {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .features-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }

                    .feature-card-main {
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #160d1a;
                        border: 1px solid rgba(233, 30, 140, 0.15);
                        transition: transform 0.3s ease;
                    }

                    .feature-card-main:hover {
                        transform: translateY(-4px);
                    }

                    .feature-image img {
                        width: 100%;
                        height: 200px;
                        object-fit: cover;
                        display: block;
                    }

                    .feature-content {
                        padding: 1.5rem;
                    }

                    .feature-title {
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                        color: #fff;
                    }

                    .feature-description {
                        color: #c9bcc6;
                        font-size: 0.98rem;
                        margin-bottom: 1rem;
                    }

                    .feature-link {
                        color: #FF5FA2;
                        text-decoration: none;
                        font-weight: 600;
                    }

                    .feature-link:hover {
                        text-decoration: underline;
                    }
                "#}
            </style>
        </section>
    }
}
