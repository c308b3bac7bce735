use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <h1 class="hero-title">{"Welcome To Pinkline Network"}</h1>
                <p class="hero-subtitle">
                    {"Training the next generation of filmmakers & content creators \
                      for an intensive learning experience that transforms careers"}
                </p>
                <a href="#get-started" class="hero-cta">{"Get Started Today"}</a>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: url('/images/hero.jpg') center/cover no-repeat;
                        filter: brightness(0.45);
                    }

                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 760px;
                        padding: 0 2rem;
                    }

                    .hero-title {
                        font-size: 3.2rem;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(45deg, #fff, #FF5FA2);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #e8dde6;
                        margin-bottom: 2.5rem;
                    }

                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border-radius: 2rem;
                        background: #E91E8C;
                        color: #fff;
                        text-decoration: none;
                        font-size: 1.1rem;
                        font-weight: 600;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }

                    .hero-cta:hover {
                        background: #FF5FA2;
                        transform: translateY(-2px);
                    }

                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.2rem;
                        }

                        .hero-subtitle {
                            font-size: 1.05rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
