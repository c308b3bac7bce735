use chrono::Datelike;
use yew::prelude::*;

use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-description">
                    <p>
                        {"Pinkline Academy is rapidly emerging as a creative education powerhouse in \
                          Africa, passionately led by a new generation of storytellers. With industry \
                          relevance, vibrant training programs, and a pan-African alumni base, the \
                          Academy is charting a promising path toward redefining filmmaking and \
                          content creation across the continent."}
                    </p>
                </div>

                <div class="footer-content">
                    <div class="footer-section">
                        <h3 class="footer-title">{"Program & Training"}</h3>
                        <ul class="footer-links">
                            { for content::PROGRAM_LINKS.iter().map(|label| html! {
                                <li key={*label}>
                                    <a href={format!("#{}", content::anchor_slug(label))}>
                                        { *label }
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h3 class="footer-title">{"Quick Link"}</h3>
                        <ul class="footer-links">
                            { for content::QUICK_LINKS.iter().map(|label| html! {
                                <li key={*label}>
                                    <a href={format!("#{}", content::anchor_slug(label))}>
                                        { *label }
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h3 class="footer-title">{"Connect With Us"}</h3>
                        <div class="footer-contact">
                            <p class="footer-address">{ content::CONTACT_ADDRESS }</p>
                            <p class="footer-phone">{ content::CONTACT_PHONE }</p>
                        </div>
                    </div>

                    <div class="footer-section footer-social-logo-section">
                        <div class="footer-social">
                            <a href="#" aria-label="Instagram" class="social-link">
                                <svg class="social-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                                    <path d="m16 11.37-4-2.37v4.74l4-2.37z"></path>
                                    <circle cx="18" cy="6" r="1"></circle>
                                </svg>
                            </a>
                            <a href="#" aria-label="TikTok" class="social-link">
                                <svg class="social-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <path d="M9 12a4 4 0 1 0 4 4V4a5 5 0 0 0 5 5"></path>
                                </svg>
                            </a>
                            <a href="#" aria-label="YouTube" class="social-link">
                                <svg class="social-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <path d="M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33z"></path>
                                    <polygon points="9.75,15.02 15.5,11.75 9.75,8.48"></polygon>
                                </svg>
                            </a>
                        </div>

                        <div class="footer-logo-section">
                            <img src="/images/Pinklogo.png" alt="Pinkline Network" class="footer-logo" />
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-divider"></div>
                    <p class="footer-copyright">
                        { format!("© {year} Pinkline Academy — All Rights Reserved. | Privacy Policy | Terms & Conditions") }
                    </p>
                </div>
            </div>
            <style>
                {r#"
                    .footer {
                        padding: 4rem 2rem 2rem;
                        background: #120a16;
                        border-top: 1px solid rgba(233, 30, 140, 0.15);
                    }

                    .footer-container {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .footer-description {
                        max-width: 760px;
                        margin-bottom: 3rem;
                        color: #c9bcc6;
                    }

                    .footer-content {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }

                    .footer-title {
                        font-size: 1.1rem;
                        margin-bottom: 1rem;
                        color: #fff;
                    }

                    .footer-links {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                    }

                    .footer-links a {
                        color: #c9bcc6;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .footer-links a:hover {
                        color: #FF5FA2;
                    }

                    .footer-contact p {
                        color: #c9bcc6;
                        margin-bottom: 0.5rem;
                    }

                    .footer-social {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .social-link {
                        color: #c9bcc6;
                        transition: color 0.3s ease;
                    }

                    .social-link:hover {
                        color: #FF5FA2;
                    }

                    .social-icon {
                        width: 22px;
                        height: 22px;
                    }

                    .footer-logo {
                        height: 40px;
                        width: auto;
                    }

                    .footer-divider {
                        height: 1px;
                        background: rgba(233, 30, 140, 0.15);
                        margin-bottom: 1.5rem;
                    }

                    .footer-copyright {
                        text-align: center;
                        color: #9b8c98;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
        </footer>
    }
}
