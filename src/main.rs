use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use stylist::yew::Global;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod state;
mod components {
    pub mod about;
    pub mod cohort;
    pub mod features;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use state::MobileMenu;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MobileMenu::default);
    let is_scrolled = use_state(|| false);

    // Window scroll listener drives the solid nav style; removed again in
    // the effect destructor so no handler outlives the component.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(offset) = win.scroll_y() {
                                    is_scrolled.set(offset > config::NAV_SCROLL_THRESHOLD_PX);
                                }
                            }
                        }
                    });
                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }),
                        Err(_) => Box::new(|| ()),
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    // Fragment navigation is left to the browser; activating a link only
    // has to land the mobile menu back on closed.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set((*menu).closed());
        })
    };

    let menu_class = if (*menu).is_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-brand">
                    <img src="/images/Pinklogo.png" alt="Pinkline Network" class="nav-logo" />
                </a>

                <ul class="nav-links">
                    { for content::NAV_ITEMS.iter().map(|item| html! {
                        <li key={item.label}>
                            <a href={item.href}>{ item.label }</a>
                        </li>
                    }) }
                </ul>

                <div class="nav-actions">
                    <a href="#register" class="nav-register">{"Register"}</a>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle mobile menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <ul class="mobile-nav-links">
                        { for content::NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.label}>
                                <a href={item.href} onclick={close_menu.clone()}>
                                    { item.label }
                                </a>
                            </li>
                        }) }
                    </ul>
                    <a href="#register" class="mobile-register" onclick={close_menu.clone()}>
                        {"Register"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }

                    .navbar.scrolled {
                        background: rgba(12, 6, 14, 0.95);
                        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.35);
                        backdrop-filter: blur(8px);
                    }

                    .nav-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0.75rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        height: 48px;
                        width: auto;
                        display: block;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .nav-links a {
                        color: #fff;
                        text-decoration: none;
                        font-size: 1rem;
                        transition: color 0.3s ease;
                    }

                    .nav-links a:hover {
                        color: #FF5FA2;
                    }

                    .nav-register {
                        padding: 0.6rem 1.6rem;
                        border-radius: 2rem;
                        background: #E91E8C;
                        color: #fff;
                        text-decoration: none;
                        font-weight: 600;
                        transition: background 0.3s ease;
                    }

                    .nav-register:hover {
                        background: #FF5FA2;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        display: block;
                    }

                    .mobile-menu {
                        display: none;
                    }

                    @media (max-width: 768px) {
                        .nav-links,
                        .nav-actions {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }

                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem 2rem;
                            background: rgba(12, 6, 14, 0.98);
                        }

                        .mobile-nav-links {
                            list-style: none;
                            margin: 0;
                            padding: 0;
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                        }

                        .mobile-nav-links a {
                            color: #fff;
                            text-decoration: none;
                            font-size: 1.1rem;
                        }

                        .mobile-register {
                            align-self: flex-start;
                            padding: 0.6rem 1.6rem;
                            border-radius: 2rem;
                            background: #E91E8C;
                            color: #fff;
                            text-decoration: none;
                            font-weight: 600;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    font-family: 'Inter', 'Segoe UI', sans-serif;
                    background: #0c060e;
                    color: #f5f0f4;
                    line-height: 1.6;
                }

                img {
                    max-width: 100%;
                }

                .section-badge {
                    display: inline-block;
                    padding: 0.5rem 1.5rem;
                    border-radius: 2rem;
                    background: rgba(233, 30, 140, 0.15);
                    border: 1px solid rgba(233, 30, 140, 0.4);
                    color: #FF5FA2;
                    font-weight: 600;
                    letter-spacing: 0.02em;
                }
            "#} />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
