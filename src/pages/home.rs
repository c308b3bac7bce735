use yew::prelude::*;

use crate::components::about::About;
use crate::components::cohort::Cohort;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Hero />
            <About />
            <Features />
            <Cohort />
            <Gallery />
            <Footer />
        </div>
    }
}
