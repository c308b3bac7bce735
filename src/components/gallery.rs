use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::content::{self, GalleryImage};
use crate::state::{set_scroll_lock, Lightbox};

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_state(Lightbox::default);
    let is_open = lightbox.is_open();

    // The scroll lock shadows the selection: applied while an image is
    // shown, released when it changes back and when the section unmounts.
    {
        use_effect_with_deps(
            move |open: &bool| {
                set_scroll_lock(*open);
                || set_scroll_lock(false)
            },
            is_open,
        );
    }

    // Escape dismisses the lightbox. The keydown listener only exists while
    // an image is shown; the destructor removes it on close and on unmount
    // so it never fires for an empty lightbox.
    {
        let lightbox = lightbox.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new({
                            let lightbox = lightbox.clone();
                            move |event: KeyboardEvent| {
                                if event.key() == "Escape" {
                                    debug!("Closing lightbox via Escape");
                                    lightbox.set((*lightbox).closed());
                                }
                            }
                        });
                        match document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }),
                            Err(_) => Box::new(|| ()),
                        }
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            is_open,
        );
    }

    let open_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |image: GalleryImage| {
            debug!("Opening lightbox for {}", image.alt);
            lightbox.set((*lightbox).opened(image));
        })
    };

    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| {
            lightbox.set((*lightbox).closed());
        })
    };

    // Clicks on the image or caption stay inside the content box; only the
    // backdrop dismisses.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <section id="gallery" class="gallery-section">
            <div class="gallery-container">
                <div class="gallery-header">
                    <div class="section-badge">{"Filterable Gallery for the Academy"}</div>
                </div>

                <div class="gallery-content">
                    <div class="gallery-grid">
                        { for content::GALLERY_IMAGES.iter().map(|image| {
                            let on_open = {
                                let open_lightbox = open_lightbox.clone();
                                let image = *image;
                                Callback::from(move |_: MouseEvent| open_lightbox.emit(image))
                            };
                            html! {
                                <div key={image.id} class="gallery-item" onclick={on_open}>
                                    <img src={image.src} alt={image.alt} loading="lazy" />
                                    <div class="gallery-overlay">
                                        <div class="gallery-overlay-content">
                                            <span class="gallery-icon">{"🔍"}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                {
                    if let Some(image) = lightbox.selected() {
                        html! {
                            <div class="lightbox-overlay" onclick={close_lightbox.clone()}>
                                <div class="lightbox-content" onclick={keep_open}>
                                    <button
                                        class="lightbox-close"
                                        onclick={close_lightbox}
                                        aria-label="Close"
                                    >
                                        {"×"}
                                    </button>
                                    <img src={image.src} alt={image.alt} class="lightbox-image" />
                                    <div class="lightbox-caption">{ image.alt }</div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .gallery-section {
                        padding: 6rem 2rem;
                        background: #0c060e;
                    }

                    .gallery-container {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .gallery-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .gallery-content {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #160d1a;
                    }

                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 1.25rem;
                    }

                    .gallery-item {
                        position: relative;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        cursor: pointer;
                    }

                    .gallery-item img {
                        width: 100%;
                        height: 220px;
                        object-fit: cover;
                        display: block;
                        transition: transform 0.3s ease;
                    }

                    .gallery-item:hover img {
                        transform: scale(1.05);
                    }

                    .gallery-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(12, 6, 14, 0.55);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .gallery-item:hover .gallery-overlay {
                        opacity: 1;
                    }

                    .gallery-icon {
                        font-size: 1.8rem;
                    }

                    .lightbox-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.85);
                        animation: lightbox-fade 0.2s ease;
                    }

                    @keyframes lightbox-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    .lightbox-content {
                        position: relative;
                        max-width: min(900px, 90vw);
                    }

                    .lightbox-image {
                        width: 100%;
                        max-height: 80vh;
                        object-fit: contain;
                        border-radius: 0.5rem;
                    }

                    .lightbox-caption {
                        margin-top: 0.75rem;
                        text-align: center;
                        color: #e8dde6;
                    }

                    .lightbox-close {
                        position: absolute;
                        top: -2.5rem;
                        right: 0;
                        width: 2rem;
                        height: 2rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.15);
                        color: #fff;
                        font-size: 1.3rem;
                        line-height: 1;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }

                    .lightbox-close:hover {
                        background: #E91E8C;
                    }
                "#}
            </style>
        </section>
    }
}
