//! Interaction state for the two stateful parts of the page: the mobile
//! navigation menu and the gallery lightbox. Both are plain values so the
//! transitions stay testable without a DOM; components hold them in
//! `use_state` and apply the browser side effects from effects.

use crate::content::GalleryImage;

/// Mobile navigation menu. Closed on mount; a repeated toggle or any
/// nav-link activation lands it back on closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// Single-slot lightbox selection. At most one image is shown at a time;
/// the scroll lock is derived from the selection, never stored separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<GalleryImage>,
}

impl Lightbox {
    pub fn selected(&self) -> Option<&GalleryImage> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Background scrolling is suppressed exactly while an image is shown.
    pub fn scroll_locked(&self) -> bool {
        self.selected.is_some()
    }

    pub fn opened(&self, image: GalleryImage) -> Self {
        Self { selected: Some(image) }
    }

    pub fn closed(&self) -> Self {
        Self { selected: None }
    }
}

/// Applies the scroll lock to the document body. Every path that locks has
/// a matching unlock, including unmount while the lightbox is open; the
/// gallery drives this from an effect destructor.
pub fn set_scroll_lock(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GALLERY_IMAGES;

    #[test]
    fn menu_open_tracks_toggle_parity() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        for n in 1..=7 {
            menu = menu.toggled();
            assert_eq!(menu.is_open(), n % 2 == 1);
        }
    }

    #[test]
    fn nav_activation_always_closes_the_menu() {
        let menu = MobileMenu::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.closed().is_open());
        assert!(!menu.closed().closed().is_open());
    }

    #[test]
    fn opening_preserves_image_identity() {
        for image in GALLERY_IMAGES {
            let lightbox = Lightbox::default().opened(image);
            assert_eq!(lightbox.selected(), Some(&image));
        }
    }

    #[test]
    fn close_is_idempotent_from_the_closed_state() {
        let lightbox = Lightbox::default().closed();
        assert_eq!(lightbox.selected(), None);
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn scroll_lock_follows_selection_across_interleavings() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.scroll_locked());
        for image in GALLERY_IMAGES {
            lightbox = lightbox.opened(image);
            assert!(lightbox.scroll_locked());
            // Re-opening replaces the single slot rather than stacking.
            lightbox = lightbox.opened(image);
            assert_eq!(lightbox.selected(), Some(&image));
            lightbox = lightbox.closed();
            assert!(!lightbox.scroll_locked());
            lightbox = lightbox.closed();
            assert!(!lightbox.scroll_locked());
        }
    }

    #[test]
    fn escape_on_third_image_restores_unlocked_state() {
        let third = GALLERY_IMAGES[2];
        let open = Lightbox::default().opened(third);
        let shown = open.selected().expect("image is shown");
        assert_eq!(shown.id, 3);
        assert_eq!(shown.src, "/images/gallery3.jpg");
        assert_eq!(shown.alt, "Academy Session 3");
        assert!(open.scroll_locked());

        // The Escape handler runs the same transition as the close button.
        let closed = open.closed();
        assert_eq!(closed.selected(), None);
        assert!(!closed.scroll_locked());
    }
}
