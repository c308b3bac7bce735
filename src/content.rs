//! Fixed page content. Every section renders from the literals below;
//! nothing is fetched or computed at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Program {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link_label: &'static str,
}

/// One entry in the gallery grid. The thumbnail and the lightbox both
/// render the same entry, untransformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Gallery", href: "#gallery" },
];

/// Ids of the sections actually rendered on the page. Fragment links are
/// resolved by the browser, so this list is what makes them land somewhere.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "features", "cohort", "gallery"];

pub const PROGRAMS: [Program; 4] = [
    Program {
        icon: "/images/filmmaking.png",
        title: "Film Making",
        description: "Comprehensive filmmaking training covering all aspects of production",
    },
    Program {
        icon: "/images/cinema.png",
        title: "Cinematography",
        description: "Master the art of visual storytelling and camera techniques",
    },
    Program {
        icon: "/images/directing.png",
        title: "Directing Movie",
        description: "Learn to lead film projects and bring creative visions to life",
    },
    Program {
        icon: "/images/editing.png",
        title: "Editing Video",
        description: "Professional video editing and post-production techniques",
    },
];

pub const FEATURES: [Feature; 3] = [
    Feature {
        image: "/images/academy.png",
        title: "Academy Mission & Reach",
        description: "Pinkline Academy offers hands-on training in filmmaking, cinematography, directing, editing, and VFX—delivered through onsite classes in Lagos and virtual sessions to students globally...",
        link_label: "Read More",
    },
    Feature {
        image: "/images/education.jpg",
        title: "Education Modal & Impact",
        description: "Blends traditional training with online VFX, offering a flexible and forward-thinking curriculum responsive to evolving digital demands.. the academy has nearly trained 200 alumni...",
        link_label: "Read More",
    },
    Feature {
        image: "/images/vision and values.png",
        title: "Vision & Values",
        description: "Pinkline academy envisions a future where African stories are told authentically and powerfully through well- trained creators. The academy strongly emphasize...",
        link_label: "Read More",
    },
];

pub const GALLERY_IMAGES: [GalleryImage; 6] = [
    GalleryImage { id: 1, src: "/images/gallery1.jpg", alt: "Academy Session 1" },
    GalleryImage { id: 2, src: "/images/gallery2.jpg", alt: "Academy Session 2" },
    GalleryImage { id: 3, src: "/images/gallery3.jpg", alt: "Academy Session 3" },
    GalleryImage { id: 4, src: "/images/gallery4.jpg", alt: "Academy Session 4" },
    GalleryImage { id: 5, src: "/images/gallery5.jpg", alt: "Academy Session 5" },
    GalleryImage { id: 6, src: "/images/gallery6.jpg", alt: "Academy Session 6" },
];

pub const PROGRAM_LINKS: [&str; 4] =
    ["Film Making", "Cinematography", "Directing Movie", "Editing Video"];

pub const QUICK_LINKS: [&str; 4] = ["Home", "About Us", "Features", "Gallery"];

pub const CONTACT_ADDRESS: &str = "Nextthought Studio, Ikate, Lekki, Lagos Nigeria";
pub const CONTACT_PHONE: &str = "08115633396";

/// Derives an in-page anchor fragment from a link label: lowercased, with
/// runs of whitespace collapsed to a single hyphen ("Directing Movie" ->
/// "directing-movie"). Nothing checks the result against the ids actually
/// present on the page.
pub fn anchor_slug(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_entries_are_sequential_and_well_formed() {
        assert_eq!(GALLERY_IMAGES.len(), 6);
        for (index, image) in GALLERY_IMAGES.iter().enumerate() {
            let n = index as u32 + 1;
            assert_eq!(image.id, n);
            assert_eq!(image.src, format!("/images/gallery{n}.jpg"));
            assert_eq!(image.alt, format!("Academy Session {n}"));
        }
    }

    #[test]
    fn nav_anchors_name_rendered_sections() {
        for item in NAV_ITEMS {
            let fragment = item
                .href
                .strip_prefix('#')
                .expect("nav links are in-page fragments");
            assert!(
                SECTION_IDS.contains(&fragment),
                "no section renders with id `{fragment}`"
            );
        }
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(anchor_slug("Directing Movie"), "directing-movie");
        assert_eq!(anchor_slug("Film   Making"), "film-making");
        assert_eq!(anchor_slug("gallery"), "gallery");
    }
}
