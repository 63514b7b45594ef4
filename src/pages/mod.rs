//! Page behaviors: what each page shows, independent of the DOM

pub mod booking;
pub mod nav;
pub mod packages;

/// `<body id>` of each page that carries behavior
pub const PACKAGES_PAGE: &str = "packages-page";
pub const BOOKING_PAGE: &str = "booking-page";
pub const GALLERY_PAGE: &str = "gallery-page";
