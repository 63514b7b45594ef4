//! Domain models

pub mod booking;
pub mod gallery;
pub mod package;

pub use booking::{EstimateResult, FormState};
pub use gallery::{ClickTarget, GalleryItem, ModalEvent, ModalState};
pub use package::{Catalog, Package, PackageError, Season};
