//! Gallery item metadata and the image modal state machine

/// A gallery thumbnail, read from its `data-large` / `data-caption` attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub large_src: String,
    pub caption: String,
}

impl GalleryItem {
    /// Build an item from raw attribute values.
    ///
    /// An item without a large image cannot open the modal; a missing caption
    /// becomes an empty string.
    pub fn from_attributes(large: Option<String>, caption: Option<String>) -> Option<Self> {
        let large_src = large.filter(|src| !src.trim().is_empty())?;
        Some(Self {
            large_src,
            caption: caption.unwrap_or_default(),
        })
    }
}

/// Where a click inside the modal landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop element itself
    Backdrop,
    /// Anything inside the content region (image, caption, padding)
    Content,
}

/// Things that can happen to the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Activate(GalleryItem),
    CloseButton,
    Click(ClickTarget),
}

/// The modal is either closed or showing exactly one image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { image_src: String, caption: String },
}

impl ModalState {
    /// Apply an event and return the next state
    pub fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::Activate(item) => ModalState::Open {
                image_src: item.large_src,
                caption: item.caption,
            },
            ModalEvent::CloseButton | ModalEvent::Click(ClickTarget::Backdrop) => {
                ModalState::Closed
            }
            ModalEvent::Click(ClickTarget::Content) => self,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    /// CSS `display` value for the backdrop
    pub fn display(&self) -> &'static str {
        match self {
            ModalState::Open { .. } => "flex",
            ModalState::Closed => "none",
        }
    }
}
