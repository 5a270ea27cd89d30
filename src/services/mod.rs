//! Services layer
//!
//! Services stamp ids and timestamps onto incoming records and hand them to
//! the repositories. There is no further business logic.

pub mod link;
pub mod media;
pub mod page;
pub mod settings;
pub mod transfer;
pub mod widget;

pub use link::LinkService;
pub use media::{MediaService, UploadedFile};
pub use page::PageService;
pub use settings::SettingsService;
pub use transfer::{TransferService, DEFAULT_EXPORT_FORMAT};
pub use widget::{WidgetService, WidgetTypeInfo};
