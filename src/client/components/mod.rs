pub mod badge;
pub mod error_banner;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod reason_form;
pub mod sidebar;

pub use error_banner::ErrorBanner;
pub use header::Header;
pub use layout::AdminLayout;
pub use modal::Modal;
pub use page::Page;
pub use pagination::PaginationControl;
pub use reason_form::ReasonForm;
pub use sidebar::Sidebar;
