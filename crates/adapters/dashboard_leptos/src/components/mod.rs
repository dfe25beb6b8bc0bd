mod commands;
mod header;
mod login;
mod sites;

pub use commands::CommandPanel;
pub use header::Header;
pub use login::LoginPanel;
pub use sites::{AddSiteForm, SiteEditorForm, SiteList};
