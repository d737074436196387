mod copy_button;
mod external_link;
mod icon;
mod prose_code;
mod section;
mod site_footer;
mod site_header;

pub use copy_button::CopyButton;
pub use external_link::{ExternalLink, SocialLinks};
pub use icon::Icon;
pub use prose_code::{CodeSampleBlock, ProseCode};
pub use section::Section;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
