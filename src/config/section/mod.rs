//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module         | TOML Section                 | Purpose                          |
//! |----------------|------------------------------|----------------------------------|
//! | `site`         | `[site]`                     | Title, description, lang, base   |
//! | `head`         | `[[head]]`                   | Extra `<head>` elements          |
//! | `nav`          | `[[nav]]`                    | Top navigation bar               |
//! | `sidebar`      | `[sidebar]`                  | Prefix-scoped sidebar            |
//! | `social`       | `[[social_links]]`           | Icon links                       |
//! | `search`       | `[search]`                   | Provider and UI strings          |
//! | `outline`      | `[outline]`                  | On-page table of contents        |
//! | `last_updated` | `[last_updated]`             | Last-updated stamp               |
//! | `footer`       | `[footer]`, `[doc_footer]`   | Footer and prev/next labels      |

mod footer;
mod head;
mod last_updated;
mod nav;
mod outline;
pub mod search;
mod sidebar;
mod site;
mod social;

pub use footer::{DocFooterConfig, FooterConfig};
pub use head::HeadTag;
pub use last_updated::{FormatStyle, LastUpdatedConfig};
pub use nav::NavItem;
pub use outline::{HeadingLevels, OutlineConfig};
pub use search::{
    AlgoliaConfig, ResolvedSearchStrings, SearchConfig, SearchKey, SearchProvider, SearchStrings,
};
pub use sidebar::{SidebarMap, SidebarSection};
pub use site::SiteMetadata;
pub use social::{SocialIcon, SocialLink};
