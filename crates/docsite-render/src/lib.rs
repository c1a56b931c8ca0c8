//! HTML chrome fragments for the docs site.
//!
//! Turns the declarative inputs — a resolved theme and a sidebar
//! manifest — into the HTML fragments the page template slots expect:
//! sidebar, navbar, footer, and the fixed announcement banner.
//!
//! Rendering is infallible: every function takes immutable data and
//! returns a `String`. Anything that could actually fail (a slug
//! pointing at a missing page, a bad asset path) is the consuming
//! framework's build error, not a render error here. All interpolated
//! text is HTML-escaped.

mod banner;
mod chrome;
mod escape;
mod sidebar;

pub use banner::announcement_banner;
pub use chrome::{render_footer, render_navbar};
pub use escape::escape_html;
pub use sidebar::render_sidebar;
