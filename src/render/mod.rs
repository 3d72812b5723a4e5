//! Page renderer
//!
//! Tera templates are embedded into the binary at build time and parsed once
//! at startup. Every page extends `base.html`, which draws the navigation
//! shell from the `site` and `sidebar` variables injected by `render_page`.

mod error;


use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::error::Error as StdError;
use tera::{Context as TeraContext, Tera};

use crate::config::SiteConfig;
use crate::shell::Sidebar;

pub use error::RenderError;

/// Embedded page templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct Templates;

/// Embedded static assets (stylesheet)
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Tera engine plus the site branding every page needs
pub struct Renderer {
    tera: Tera,
    site: SiteConfig,
}

impl Renderer {
    /// Parse all embedded templates
    pub fn new(site: SiteConfig) -> Result<Self, RenderError> {
        let mut sources = Vec::new();
        for name in Templates::iter() {
            let Some(file) = Templates::get(&name) else {
                continue;
            };
            let source = String::from_utf8(file.data.into_owned())
                .map_err(|e| RenderError::Template(format!("{} is not UTF-8: {}", name, e)))?;
            sources.push((name.into_owned(), source));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(sources)
            .map_err(|e| RenderError::Template(describe(&e)))?;

        tracing::debug!(
            "Loaded {} page templates",
            tera.get_template_names().count()
        );

        Ok(Self { tera, site })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a template with the given context as is
    pub fn render(&self, template: &str, context: &TeraContext) -> Result<String, RenderError> {
        self.tera
            .render(template, context)
            .map_err(|e| RenderError::Render {
                template: template.to_string(),
                message: describe(&e),
            })
    }

    /// Render a page inside the navigation shell
    ///
    /// Adds `site` (branding and metadata), `sidebar` (the shell view) and
    /// `link_suffix` (query string that keeps the collapse state on in-page
    /// links) to `context`.
    pub fn render_page(
        &self,
        template: &str,
        sidebar: &Sidebar,
        mut context: TeraContext,
    ) -> Result<String, RenderError> {
        context.insert("site", &self.site);
        context.insert("sidebar", &sidebar.view(&self.site));
        context.insert("link_suffix", &sidebar.href_for(""));
        self.render(template, &context)
    }
}

/// Embedded static asset by relative path, e.g. `app.css`
pub fn asset(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|file| file.data)
}

/// Content type for an asset path
pub fn content_type(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Tera error with its whole cause chain
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  Caused by: {}", cause));
        source = cause.source();
    }
    message
}
