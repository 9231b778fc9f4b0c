//! HTML templates compiled into the binary and rendered with MiniJinja.
//!
//! Names ending in `.html` are auto-escaped; post bodies and JSON-LD are
//! marked `|safe` in the templates that embed them.

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::AppError;

const TEMPLATES: [(&str, &str); 10] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("blog_index.html", include_str!("../../templates/blog_index.html")),
    ("blog_post.html", include_str!("../../templates/blog_post.html")),
    ("notes.html", include_str!("../../templates/notes.html")),
    ("projects.html", include_str!("../../templates/projects.html")),
    ("workbench.html", include_str!("../../templates/workbench.html")),
    ("introduction.html", include_str!("../../templates/introduction.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        // A broken template surfaces as a render error on the pages using it
        if let Err(e) = env.add_template(name, source) {
            tracing::error!(template = name, error = %e, "Failed to compile template");
        }
    }
    env
});

/// Render a named template with a serializable context.
pub fn render<C: Serialize>(name: &str, ctx: C) -> Result<String, AppError> {
    let template = ENV.get_template(name)?;
    Ok(template.render(ctx)?)
}
