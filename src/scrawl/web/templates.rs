//! # Page Templates
//!
//! Pages are minijinja templates kept as standalone `.html` files next to this module
//! and embedded at compile time. The `.html` suffix turns on auto-escaping, so every
//! value is escaped unless a template says `|safe`; the only values that do are the
//! renderer's own markdown output.
//!
//! Besides the builtins, templates get one filter: `markdown`, which renders a string
//! with the light theme's extension set.

use crate::error::Result;
use crate::markdown::{self, Theme};
use minijinja::{Environment, Value};
use serde::Serialize;

pub const LAYOUT_TEMPLATE: &str = include_str!("templates/layout.html");
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
pub const PRINT_TEMPLATE: &str = include_str!("templates/print.html");
pub const RENDER_TEMPLATE: &str = include_str!("templates/render.html");

pub const STYLESHEET: &str = include_str!("static/style.css");

/// Compiled page templates, built once at startup.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("markdown", |text: String| -> Value {
            Value::from_safe_string(markdown::to_html(&text, Theme::Light))
        });

        env.add_template("layout.html", LAYOUT_TEMPLATE)?;
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("print.html", PRINT_TEMPLATE)?;
        env.add_template("render.html", RENDER_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}
