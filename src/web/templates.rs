//! Template rendering with Tera

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer with embedded templates
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", include_str!("../templates/base.html"))?;
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;
        tera.add_raw_template("search.html", include_str!("../templates/search.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera Context
    pub fn render(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_register() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn test_index_renders() {
        let templates = Templates::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("instance_name", "Newsdesk");

        let html = templates.render("index.html", &ctx).unwrap();
        assert!(html.contains("Newsdesk"));
    }
}
