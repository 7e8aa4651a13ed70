use minijinja::{Environment, ErrorKind};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("view.template_not_found")]
    TemplateNotFound(String),
    #[error("view.render_failed")]
    RenderFailed(#[from] minijinja::Error),
}

/// Template-rendering port used by the page handlers.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, view: &str, model: &Value) -> Result<String, RenderError>;
}

/// Renders the templates compiled into the binary. Auto-escaping is on for `.html` names.
pub struct MinijinjaRenderer {
    env: Environment<'static>,
}

impl MinijinjaRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../../templates/base.html"))?;
        env.add_template("error.html", include_str!("../../templates/error.html"))?;
        env.add_template(
            "product/list.html",
            include_str!("../../templates/product/list.html"),
        )?;
        env.add_template(
            "product/show.html",
            include_str!("../../templates/product/show.html"),
        )?;
        env.add_template(
            "product/new.html",
            include_str!("../../templates/product/new.html"),
        )?;
        env.add_template(
            "product/edit.html",
            include_str!("../../templates/product/edit.html"),
        )?;
        Ok(Self { env })
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(&self, view: &str, model: &Value) -> Result<String, RenderError> {
        let template = self.env.get_template(view).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(view.to_string()),
            _ => RenderError::RenderFailed(e),
        })?;
        Ok(template.render(model)?)
    }
}
