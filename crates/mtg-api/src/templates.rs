//! Server-rendered pages

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::ApiError;

pub const LOGIN: &str = "login";
pub const SIGNUP: &str = "signup";
pub const CONTACT_US: &str = "contact_us";
pub const NOT_FOUND: &str = "not_found";

pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, ApiError> {
        let mut registry = Handlebars::new();
        registry.register_partial("header", include_str!("../templates/header.hbs"))?;
        registry.register_partial("footer", include_str!("../templates/footer.hbs"))?;
        registry.register_template_string(LOGIN, include_str!("../templates/login.hbs"))?;
        registry.register_template_string(SIGNUP, include_str!("../templates/signup.hbs"))?;
        registry.register_template_string(CONTACT_US, include_str!("../templates/contact_us.hbs"))?;
        registry.register_template_string(NOT_FOUND, include_str!("../templates/not_found.hbs"))?;
        Ok(Self { registry })
    }

    pub fn render(&self, name: &str, page: &Page<'_>) -> Result<Html<String>, ApiError> {
        Ok(Html(self.registry.render(name, page)?))
    }
}

#[derive(Debug, Serialize)]
pub struct NavUser<'a> {
    pub username: &'a str,
}

/// Data every page template receives.
#[derive(Debug, Serialize)]
pub struct Page<'a> {
    pub title: &'a str,
    pub user: Option<NavUser<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, ctx: &'a RequestContext) -> Self {
        Self {
            title,
            user: ctx.user().map(|u| NavUser { username: &u.username }),
            error: None,
            email: None,
            username: None,
        }
    }

    pub fn with_error(mut self, error: &'a str) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_email(mut self, email: &'a str) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_username(mut self, username: &'a str) -> Self {
        self.username = Some(username);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtg_core::User;

    #[test]
    fn test_all_templates_render_anonymous() {
        let templates = Templates::new().unwrap();
        let ctx = RequestContext::anonymous();
        for name in [LOGIN, SIGNUP, CONTACT_US, NOT_FOUND] {
            let Html(body) = templates.render(name, &Page::new("Test", &ctx)).unwrap();
            assert!(body.contains("<title>Test | MTG Workshop</title>"), "{}", name);
            assert!(body.contains("/acct/login"), "{}", name);
            assert!(!body.contains("update-last-activity"), "{}", name);
        }
    }

    #[test]
    fn test_logged_in_pages_send_heartbeat() {
        let templates = Templates::new().unwrap();
        let user = User::new("gideon".into(), "gideon@example.com".into(), "hash".into()).unwrap();
        let ctx = RequestContext::new(Some(user));
        let Html(body) = templates
            .render(CONTACT_US, &Page::new("Contact Us", &ctx))
            .unwrap();
        assert!(body.contains("gideon"));
        assert!(body.contains("/update-last-activity"));
    }

    #[test]
    fn test_login_error_is_escaped() {
        let templates = Templates::new().unwrap();
        let ctx = RequestContext::anonymous();
        let page = Page::new("Log In", &ctx)
            .with_error("<b>nope</b>")
            .with_email("a@b.c");
        let Html(body) = templates.render(LOGIN, &page).unwrap();
        assert!(body.contains("&lt;b&gt;nope"));
        assert!(!body.contains("<b>nope"));
        assert!(body.contains("value=\"a@b.c\""));
    }
}
