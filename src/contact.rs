use bevy::prelude::*;
use bevy_egui::egui;
use std::fmt;

/// The "Send a Message" form. Nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// No endpoint is wired: log the attempt and reset the fields like a page reload would.
    pub fn submit(&mut self) {
        info!(
            "Contact form submitted with a {} character message; no endpoint is configured, discarding",
            self.message.chars().count()
        );
        *self = Self::default();
    }
}

// each target only constructs some of these
#[allow(dead_code)]
#[derive(Debug)]
pub enum LinkError {
    /// No browser window to open the link from.
    NoWindow,
    /// The browser refused to open a new tab, usually a popup blocker.
    Blocked(String),
    /// A path on the hosting site; only meaningful inside the browser.
    PageRelative(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NoWindow => write!(f, "no browser window available"),
            LinkError::Blocked(url) => write!(f, "browser blocked opening {}", url),
            LinkError::PageRelative(url) => {
                write!(f, "{} is relative to the hosting page and has no native target", url)
            }
        }
    }
}

impl std::error::Error for LinkError {}

/// Open `url` in a new browsing context.
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(_ctx: &egui::Context, url: &str) -> Result<(), LinkError> {
    let window = web_sys::window().ok_or(LinkError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(LinkError::Blocked(url.to_string())),
        Err(err) => {
            let err: wasm_bindgen::JsValue = err;
            debug!("window.open failed: {:?}", err);
            Err(LinkError::Blocked(url.to_string()))
        }
    }
}

/// Open `url` in a new browsing context.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(ctx: &egui::Context, url: &str) -> Result<(), LinkError> {
    if !is_absolute(url) {
        return Err(LinkError::PageRelative(url.to_string()));
    }
    ctx.open_url(egui::OpenUrl::new_tab(url));
    Ok(())
}

/// True for URLs that carry their own scheme, like `https://` or `mailto:`.
#[cfg(any(not(target_arch = "wasm32"), test))]
pub fn is_absolute(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Open a link and log, rather than surface, any failure.
pub fn follow_link(ctx: &egui::Context, url: &str) {
    match open_in_new_tab(ctx, url) {
        Ok(()) => info!("Opened {}", url),
        Err(err) => warn!("Could not open link: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_clears_the_form() {
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };
        assert_ne!(form, ContactForm::default());
        form.submit();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn blocked_link_names_the_url() {
        let err = LinkError::Blocked("https://example.com".into());
        assert_eq!(err.to_string(), "browser blocked opening https://example.com");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_links_are_handed_to_egui() {
        let ctx = egui::Context::default();
        assert!(open_in_new_tab(&ctx, "https://github.com/Gauravmy").is_ok());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn site_paths_do_not_open_natively() {
        let ctx = egui::Context::default();
        let err = open_in_new_tab(&ctx, "/resume").unwrap_err();
        assert!(matches!(err, LinkError::PageRelative(ref url) if url == "/resume"));
    }

    #[test]
    fn absolute_urls_need_a_scheme() {
        assert!(is_absolute("https://leetcode.com/u/g4777636/"));
        assert!(is_absolute("mailto:g4777636@gmail.com"));
        assert!(!is_absolute("/resume"));
        assert!(!is_absolute("resume.pdf"));
        assert!(!is_absolute("/docs/a:b"));
    }
}
