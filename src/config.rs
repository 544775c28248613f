use std::sync::LazyLock;

pub const DEFAULT_PROJECTS_URL: &str = "https://mahfuz-s-portfolio-website-server.vercel.app/projects";

/// Resolved once from the environment captured at build time, so the browser
/// bundle and the server agree.
pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::from_build_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub autoreply_template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub projects_url: String,
    pub emailjs: EmailJsConfig,
    /// Projects revealed per "load more" click.
    pub projects_page_size: usize,
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let projects_page_size = lookup("PORTFOLIO_PROJECTS_PAGE_SIZE")
            .and_then(|v| match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    log::warn!("ignoring invalid PORTFOLIO_PROJECTS_PAGE_SIZE {v:?}");
                    None
                }
            })
            .unwrap_or(6);
        Self {
            projects_url: get("PORTFOLIO_PROJECTS_URL", DEFAULT_PROJECTS_URL),
            emailjs: EmailJsConfig {
                service_id: get("PORTFOLIO_EMAILJS_SERVICE", "service_portfolio"),
                template_id: get("PORTFOLIO_EMAILJS_TEMPLATE", "template_contact"),
                autoreply_template_id: get(
                    "PORTFOLIO_EMAILJS_AUTOREPLY_TEMPLATE",
                    "template_autoreply",
                ),
                public_key: get("PORTFOLIO_EMAILJS_PUBLIC_KEY", ""),
            },
            projects_page_size,
        }
    }

    fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let v = match key {
                "PORTFOLIO_PROJECTS_URL" => option_env!("PORTFOLIO_PROJECTS_URL"),
                "PORTFOLIO_PROJECTS_PAGE_SIZE" => option_env!("PORTFOLIO_PROJECTS_PAGE_SIZE"),
                "PORTFOLIO_EMAILJS_SERVICE" => option_env!("PORTFOLIO_EMAILJS_SERVICE"),
                "PORTFOLIO_EMAILJS_TEMPLATE" => option_env!("PORTFOLIO_EMAILJS_TEMPLATE"),
                "PORTFOLIO_EMAILJS_AUTOREPLY_TEMPLATE" => {
                    option_env!("PORTFOLIO_EMAILJS_AUTOREPLY_TEMPLATE")
                }
                "PORTFOLIO_EMAILJS_PUBLIC_KEY" => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
                _ => None,
            };
            v.map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults() {
        let c = SiteConfig::from_lookup(|_| None);
        assert_eq!(c.projects_url, DEFAULT_PROJECTS_URL);
        assert_eq!(c.projects_page_size, 6);
        assert_eq!(c.emailjs.template_id, "template_contact");
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            ("PORTFOLIO_PROJECTS_URL", "http://localhost:5000/projects"),
            ("PORTFOLIO_PROJECTS_PAGE_SIZE", "3"),
            ("PORTFOLIO_EMAILJS_PUBLIC_KEY", "pk_live"),
            ("PORTFOLIO_EMAILJS_SERVICE", "  "),
        ]);
        let c = SiteConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(c.projects_url, "http://localhost:5000/projects");
        assert_eq!(c.projects_page_size, 3);
        assert_eq!(c.emailjs.public_key, "pk_live");
        // blank values fall back
        assert_eq!(c.emailjs.service_id, "service_portfolio");
    }

    #[test]
    fn test_bad_page_size() {
        let c = SiteConfig::from_lookup(|k| {
            (k == "PORTFOLIO_PROJECTS_PAGE_SIZE").then(|| "0".to_string())
        });
        assert_eq!(c.projects_page_size, 6);
    }
}
