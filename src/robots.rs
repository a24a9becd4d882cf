//! robots.txt handling.
//!
//! The body is split into directive lines and checked against a small set of
//! access rules. Only one rule exists today: a wildcard group whose very next
//! line is `Disallow: /`. Path-level rules, crawl-delay and per-agent groups
//! are parsed but not enforced.

use crate::error::PolicyDenial;
use crate::http::{HttpExecutor, HttpRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveKind {
    UserAgent(String),
    Allow(String),
    Disallow(String),
    CrawlDelay(String),
    Sitemap(String),
    Other,
}

/// A single line of a robots.txt file, raw text kept alongside its meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub raw: String,
    pub kind: DirectiveKind,
}

impl Directive {
    fn parse(raw: &str) -> Self {
        let content = raw.split('#').next().unwrap_or_default();
        let kind = match content.split_once(':') {
            Some((key, value)) => {
                let value = value.trim().to_string();
                match key.trim().to_ascii_lowercase().as_str() {
                    "user-agent" => DirectiveKind::UserAgent(value),
                    "allow" => DirectiveKind::Allow(value),
                    "disallow" => DirectiveKind::Disallow(value),
                    "crawl-delay" => DirectiveKind::CrawlDelay(value),
                    "sitemap" => DirectiveKind::Sitemap(value),
                    _ => DirectiveKind::Other,
                }
            }
            None => DirectiveKind::Other,
        };

        Self {
            raw: raw.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsDocument {
    pub directives: Vec<Directive>,
}

impl RobotsDocument {
    /// Lines are split on `\n` only; a trailing `\r` stays part of the raw line.
    pub fn parse(body: &str) -> Self {
        Self {
            directives: body.split('\n').map(Directive::parse).collect(),
        }
    }

    pub fn count(&self, pred: impl Fn(&DirectiveKind) -> bool) -> usize {
        self.directives.iter().filter(|d| pred(&d.kind)).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    /// `User-agent: *` immediately followed by a line starting `Disallow: /`.
    /// Exact spelling and casing; equivalent to a substring match on
    /// `"User-agent: *\nDisallow: /"` over the whole body.
    WildcardDisallowAll,
}

impl AccessRule {
    pub const ACTIVE: [AccessRule; 1] = [AccessRule::WildcardDisallowAll];

    pub fn denies(self, doc: &RobotsDocument) -> bool {
        match self {
            AccessRule::WildcardDisallowAll => doc.directives.windows(2).any(|pair| {
                pair[0].raw.ends_with("User-agent: *") && pair[1].raw.starts_with("Disallow: /")
            }),
        }
    }
}

/// True when no active rule denies access.
pub fn evaluate(doc: &RobotsDocument) -> bool {
    AccessRule::ACTIVE.iter().all(|rule| !rule.denies(doc))
}

/// Fetches robots.txt and decides whether scraping may go ahead. Fails closed.
pub async fn check_policy<E: HttpExecutor>(
    executor: &E,
    robots_url: &str,
    user_agent: &str,
) -> Result<(), PolicyDenial> {
    let request = HttpRequest::get(robots_url).header("User-Agent", user_agent);

    let response = match executor.execute(request).await {
        Ok(r) => r,
        Err(err) => {
            tracing::error!("Error fetching robots.txt: {:#}", err);
            return Err(PolicyDenial::Unreachable(format!("{err:#}")));
        }
    };

    if !response.is_ok() {
        tracing::warn!(
            "Failed fetch - {}. Http status code: {}",
            robots_url,
            response.status
        );
        return Err(PolicyDenial::Status(response.status));
    }

    let doc = RobotsDocument::parse(&response.body);
    tracing::debug!(
        "robots.txt: {} lines, {} user-agent groups, {} disallow rules",
        doc.directives.len(),
        doc.count(|k| matches!(k, DirectiveKind::UserAgent(_))),
        doc.count(|k| matches!(k, DirectiveKind::Disallow(_))),
    );

    if evaluate(&doc) {
        Ok(())
    } else {
        tracing::info!("robots.txt at {} disallows all agents", robots_url);
        Err(PolicyDenial::Disallowed)
    }
}

pub async fn is_allowed<E: HttpExecutor>(executor: &E, robots_url: &str, user_agent: &str) -> bool {
    check_policy(executor, robots_url, user_agent).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(body: &str) -> bool {
        evaluate(&RobotsDocument::parse(body))
    }

    #[test]
    fn blanket_disallow_denies() {
        assert!(!allowed("User-agent: *\nDisallow: /"));
        assert!(!allowed("# comment\nUser-agent: *\nDisallow: /\n"));
    }

    #[test]
    fn substring_semantics_are_kept() {
        // A path disallow under the wildcard still contains the blanket pair.
        assert!(!allowed("User-agent: *\nDisallow: /private"));
        // Anything ending with the agent line counts, as with a substring match.
        assert!(!allowed("X-User-agent: *\nDisallow: /"));
    }

    #[test]
    fn other_layouts_are_allowed() {
        assert!(allowed(""));
        assert!(allowed("User-agent: Googlebot\nDisallow: /private"));
        assert!(allowed("User-agent: *\nAllow: /\nDisallow: /"));
        assert!(allowed("user-agent: *\ndisallow: /"));
        assert!(allowed("User-agent: *\r\nDisallow: /"));
        assert!(allowed("User-agent: *\n\nDisallow: /"));
        assert!(allowed("User-agent: BadBot\nDisallow: /"));
    }

    #[test]
    fn rule_matches_substring_check() {
        let bodies = [
            "",
            "User-agent: *\nDisallow: /",
            "User-agent: *\nDisallow: /admin\nUser-agent: *",
            "Sitemap: https://x/s.xml\nUser-agent: *\nDisallow:",
            "User-agent: *\nDisallow: /\n",
            "User-agent: a\nUser-agent: *\nDisallow: /tmp",
            "Disallow: /\nUser-agent: *",
        ];
        for body in bodies {
            assert_eq!(
                allowed(body),
                !body.contains("User-agent: *\nDisallow: /"),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn directives_are_classified() {
        let doc = RobotsDocument::parse(
            "User-Agent: *\nallow: /a\nDisallow: /b # why\nCrawl-delay: 5\nSitemap: https://x/s.xml\nnoise",
        );
        let kinds: Vec<_> = doc.directives.iter().map(|d| d.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DirectiveKind::UserAgent("*".into()),
                DirectiveKind::Allow("/a".into()),
                DirectiveKind::Disallow("/b".into()),
                DirectiveKind::CrawlDelay("5".into()),
                DirectiveKind::Sitemap("https://x/s.xml".into()),
                DirectiveKind::Other,
            ]
        );
        assert_eq!(doc.count(|k| matches!(k, DirectiveKind::Disallow(_))), 1);
    }
}
