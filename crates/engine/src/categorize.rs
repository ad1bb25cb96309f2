//! Domain → category classification.
//!
//! Domains are matched against curated site lists using substring-contains
//! semantics, so subdomains like `gist.github.com` match `github.com`
//! without any extra bookkeeping. Domains that miss every list fall back to
//! their registrable parent (`a.b.example.com` → `example.com`) before
//! giving up with [`Category::Other`].

use tabgrid_types::Category;

use crate::domain::MISC_DOMAIN;

const SOCIAL_SITES: &[&str] = &[
    "twitter.com",
    "facebook.com",
    "instagram.com",
    "linkedin.com",
    "reddit.com",
    "tiktok.com",
];
const WORK_SITES: &[&str] = &[
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    "atlassian.net",
    "slack.com",
    "notion.so",
];
const DEV_SITES: &[&str] = &[
    "stackoverflow.com",
    "stackexchange.com",
    "dev.to",
    "medium.com",
    "css-tricks.com",
    "mdn.io",
];
const MEDIA_SITES: &[&str] = &["youtube.com", "vimeo.com", "netflix.com", "twitch.tv", "spotify.com"];
const SHOPPING_SITES: &[&str] = &["amazon.com", "ebay.com", "etsy.com", "aliexpress.com"];

/// Lists checked in order; the first list with any member contained in the
/// domain wins.
const CURATED_LISTS: &[(&[&str], Category)] = &[
    (SOCIAL_SITES, Category::Social),
    (WORK_SITES, Category::Work),
    (DEV_SITES, Category::Development),
    (MEDIA_SITES, Category::Media),
    (SHOPPING_SITES, Category::Shopping),
];

/// Classifies a normalized domain into one of the fixed categories.
///
/// Empty input and the [`MISC_DOMAIN`] sentinel map straight to
/// [`Category::Other`]. The registrable-domain fallback runs as a bounded
/// loop (at most one step per label) so adversarial input cannot recurse
/// unboundedly; each step strictly shortens the candidate.
pub fn classify_domain(domain: &str) -> Category {
    if domain.is_empty() || domain == MISC_DOMAIN {
        return Category::Other;
    }

    let mut candidate = domain.to_lowercase();
    let max_steps = candidate.split('.').count();
    for _ in 0..max_steps {
        if let Some(category) = match_curated(&candidate) {
            return category;
        }
        let labels: Vec<&str> = candidate.split('.').collect();
        if labels.len() <= 2 {
            break;
        }
        candidate = labels[labels.len() - 2..].join(".");
    }
    Category::Other
}

fn match_curated(domain: &str) -> Option<Category> {
    CURATED_LISTS
        .iter()
        .find(|(sites, _)| sites.iter().any(|site| domain.contains(site)))
        .map(|(_, category)| *category)
}
