//! Per-page `<head>` metadata: titles, canonical URLs, Open Graph and
//! Twitter cards, and schema.org JSON-LD.

use chrono::{NaiveDate, SecondsFormat};
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::BlogPost;

pub const SITE_NAME: &str = "Ryan Sharma";
pub const SITE_LOCALE: &str = "en_AU";
pub const SITE_DESCRIPTION: &str = "Quality electronic components for hobbyists, students, and makers. Arduino, Raspberry Pi, sensors, and DIY kits shipped Australia-wide from Sydney.";
pub const TWITTER_CREATOR: &str = "@ehsanghaffar";

/// `%s` is replaced with the page title.
const TITLE_TEMPLATE: &str = "%s | Ryan Sharma";
const POST_DATE_FORMAT: &str = "%b %d, %Y";

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

const SITE_KEYWORDS: [&str; 8] = [
    "Arduino Australia",
    "Raspberry Pi Australia",
    "electronics components",
    "maker supplies",
    "DIY electronics",
    "sensors",
    "ESP32",
    "Seven Hills NSW",
];

#[derive(Debug, Clone, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl OgImage {
    fn new(url: String, alt: impl Into<String>) -> Self {
        Self {
            url,
            width: OG_IMAGE_WIDTH,
            height: OG_IMAGE_HEIGHT,
            alt: alt.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    /// `website` or `article`
    pub kind: &'static str,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: &'static str,
    pub locale: &'static str,
    pub images: Vec<OgImage>,
    pub published_time: Option<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: Option<&'static str>,
}

/// Everything a page template needs for its `<head>`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Full document title, template already applied
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// Serialized JSON-LD, safe to embed in a `<script>` element
    pub structured_data: Option<String>,
}

/// Pages with fixed metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    Home,
    Blog,
    Notes,
    Projects,
    Workbench,
    Introduction,
}

struct PageInfo {
    path: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    og_title: &'static str,
    og_description: &'static str,
    /// Name used for `og-image-{name}.png`
    image: Option<(&'static str, &'static str)>,
}

impl StaticPage {
    fn info(&self) -> PageInfo {
        match self {
            StaticPage::Home => PageInfo {
                path: "",
                title: "Arduino, Raspberry Pi & Electronics Components — Australia",
                description: "Quality electronic components for hobbyists, students, and makers. Arduino, Raspberry Pi, ESP32, sensors, and DIY kits shipped Australia-wide from Sydney.",
                keywords: &SITE_KEYWORDS,
                og_title: "Arduino, Raspberry Pi & Electronics Components — Ryan Sharma",
                og_description: "Quality electronic components for hobbyists, students, and makers. Arduino, Raspberry Pi, ESP32, sensors, and DIY kits shipped Australia-wide from Sydney.",
                image: None,
            },
            StaticPage::Blog => PageInfo {
                path: "/blog",
                title: "Blog",
                description: "Technical articles, electronics tutorials, and maker insights. Arduino, Raspberry Pi, ESP32, and DIY electronics guides from Sydney, Australia.",
                keywords: &[],
                og_title: "Blog — Ryan Sharma",
                og_description: "Electronics tutorials, maker insights, and technical articles.",
                image: Some(("blog", "Ryan Sharma Blog")),
            },
            StaticPage::Notes => PageInfo {
                path: "/notes",
                title: "Lab Notes",
                description: "Technical findings, observations, and thoughts from the workbench.",
                keywords: &[],
                og_title: "Lab Notes — Ryan Sharma",
                og_description: "Technical findings, observations, and thoughts from the workbench.",
                image: Some(("notes", "Ryan Sharma Lab Notes")),
            },
            StaticPage::Projects => PageInfo {
                path: "/projects",
                title: "Projects",
                description: "Explore open source projects, electronics builds, and maker tools. From Arduino and Raspberry Pi projects to web applications and DIY electronics.",
                keywords: &[
                    "open source",
                    "Arduino projects",
                    "Raspberry Pi projects",
                    "electronics builds",
                    "maker tools",
                ],
                og_title: "Projects — Ryan Sharma",
                og_description: "Open source projects, electronics builds, and maker tools.",
                image: Some(("projects", "Ryan Sharma Projects")),
            },
            StaticPage::Workbench => PageInfo {
                path: "/workbench",
                title: "Workbench",
                description: "Active experiments, prototypes, and electronics work in progress. A peek into the digital workshop where ideas take shape.",
                keywords: &[
                    "experiments",
                    "prototypes",
                    "work in progress",
                    "electronics projects",
                    "maker builds",
                ],
                og_title: "Workbench — Ryan Sharma",
                og_description: "Active experiments, prototypes, and electronics work in progress.",
                image: Some(("workbench", "Ryan Sharma Workbench")),
            },
            StaticPage::Introduction => PageInfo {
                path: "/introduction",
                title: "Introduction",
                description: "A digital workshop and portfolio for building in public: open source projects, lab notes and experiments from the workbench.",
                keywords: &["building in public", "developer portfolio", "open source"],
                og_title: "Introduction — Ryan Sharma",
                og_description: "Where code meets creativity: a developer's digital workshop.",
                image: None,
            },
        }
    }
}

/// Apply the site title template. `None` gives the bare site name.
pub fn page_title(title: Option<&str>) -> String {
    match title {
        Some(title) if !title.is_empty() => TITLE_TEMPLATE.replace("%s", title),
        _ => SITE_NAME.to_string(),
    }
}

/// Metadata for one of the fixed pages. The home page also carries the
/// store's JSON-LD.
pub fn for_page(page: StaticPage, base_url: &str) -> Result<PageMeta, AppError> {
    let info = page.info();
    let canonical = format!("{}{}", base_url, info.path);

    let images: Vec<OgImage> = info
        .image
        .map(|(name, alt)| OgImage::new(format!("{}/og-image-{}.png", base_url, name), alt))
        .into_iter()
        .collect();

    let structured_data = match page {
        StaticPage::Home => Some(json_ld(&website_structured_data(base_url))?),
        _ => None,
    };

    Ok(PageMeta {
        title: page_title(Some(info.title)),
        description: info.description.to_string(),
        keywords: info.keywords.iter().map(|k| k.to_string()).collect(),
        authors: vec![SITE_NAME.to_string()],
        canonical: canonical.clone(),
        twitter: TwitterCard {
            card: "summary_large_image",
            title: info.og_title.to_string(),
            description: info.og_description.to_string(),
            images: images.iter().map(|i| i.url.clone()).collect(),
            creator: None,
        },
        open_graph: OpenGraph {
            kind: "website",
            url: canonical,
            title: info.og_title.to_string(),
            description: info.og_description.to_string(),
            site_name: SITE_NAME,
            locale: SITE_LOCALE,
            images,
            published_time: None,
            authors: Vec::new(),
            tags: Vec::new(),
        },
        structured_data,
    })
}

/// Article metadata for a blog post, including its `BlogPosting` JSON-LD.
pub fn for_post(post: &BlogPost, base_url: &str) -> Result<PageMeta, AppError> {
    let post_url = format!("{}/blog/{}", base_url, post.slug);
    let image_url = format!("{}/og-images/{}.png", base_url, post.slug);
    let structured = blog_post_structured_data(post, base_url);

    Ok(PageMeta {
        title: page_title(Some(&post.title)),
        description: post.excerpt.clone(),
        keywords: post.tags.clone(),
        authors: vec![post.author.name.clone()],
        canonical: post_url.clone(),
        open_graph: OpenGraph {
            kind: "article",
            url: post_url,
            title: post.title.clone(),
            description: post.excerpt.clone(),
            site_name: SITE_NAME,
            locale: SITE_LOCALE,
            images: vec![OgImage::new(image_url.clone(), post.title.clone())],
            published_time: published_at(&post.date),
            authors: vec![post.author.name.clone()],
            tags: post.tags.clone(),
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: post.title.clone(),
            description: post.excerpt.clone(),
            images: vec![image_url],
            creator: Some(TWITTER_CREATOR),
        },
        structured_data: Some(json_ld(&structured)?),
    })
}

/// Metadata for the not-found and error pages; canonical points home.
pub fn for_status_page(title: &str, base_url: &str) -> PageMeta {
    let home = format!("{}/", base_url);
    PageMeta {
        title: page_title(Some(title)),
        description: SITE_DESCRIPTION.to_string(),
        keywords: Vec::new(),
        authors: vec![SITE_NAME.to_string()],
        canonical: home.clone(),
        open_graph: OpenGraph {
            kind: "website",
            url: home,
            title: SITE_NAME.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            site_name: SITE_NAME,
            locale: SITE_LOCALE,
            images: Vec::new(),
            published_time: None,
            authors: Vec::new(),
            tags: Vec::new(),
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: SITE_NAME.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            images: Vec::new(),
            creator: None,
        },
        structured_data: None,
    }
}

/// Display date (`Apr 28, 2025`) as ISO-8601 UTC midnight.
pub fn published_at(date: &str) -> Option<String> {
    match NaiveDate::parse_from_str(date.trim(), POST_DATE_FORMAT) {
        Ok(day) => Some(
            day.and_hms_opt(0, 0, 0)?
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        Err(e) => {
            tracing::warn!(date, error = %e, "Unparseable post date");
            None
        }
    }
}

/// schema.org `BlogPosting` for a post.
pub fn blog_post_structured_data(post: &BlogPost, base_url: &str) -> Value {
    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.excerpt,
        "url": format!("{}/blog/{}", base_url, post.slug),
        "author": {
            "@type": "Person",
            "name": post.author.name,
        },
        "keywords": post.tags.join(", "),
    });

    if let Some(published) = published_at(&post.date) {
        data["datePublished"] = Value::String(published);
    }

    data
}

/// schema.org `Store` for the site itself.
pub fn website_structured_data(url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Store",
        "name": SITE_NAME,
        "description": SITE_DESCRIPTION,
        "url": url,
        "telephone": "+61400213791",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Seven Hills",
            "addressRegion": "NSW",
            "postalCode": "2147",
            "addressCountry": "AU",
        },
    })
}

/// Serialize JSON-LD for a `<script>` element; `</` is escaped so content
/// cannot close the element early.
pub fn json_ld(value: &Value) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const BASE: &str = "https://rsmakes.com";

    #[test]
    fn test_page_title_template() {
        assert_eq!(page_title(Some("Blog")), "Blog | Ryan Sharma");
        assert_eq!(page_title(None), "Ryan Sharma");
        assert_eq!(page_title(Some("")), "Ryan Sharma");
    }

    #[test]
    fn test_published_at() {
        assert_eq!(
            published_at("Apr 28, 2025").as_deref(),
            Some("2025-04-28T00:00:00.000Z")
        );
        assert_eq!(
            published_at("Oct 5, 2024").as_deref(),
            Some("2024-10-05T00:00:00.000Z")
        );
        assert_eq!(published_at("someday"), None);
    }

    #[test]
    fn test_static_page_meta() {
        let meta = for_page(StaticPage::Projects, BASE).unwrap();
        assert_eq!(meta.title, "Projects | Ryan Sharma");
        assert_eq!(meta.canonical, "https://rsmakes.com/projects");
        assert_eq!(
            meta.open_graph.images[0].url,
            "https://rsmakes.com/og-image-projects.png"
        );
        assert_eq!(meta.twitter.images, vec!["https://rsmakes.com/og-image-projects.png"]);
        assert!(meta.structured_data.is_none());
    }

    #[test]
    fn test_home_meta_has_store_json_ld() {
        let meta = for_page(StaticPage::Introduction, BASE).unwrap();
        assert_eq!(meta.title, "Introduction | Ryan Sharma");
        assert_eq!(meta.canonical, "https://rsmakes.com/introduction");
        assert!(meta.structured_data.is_none());

        let meta = for_page(StaticPage::Home, BASE).unwrap();
        assert_eq!(meta.canonical, BASE);
        assert!(meta.open_graph.images.is_empty());

        let ld: Value = serde_json::from_str(meta.structured_data.as_deref().unwrap()).unwrap();
        assert_eq!(ld["@type"], "Store");
        assert_eq!(ld["address"]["postalCode"], "2147");
        assert_eq!(ld["url"], BASE);
    }

    #[test]
    fn test_post_meta() {
        let catalog = Catalog::seeded();
        let post = catalog.get_post_by_slug("rust-wasm-performance").unwrap();
        let meta = for_post(post, BASE).unwrap();

        assert_eq!(meta.canonical, "https://rsmakes.com/blog/rust-wasm-performance");
        assert_eq!(meta.open_graph.kind, "article");
        assert_eq!(
            meta.open_graph.images[0].url,
            "https://rsmakes.com/og-images/rust-wasm-performance.png"
        );
        assert_eq!(meta.open_graph.images[0].width, 1200);
        assert_eq!(meta.open_graph.images[0].height, 630);
        assert_eq!(
            meta.open_graph.published_time.as_deref(),
            Some("2024-09-18T00:00:00.000Z")
        );
        assert_eq!(meta.twitter.creator, Some("@ehsanghaffar"));
    }

    #[test]
    fn test_blog_posting_json_ld() {
        let catalog = Catalog::seeded();
        let post = catalog.get_post_by_slug("mcp-protocol-llm-applications").unwrap();
        let data = blog_post_structured_data(post, BASE);

        assert_eq!(data["@context"], "https://schema.org");
        assert_eq!(data["@type"], "BlogPosting");
        assert_eq!(data["headline"], post.title.as_str());
        assert_eq!(data["description"], post.excerpt.as_str());
        assert_eq!(data["url"], "https://rsmakes.com/blog/mcp-protocol-llm-applications");
        assert_eq!(data["datePublished"], "2025-04-28T00:00:00.000Z");
        assert_eq!(data["author"]["@type"], "Person");
        assert_eq!(data["author"]["name"], "Ehsan Ghaffar");
        assert_eq!(data["keywords"], "llm, rag, mcp");
    }

    #[test]
    fn test_json_ld_escapes_script_close() {
        let value = json!({ "headline": "</script><b>" });
        let encoded = json_ld(&value).unwrap();
        assert!(!encoded.contains("</script>"));

        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["headline"], "</script><b>");
    }
}
