//! Renderer hand-off object.
//!
//! Converts `SiteConfig` into the shape the documentation renderer reads:
//!
//! ```json
//! {
//!   "title": "…", "description": "…", "lang": "zh-CN", "base": "/",
//!   "cleanUrls": true,
//!   "head": [["link", { "rel": "icon", "href": "/favicon.ico" }]],
//!   "lastUpdated": true,
//!   "themeConfig": {
//!     "nav": [{ "text": "…", "link": "…" }],
//!     "sidebar": { "/api/": [{ "text": "…", "collapsed": false, "items": [] }] },
//!     "socialLinks": [{ "icon": "github", "link": "…" }],
//!     "search": { "provider": "local", "options": { "locales": { "root": { "translations": {} } } } },
//!     "outline": { "level": [2, 3], "label": "…" },
//!     "lastUpdated": { "text": "…", "formatOptions": { "dateStyle": "short", "timeStyle": "medium" } },
//!     "footer": { "message": "…" },
//!     "docFooter": { "prev": "…", "next": "…" }
//!   }
//! }
//! ```
//!
//! Key order follows the config (`serde_json` is built with `preserve_order`).

use serde_json::{Map, Value, json};

use crate::config::{
    HeadTag, NavItem, SearchConfig, SidebarMap, SidebarSection, SiteConfig,
    section::{SearchKey, SearchProvider, SearchStrings},
};

/// Build the renderer object for a validated config.
pub fn to_renderer_json(config: &SiteConfig) -> Value {
    let site = &config.site;

    let mut root = Map::new();
    root.insert("title".into(), json!(site.title));
    root.insert("description".into(), json!(site.description));
    root.insert("lang".into(), json!(site.lang));
    root.insert("base".into(), json!(site.base));
    root.insert("cleanUrls".into(), json!(site.clean_urls));
    root.insert(
        "head".into(),
        Value::Array(config.head.iter().map(head_tag).collect()),
    );
    root.insert("lastUpdated".into(), json!(config.last_updated.enable));
    root.insert("themeConfig".into(), theme_config(config));

    Value::Object(root)
}

fn theme_config(config: &SiteConfig) -> Value {
    let mut theme = Map::new();

    theme.insert("nav".into(), nav_items(&config.nav));
    theme.insert("sidebar".into(), sidebar(&config.sidebar));
    theme.insert(
        "socialLinks".into(),
        config
            .social_links
            .iter()
            .map(|s| json!({ "icon": s.icon.as_str(), "link": s.link }))
            .collect(),
    );
    theme.insert("search".into(), search(&config.search));

    let outline = &config.outline;
    theme.insert(
        "outline".into(),
        json!({
            "level": [outline.level.min, outline.level.max],
            "label": outline.label,
        }),
    );

    let last = &config.last_updated;
    if last.enable {
        theme.insert(
            "lastUpdated".into(),
            json!({
                "text": last.text,
                "formatOptions": {
                    "dateStyle": last.date_style.as_str(),
                    "timeStyle": last.time_style.as_str(),
                },
            }),
        );
    }

    if !config.footer.is_empty() {
        theme.insert("footer".into(), json!(config.footer));
    }
    if !config.doc_footer.is_empty() {
        theme.insert("docFooter".into(), json!(config.doc_footer));
    }

    Value::Object(theme)
}

/// `[tag, attrs]`, or `[tag, attrs, content]` for inline content.
fn head_tag(tag: &HeadTag) -> Value {
    let attrs: Map<String, Value> = tag
        .attrs
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    let mut entry = vec![json!(tag.tag), Value::Object(attrs)];
    if let Some(content) = &tag.content {
        entry.push(json!(content));
    }
    Value::Array(entry)
}

fn nav_items(items: &[NavItem]) -> Value {
    items
        .iter()
        .map(|item| json!({ "text": item.text, "link": item.link }))
        .collect()
}

fn sidebar(map: &SidebarMap) -> Value {
    let entries = map
        .iter()
        .map(|(prefix, sections)| (prefix.to_string(), sidebar_sections(sections)))
        .collect::<Map<_, _>>();
    Value::Object(entries)
}

fn sidebar_sections(sections: &[SidebarSection]) -> Value {
    sections
        .iter()
        .map(|section| {
            json!({
                "text": section.text,
                "collapsed": section.collapsed,
                "items": nav_items(&section.items),
            })
        })
        .collect()
}

fn search(config: &SearchConfig) -> Value {
    match (config.provider, &config.algolia) {
        (SearchProvider::Algolia, Some(algolia)) => json!({
            "provider": "algolia",
            "options": {
                "appId": algolia.app_id,
                "apiKey": algolia.api_key,
                "indexName": algolia.index_name,
            },
        }),
        _ => {
            let locales = config
                .locales
                .iter()
                .map(|(locale, strings)| {
                    (locale.clone(), json!({ "translations": translations(strings) }))
                })
                .collect::<Map<_, _>>();

            json!({
                "provider": SearchProvider::Local.as_str(),
                "options": { "locales": locales },
            })
        }
    }
}

/// Only overridden keys are emitted; the renderer fills the rest itself.
fn translations(strings: &SearchStrings) -> Value {
    let mut out = Map::new();
    for key in SearchKey::ALL {
        if let Some(text) = strings.get(key) {
            insert_path(&mut out, key.renderer_path(), text);
        }
    }
    Value::Object(out)
}

fn insert_path(obj: &mut Map<String, Value>, path: &[&str], text: &str) {
    match path {
        [] => {}
        [leaf] => {
            obj.insert(leaf.to_string(), json!(text));
        }
        [parent, rest @ ..] => {
            let child = obj
                .entry(parent.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(child) = child {
                insert_path(child, rest, text);
            }
        }
    }
}
