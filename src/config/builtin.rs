//! Compiled-in site configuration for the Dida365 API reference.
//!
//! This is what `SiteConfig::load()` returns when no `docsite.toml` is
//! used, and what `docsite init` writes out as a starting point.

use super::SiteConfig;
use super::section::{
    DocFooterConfig, FooterConfig, FormatStyle, HeadTag, HeadingLevels, LastUpdatedConfig,
    NavItem, OutlineConfig, SearchConfig, SearchKey, SearchProvider, SearchStrings,
    SidebarMap, SidebarSection, SiteMetadata, SocialIcon, SocialLink, search::ROOT_LOCALE,
};

/// Build the site literals. Pure: every call yields an equal value.
pub fn site() -> SiteConfig {
    SiteConfig {
        site: SiteMetadata {
            title: "滴答清单 API".into(),
            description: "滴答清单 Web 端 API 封装接口文档".into(),
            lang: "zh-CN".into(),
            base: "/".into(),
            clean_urls: true,
        },
        head: head(),
        nav: nav(),
        sidebar: sidebar(),
        social_links: vec![SocialLink::new(
            SocialIcon::Github,
            "https://github.com/dida365-api/dida365-api",
        )],
        search: search(),
        outline: OutlineConfig {
            level: HeadingLevels::new(2, 3),
            label: "页面导航".into(),
        },
        last_updated: LastUpdatedConfig {
            enable: true,
            text: "最后更新于".into(),
            date_style: FormatStyle::Short,
            time_style: FormatStyle::Medium,
        },
        footer: FooterConfig {
            message: Some("基于 MIT 许可发布".into()),
            copyright: Some("Copyright © 2024-present 滴答清单 API".into()),
        },
        doc_footer: DocFooterConfig {
            prev: Some("上一页".into()),
            next: Some("下一页".into()),
        },
    }
}

fn head() -> Vec<HeadTag> {
    vec![
        HeadTag::new("link", [("rel", "icon"), ("href", "/favicon.ico")]),
        HeadTag::new("meta", [("name", "theme-color"), ("content", "#4772fa")]),
        HeadTag::new("meta", [("property", "og:type"), ("content", "website")]),
        HeadTag::new("meta", [("property", "og:title"), ("content", "滴答清单 API")]),
    ]
}

fn nav() -> Vec<NavItem> {
    vec![
        NavItem::new("首页", "/"),
        NavItem::new("指南", "/guide/getting-started"),
        NavItem::new("API 参考", "/api/"),
        NavItem::new("滴答清单", "https://dida365.com"),
    ]
}

fn sidebar() -> SidebarMap {
    let mut map = SidebarMap::new();

    map.insert(
        "/guide/",
        vec![SidebarSection::new(
            "指南",
            vec![
                NavItem::new("快速开始", "/guide/getting-started"),
                NavItem::new("配置说明", "/guide/configuration"),
                NavItem::new("认证流程", "/guide/authentication"),
            ],
        )],
    );

    map.insert(
        "/api/",
        vec![
            SidebarSection::new(
                "概览",
                vec![
                    NavItem::new("接口总览", "/api/"),
                    NavItem::new("系统信息", "/api/system"),
                ],
            ),
            SidebarSection::new(
                "认证",
                vec![
                    NavItem::new("微信扫码登录", "/api/auth/wechat-login"),
                    NavItem::new("密码登录", "/api/auth/password-login"),
                ],
            ),
            SidebarSection::new(
                "任务与项目",
                vec![
                    NavItem::new("任务管理", "/api/tasks"),
                    NavItem::new("项目管理", "/api/projects"),
                ],
            ),
            SidebarSection::new(
                "统计与专注",
                vec![
                    NavItem::new("统计分析", "/api/statistics"),
                    NavItem::new("番茄专注", "/api/pomodoros"),
                    NavItem::new("正计时专注", "/api/pomodoros/stopwatch"),
                    NavItem::new("习惯管理", "/api/habits"),
                ],
            )
            .collapsed(),
            SidebarSection::new(
                "用户与导出",
                vec![
                    NavItem::new("用户信息", "/api/users"),
                    NavItem::new("数据导出", "/api/export"),
                ],
            )
            .collapsed(),
        ],
    );

    map.insert(
        "/api/auth/",
        vec![
            SidebarSection::new(
                "认证",
                vec![
                    NavItem::new("认证概览", "/api/auth/"),
                    NavItem::new("微信扫码登录", "/api/auth/wechat-login"),
                    NavItem::new("密码登录", "/api/auth/password-login"),
                    NavItem::new("会话状态", "/api/auth/session"),
                ],
            ),
            SidebarSection::new("返回", vec![NavItem::new("API 参考", "/api/")]),
        ],
    );

    map
}

fn search() -> SearchConfig {
    let mut root = SearchStrings::default();
    let strings = [
        (SearchKey::ButtonText, "搜索文档"),
        (SearchKey::ButtonAriaLabel, "搜索文档"),
        (SearchKey::NoResultsText, "无法找到相关结果"),
        (SearchKey::ResetButtonTitle, "清除查询条件"),
        (SearchKey::SelectText, "选择"),
        (SearchKey::NavigateText, "切换"),
        (SearchKey::CloseText, "关闭"),
    ];
    for (key, value) in strings {
        root.set(key, value);
    }

    SearchConfig {
        provider: SearchProvider::Local,
        locales: [(ROOT_LOCALE.to_string(), root)].into_iter().collect(),
        algolia: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let diag = site().diagnose();
        assert!(diag.is_empty(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_builtin_is_deterministic() {
        assert_eq!(site(), site());
    }

    #[test]
    fn test_builtin_auth_sidebar() {
        let config = site();
        let (prefix, sections) = config.sidebar.resolve("/api/auth/password-login").unwrap();
        assert_eq!(prefix, "/api/auth/");
        assert_eq!(sections[0].text, "认证");
    }

    #[test]
    fn test_builtin_partial_search_strings() {
        let strings = site().search.strings_for(ROOT_LOCALE);
        assert_eq!(strings.get(SearchKey::ButtonText), "搜索文档");
        // Not overridden in the literals
        assert_eq!(strings.get(SearchKey::DisplayDetails), "Display detailed list");
    }
}
