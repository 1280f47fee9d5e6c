//! Sanity checks over the embedded `content/portfolio.json`.
//!
//! The file is parsed lazily at runtime, so a typo would otherwise only show
//! up as the "content unavailable" notice in a running build.

use ui::core::content::{portfolio, ProjectCategory};
use ui::core::nav::{selected_item, NAV_ITEMS};

#[test]
fn embedded_portfolio_loads() {
    if let Err(err) = portfolio() {
        panic!("embedded portfolio failed to load: {err}");
    }
}

#[test]
fn site_config_is_filled_in() {
    let site = &portfolio().unwrap().site;
    for (field, value) in [
        ("brand", &site.brand),
        ("owner", &site.owner),
        ("title", &site.title),
        ("email", &site.email),
    ] {
        assert!(!value.trim().is_empty(), "site.{field} is empty");
    }
    assert!(site.email.contains('@'), "site.email looks wrong: {}", site.email);
    assert!(site.github_url.starts_with("https://"));
}

#[test]
fn every_page_has_content() {
    let p = portfolio().unwrap();
    assert!(!p.work.is_empty(), "no work entries");
    assert!(!p.education.is_empty(), "no education entries");
    assert!(!p.projects_in(ProjectCategory::Professional).is_empty());
    assert!(!p.projects_in(ProjectCategory::Academic).is_empty());
    assert!(!p.skills.is_empty(), "no skill groups");
    assert!(!p.contacts.is_empty(), "no contact channels");
}

#[test]
fn timelines_are_most_recent_first() {
    let p = portfolio().unwrap();
    for timeline in [p.work_timeline(), p.education_timeline()] {
        for pair in timeline.windows(2) {
            assert!(
                pair[0].period.start >= pair[1].period.start,
                "{} listed before newer {}",
                pair[0].title,
                pair[1].title
            );
        }
    }
}

#[test]
fn external_contacts_open_in_new_tab() {
    for channel in &portfolio().unwrap().contacts {
        let expected = if channel.external { "_blank" } else { "_self" };
        assert_eq!(channel.target(), expected, "{}", channel.title);
        assert!(!channel.href.is_empty(), "{} has no href", channel.title);
    }
}

#[test]
fn navigation_covers_every_page() {
    let hrefs: Vec<_> = NAV_ITEMS.iter().map(|item| item.href).collect();
    assert_eq!(
        hrefs,
        ["/", "/experience", "/projects", "/skills", "/contact"]
    );
    for href in hrefs {
        assert_eq!(selected_item(&NAV_ITEMS, href).map(|i| i.href), Some(href));
    }
}
