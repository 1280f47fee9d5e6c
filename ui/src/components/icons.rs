//! Inline SVG icons (stroke style, 24×24 grid).

use dioxus::prelude::*;

pub use crate::core::content::IconKind;

#[component]
pub fn Icon(kind: IconKind, #[props(default = "icon".to_string(), into)] class: String) -> Element {
    rsx! {
        svg {
            class,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph(kind)}
        }
    }
}

fn glyph(kind: IconKind) -> Element {
    match kind {
        IconKind::Briefcase => rsx! {
            rect { x: "2", y: "7", width: "20", height: "14", rx: "2" }
            path { d: "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
        },
        IconKind::Zap => rsx! {
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        },
        IconKind::Shield => rsx! {
            path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
        },
        IconKind::Code => rsx! {
            polyline { points: "16 18 22 12 16 6" }
            polyline { points: "8 6 2 12 8 18" }
        },
        IconKind::Server => rsx! {
            rect { x: "2", y: "2", width: "20", height: "8", rx: "2" }
            rect { x: "2", y: "14", width: "20", height: "8", rx: "2" }
            line { x1: "6", y1: "6", x2: "6.01", y2: "6" }
            line { x1: "6", y1: "18", x2: "6.01", y2: "18" }
        },
        IconKind::Database => rsx! {
            ellipse { cx: "12", cy: "5", rx: "9", ry: "3" }
            path { d: "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5" }
            path { d: "M3 12c0 1.66 4 3 9 3s9-1.34 9-3" }
        },
        IconKind::Terminal => rsx! {
            polyline { points: "4 17 10 11 4 5" }
            line { x1: "12", y1: "19", x2: "20", y2: "19" }
        },
        IconKind::Mail => rsx! {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-10 6L2 7" }
        },
        IconKind::Phone => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        IconKind::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        IconKind::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        IconKind::GraduationCap => rsx! {
            path { d: "M22 10 12 5 2 10l10 5 10-5z" }
            path { d: "M6 12v5c3 3 9 3 12 0v-5" }
        },
        IconKind::School => rsx! {
            path { d: "m4 6 8-4 8 4" }
            path { d: "m18 10 4 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-8l4-2" }
            path { d: "M18 5v17" }
            path { d: "M6 5v17" }
            circle { cx: "12", cy: "9", r: "2" }
        },
        IconKind::Send => rsx! {
            line { x1: "22", y1: "2", x2: "11", y2: "13" }
            polygon { points: "22 2 15 22 11 13 2 9 22 2" }
        },
        IconKind::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        IconKind::MessageCircle => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22z" }
        },
        IconKind::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        IconKind::Menu => rsx! {
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        },
        IconKind::Close => rsx! {
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(non_snake_case)]
    fn MenuIcons() -> Element {
        rsx! {
            Icon { kind: IconKind::Menu, class: "navbar__toggle-icon" }
            Icon { kind: IconKind::Close }
        }
    }

    #[test]
    fn icons_render_as_inline_svg() {
        let mut dom = VirtualDom::new(MenuIcons);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("<svg").count(), 2, "{html}");
        assert!(html.contains(r#"class="navbar__toggle-icon""#));
        assert!(html.contains(r#"class="icon""#));
    }
}
