// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server-rendered pages for the roast form
//!
//! All interpolated text goes through maud's escaping.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::roast::{RoastReport, RoastSource};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 720px; margin: 3rem auto; padding: 0 1rem; color: #1d1d1f; }
h1 { font-size: 2rem; margin-bottom: 0.25rem; }
form { display: flex; gap: 0.5rem; margin: 1.5rem 0; }
input[name=url] { flex: 1; padding: 0.6rem; font-size: 1rem; }
button { padding: 0.6rem 1.2rem; font-size: 1rem; cursor: pointer; }
.error { background: #fde8e8; color: #9b1c1c; padding: 0.75rem 1rem; border-radius: 6px; }
.notice { background: #fdf6e3; padding: 0.75rem 1rem; border-radius: 6px; }
.score { font-size: 3rem; font-weight: 700; }
"#;

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body { (body) }
        }
    }
}

fn roast_form(url: &str) -> Markup {
    html! {
        form method="post" action="/" {
            input type="text" name="url" value=(url) placeholder="https://your-landing-page.com" autofocus;
            button type="submit" { "Roast it" }
        }
    }
}

fn bullet_list(heading: &str, items: &[String]) -> Markup {
    html! {
        section {
            h2 { (heading) }
            ul {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}

/// The form page, with an optional error banner and the last submitted URL
pub fn index_page(error: Option<&str>, url: &str) -> Markup {
    layout(
        "Website Roaster",
        html! {
            h1 { "Website Roaster" }
            p { "Paste a landing page URL and get brutally honest feedback on its copy." }
            @if let Some(error) = error {
                p class="error" role="alert" { (error) }
            }
            (roast_form(url))
        },
    )
}

/// The roast page for a successful report
pub fn result_page(report: &RoastReport) -> Markup {
    let roast = &report.roast;
    layout(
        "Roast results",
        html! {
            h1 { "Roast results" }
            p { "For " a href=(report.url) rel="nofollow noopener" { (report.url) } }
            @if report.source == RoastSource::Fallback {
                p class="notice" {
                    "The AI reviewer is unavailable right now, so this is a generic roast."
                }
            }
            p class="score" { (roast.overall_score) "/10" }
            (bullet_list("Main problems", &roast.main_problems))
            (bullet_list("Why people won't convert", &roast.why_people_wont_convert))
            (bullet_list("Headline fixes", &roast.headline_fixes))
            section {
                h2 { "CTA fix" }
                p { (roast.cta_fix) }
            }
            (bullet_list("Quick wins", &roast.quick_wins))
            p class="meta" { "Request " code { (report.request_id) } }
            (roast_form(""))
        },
    )
}
