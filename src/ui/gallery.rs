//! Badge preview page.

use leptos::prelude::*;
use std::sync::Arc;

use crate::connector::ReleaseStage;
use crate::i18n::SharedTranslator;
use crate::theme::SharedTheme;
use crate::ui::components::{ReleaseStageBadge, TOOLTIP_CSS};

/// Column variants shown for each stage, as `(heading, small, tooltip)`.
const VARIANTS: [(&str, bool, bool); 4] = [
    ("Default", false, true),
    ("Small", true, true),
    ("No tooltip", false, false),
    ("Small, no tooltip", true, false),
];

/// Wrap rendered body markup in the page shell.
pub fn html_shell(title: &str, content: &str) -> String {
    let tooltip_css = TOOLTIP_CSS;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Connector release stage badges">
    <title>{title} - Release Stages</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 2rem; }}
        th, td {{ padding: 0.75rem 1rem; text-align: left; }}
        tbody tr {{ border-top: 1px solid #e8e8ed; }}
        th[scope="row"] {{ font-family: monospace; }}
        {tooltip_css}
    </style>
</head>
<body>
    <main id="app">
        {content}
    </main>
</body>
</html>"#
    )
}

/// Table of every known stage in every display variant.
#[component]
pub fn Gallery(
    /// Message lookup.
    i18n: SharedTranslator,
    /// Theme tokens.
    theme: SharedTheme,
) -> impl IntoView {
    let rows = ReleaseStage::KNOWN
        .into_iter()
        .map(|stage| {
            let cells = VARIANTS
                .into_iter()
                .map(|(_, small, tooltip)| {
                    let i18n = Arc::clone(&i18n);
                    let theme = Arc::clone(&theme);
                    let stage = stage.clone();
                    view! {
                        <td>
                            <ReleaseStageBadge
                                i18n=i18n
                                theme=theme
                                stage=stage
                                small=small
                                tooltip=tooltip
                            />
                        </td>
                    }
                })
                .collect_view();

            view! {
                <tr>
                    <th scope="row">
                        {stage.to_string()}
                    </th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    let headings = VARIANTS
        .into_iter()
        .map(|(heading, _, _)| view! { <th>{heading}</th> })
        .collect_view();

    view! {
        <section id="release-stage-gallery">
            <h1>"Connector release stages"</h1>
            <table>
                <thead>
                    <tr>
                        <th>"Stage"</th>
                        {headings}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

/// Render the complete gallery page.
pub fn gallery_page(i18n: SharedTranslator, theme: SharedTheme) -> String {
    let body = view! { <Gallery i18n=i18n theme=theme/> }.to_html();
    html_shell("Gallery", &body)
}
