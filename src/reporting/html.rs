//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders the visual diff report: a page listing every failed
//! screenshot comparison with its expected, actual and diff images, or a
//! success page when there are none.
//!
//! 此模块渲染视觉差异报告：列出每个失败的截图比较及其预期、实际和差异图像的页面；
//! 若没有差异则渲染成功页面。

use anyhow::Result;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

use crate::infra::fs::write_atomic;
use crate::infra::t;
use crate::reporting::visual::{VisualDiff, relative_href};

/// Embedded CSS styles for the visual diff report / 视觉差异报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/visual-report.css");

/// Renders the report page. Image links are made relative to `image_base`,
/// the directory the page will be written to.
///
/// 渲染报告页面。图像链接相对于 `image_base`（页面将写入的目录）。
pub fn render_visual_report(
    diffs: &[VisualDiff],
    image_base: &Path,
    generated_at: &str,
    locale: &str,
) -> Markup {
    let generated = t!("html_report.generated", locale = locale, time = generated_at).to_string();
    let html_lang = locale.split('-').next().unwrap_or("en");

    if diffs.is_empty() {
        let title = t!("html_report.passed_title", locale = locale).to_string();
        return html! {
            (DOCTYPE)
            html lang=(html_lang) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (PreEscaped(HTML_STYLE)) }
                }
                body {
                    div.success {
                        h1 { "✅ " (t!("html_report.passed_header", locale = locale).to_string()) }
                        p { (t!("html_report.passed_body", locale = locale).to_string()) }
                        p { small { (generated) } }
                    }
                }
            }
        };
    }

    let title = t!("html_report.diff_title", locale = locale, count = diffs.len()).to_string();
    let expected_label = t!("html_report.expected", locale = locale).to_string();
    let actual_label = t!("html_report.actual", locale = locale).to_string();
    let diff_label = t!("html_report.difference", locale = locale).to_string();
    let test_label = t!("html_report.test", locale = locale).to_string();

    html! {
        (DOCTYPE)
        html lang=(html_lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                div.header {
                    h1 { "⚠️ " (t!("html_report.diff_header", locale = locale).to_string()) }
                    div.meta {
                        strong { (diffs.len()) }
                        " " (t!("html_report.diff_count", locale = locale).to_string())
                        br;
                        (generated)
                    }
                }
                @for diff in diffs {
                    div.diff-container {
                        div.diff-header {
                            h2 { (diff.name) }
                            div.test-name { (test_label) ": " (diff.test) }
                        }
                        div.images-grid {
                            @if let Some(expected) = &diff.expected {
                                div.image-box.expected {
                                    h3 { (expected_label) }
                                    img src=(relative_href(image_base, expected)) alt="Expected";
                                }
                            }
                            @if let Some(actual) = &diff.actual {
                                div.image-box.actual {
                                    h3 { (actual_label) }
                                    img src=(relative_href(image_base, actual)) alt="Actual";
                                }
                            }
                            div.image-box.diff {
                                h3 { (diff_label) }
                                img src=(relative_href(image_base, &diff.diff)) alt="Diff";
                            }
                        }
                    }
                }
                div.footer {
                    p { "📊 " (t!("html_report.footer", locale = locale).to_string()) }
                }
            }
        }
    }
}

/// Renders and writes the visual diff report to `output_path`.
///
/// # Errors
/// Fails when the output directory cannot be created or the file cannot be
/// written.
pub fn generate_visual_report(
    diffs: &[VisualDiff],
    output_path: &Path,
    generated_at: &str,
    locale: &str,
) -> Result<()> {
    let base = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    crate::infra::fs::ensure_dir(base)?;
    let markup = render_visual_report(diffs, base, generated_at, locale);
    write_atomic(output_path, markup.into_string().as_bytes())
}
