/// Wraps a formatted review fragment in a self-contained preview page.
///
/// The fragment's class vocabulary is Tailwind's, the same framework the
/// dashboard pages load, so the preview pulls it from the CDN instead of
/// shipping a stylesheet.
pub fn render_page(title: &str, fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100">
    <div class="max-w-3xl mx-auto my-8 bg-white rounded-lg shadow p-6">
{fragment}
    </div>
</body>
</html>
"#,
        title = html_escape::encode_safe(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_fragment_and_single_doctype() {
        let fragment = r#"<p class="text-gray-700 text-sm my-1">hello</p>"#;
        let page = render_page("Review Report", fragment);

        assert!(page.contains(fragment));
        assert_eq!(page.matches("<!DOCTYPE html>").count(), 1);
        assert!(page.contains("<title>Review Report</title>"));
    }

    #[test]
    fn page_title_is_escaped() {
        let page = render_page("a <b> c", "");
        assert!(!page.contains("<title>a <b> c</title>"));
        assert!(page.contains("a &lt;b&gt; c"));
    }
}
