pub const APP_JS: &str = include_str!("../static/app.js");

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn index_page() -> &'static str {
    INDEX_HTML
}

/// Result page for a form submission: the generated image on success, the
/// failure message otherwise. Both inputs are server-produced strings.
pub fn scan_page(outcome: Result<&str, &str>) -> String {
    let body = match outcome {
        Ok(data_url) => format!(r#"<img class="qr" src="{data_url}" alt="QR code" />"#),
        Err(message) => format!(r#"<p class="error">{message}</p>"#),
    };
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>QR Code — result</title>
</head>
<body>
  <main class="card">
    <h1>Your QR code</h1>
    {body}
    <p><a href="/">&larr; Generate another</a></p>
  </main>
</body>
</html>
"#
    )
}
