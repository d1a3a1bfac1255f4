//! HTML page rendering
//!
//! Every page shares [`layout`]; user-supplied text is always passed through
//! [`escape_html`] before it reaches the markup.

use crate::types::{AnalysisResult, Language};

/// Escape text for safe inclusion in HTML element content and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page content in the shared document shell
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - sumweb</title>
    <link rel="stylesheet" href="/static/sumweb.css">
</head>
<body>
    <header>
        <h1>sumweb</h1>
        <nav>
            <a href="/">Home</a>
            <a href="/about">About</a>
            <a href="/testcases">Test Cases</a>
            <a href="/download">History</a>
        </nav>
    </header>
    <main>
{content}
    </main>
    <footer>sumweb-server v{version}</footer>
</body>
</html>
"#,
        title = escape_html(title),
        content = content,
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// `<option>` list for the language picker with `selected` preselected
fn language_options(selected: &str) -> String {
    Language::ALL
        .iter()
        .map(|lang| {
            let marker = if lang.as_str() == selected { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{marker}>{label}</option>"#,
                value = lang.as_str(),
                marker = marker,
                label = lang.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

/// Landing page: paste text or upload a document
pub fn index_page() -> String {
    let content = format!(
        r#"        <section>
            <h2>Summarize text</h2>
            <form action="/analyze" method="post">
                <textarea name="rawtext" placeholder="Paste the text to summarize..."></textarea>
                <label for="language">Language</label>
                <select id="language" name="language">
                {options}
                </select>
                <button class="button" type="submit">Summarize</button>
            </form>
        </section>
        <section>
            <h2>Summarize a document</h2>
            <form action="/upload" method="post" enctype="multipart/form-data">
                <input type="file" name="file" accept=".txt,text/plain">
                <button class="button" type="submit">Upload</button>
            </form>
        </section>"#,
        options = language_options(Language::default().as_str()),
    );
    layout("Summarize", &content)
}

/// Review an uploaded document before summarizing it
///
/// HTML parsers drop one newline directly after `<textarea>`, so one is
/// always emitted there to keep the document's own leading newline.
pub fn analyze_page(rawtext: &str, filename: &str, language: &str) -> String {
    let content = format!(
        r#"        <section>
            <h2>Uploaded document: {filename}</h2>
            <form action="/summarize" method="post">
                <input type="hidden" name="filename" value="{filename}">
                <textarea name="rawtext">
{rawtext}</textarea>
                <label for="language">Language</label>
                <select id="language" name="language">
                {options}
                </select>
                <button class="button" type="submit">Summarize</button>
            </form>
        </section>"#,
        filename = escape_html(filename),
        rawtext = escape_html(rawtext),
        options = language_options(language),
    );
    layout("Analyze upload", &content)
}

/// Summary, source text and scores for one successful analysis
pub fn summary_page(result: &AnalysisResult) -> String {
    let content = format!(
        r#"        <section>
            <h2>Summary</h2>
            <div class="panel">{summary}</div>
            <div class="stats">
                <div class="stat"><div>Original words</div><div class="value">{len_orig_txt}</div></div>
                <div class="stat"><div>Summary words</div><div class="value">{len_summary}</div></div>
                <div class="stat"><div>ROUGE-1 F</div><div class="value">{rouge_score:.4}</div></div>
            </div>
        </section>
        <section>
            <h2>Original text</h2>
            <div class="panel">{original_txt}</div>
        </section>
        <p><a class="button" href="/">Summarize another text</a></p>"#,
        summary = escape_html(&result.summary_text),
        len_orig_txt = result.original_word_count,
        len_summary = result.summary_word_count,
        rouge_score = result.overlap_score,
        original_txt = escape_html(&result.original_text),
    );
    layout("Summary", &content)
}

/// Failure message page
pub fn error_page(message: &str) -> String {
    let content = format!(
        r#"        <section>
            <h2>Something went wrong</h2>
            <div class="error">{message}</div>
        </section>
        <p><a class="button" href="/">Back</a></p>"#,
        message = escape_html(message),
    );
    layout("Error", &content)
}

pub fn about_page() -> String {
    let content = r#"        <section>
            <h2>About</h2>
            <p>sumweb produces abstractive summaries with a pretrained
            transformer model (<code>facebook/bart-large-cnn</code> by default)
            and rates each summary with ROUGE-1, the unigram overlap between
            the summary and the original text.</p>
            <ul>
                <li>Summaries are between 30 and 150 model tokens long and are
                generated deterministically.</li>
                <li>Word counts split the text on single spaces.</li>
                <li>ROUGE-1 F is the harmonic mean of unigram precision and
                recall; 1.0 means every word is shared.</li>
                <li>Uploaded documents must be UTF-8 plain text.</li>
            </ul>
        </section>"#;
    layout("About", content)
}

/// Reference inputs and the responses they should produce
pub fn testcases_page() -> String {
    let content = r#"        <section>
            <h2>Test cases</h2>
            <table>
                <tr><th>Input</th><th>Language</th><th>Expected result</th></tr>
                <tr><td>(empty)</td><td>english</td><td>Please provide text to analyze.</td></tr>
                <tr><td>Any text</td><td>klingon</td><td>Unsupported language.</td></tr>
                <tr><td>A news article of several paragraphs</td><td>english</td><td>Summary of 30-150 tokens with word counts and ROUGE-1 score</td></tr>
                <tr><td>Uploaded UTF-8 .txt file</td><td>english</td><td>File contents shown for review, then summarized</td></tr>
                <tr><td>Uploaded binary file</td><td>-</td><td>Error analyzing uploaded file.</td></tr>
                <tr><td>Upload with no file selected</td><td>-</td><td>Returned to the home page</td></tr>
            </table>
        </section>"#;
    layout("Test cases", content)
}
