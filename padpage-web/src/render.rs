//! Renders generated pages into printable HTML.
//!
//! This module is the only place markup exists; the core library hands over
//! plain pages and knows nothing about HTML.

use padpage_core::page_builder::Page;

const HEADER: &str = "\
<title>One Time Pad - Unique, just for you</title>
<style>
/* Remove decoration from links so they are readable when printed */
a { text-decoration: none; }
</style>
";

const FOOTER: &str = r#"
Print this page and distribute the copies (along with the <a href="https://lrnsr.co/aY6m">One Time Pad Cheat Sheet
https://lrnsr.co/aY6m</a>) to all members of your group that you trust to receive your encrypted messages.  Every
person must have their OWN copy of this "One Time Pad" to encrypt and decrypt messages.
<br>
<b>Use each message ONLY ONCE.</b>  Cut off and burn each message from this paper as it is used.
<br>
If you want more One Time Pads, simply <a href=".">go here to refresh the page</a>.  The server will generate a
unique page just for you. This page is not stored on the server, and cannot be retrieved once you close this window!
<br>
To learn how to use this page, please visit: <a href="https://lrnsr.co/H7Za">https://lrnsr.co/H7Za</a>
"#;

/// Renders a page as a single printable HTML document: one heading and
/// `<pre>` body per message, followed by the usage instructions.
pub(crate) fn page_html(page: &Page) -> String {
    let mut html = String::from(HEADER);
    for message in &page.messages {
        html.push_str(&format!(
            "<pre>Message {}</pre>\n<pre>\n{}\n</pre>\n",
            message.ordinal, message.text
        ));
    }
    html.push_str(FOOTER);
    html
}
