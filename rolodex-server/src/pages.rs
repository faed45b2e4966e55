//! HTML page rendering
//!
//! Deliberately a leaf: plain functions building strings, no template
//! engine. Every interpolated value goes through [`escape`].

use crate::models::Account;

/// Minimal HTML-escape for text and attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Common document shell.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"/css/style.css\">\n\
         </head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Landing page: `GET /`.
pub fn index() -> String {
    page(
        "Rolodex",
        "<h1>Rolodex</h1>\n\
         <p>A small register of names and email addresses.</p>\n\
         <form method=\"POST\" action=\"/\">\n\
         <input type=\"text\" name=\"Name\" placeholder=\"Name (optional)\">\n\
         <button type=\"submit\">New entry</button>\n\
         </form>\n\
         <p><a href=\"/views/\">Browse entries</a></p>",
    )
}

/// Edit form: `GET /writer/`, optionally pre-filled with a name.
pub fn edit(prefill: Option<&str>) -> String {
    let name = prefill.map(escape).unwrap_or_default();
    page(
        "New entry",
        &format!(
            "<h1>New entry</h1>\n\
             <form method=\"POST\" action=\"/writer/\">\n\
             <label>Name <input type=\"text\" name=\"Name\" value=\"{name}\"></label>\n\
             <label>Email <input type=\"text\" name=\"Email\"></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n\
             <p><a href=\"/\">Back</a></p>"
        ),
    )
}

/// Single-account view: `GET /reader/{name}`.
pub fn view(account: &Account) -> String {
    page(
        &account.name,
        &format!(
            "<h1>{}</h1>\n\
             <p>Email: {}</p>\n\
             <form method=\"POST\" action=\"/reader/{}\">\n\
             <button type=\"submit\">All entries</button>\n\
             </form>",
            escape(&account.name),
            escape(&account.email),
            escape(&account.name),
        ),
    )
}

/// Listing: `GET /views/`. Each row carries a delete button posting the
/// row's name in the `submit` field.
pub fn listing(accounts: &[Account]) -> String {
    let mut rows = String::new();
    for account in accounts {
        let name = escape(&account.name);
        rows.push_str(&format!(
            "<tr><td><a href=\"/reader/{name}\">{name}</a></td>\
             <td>{}</td>\
             <td><form method=\"POST\" action=\"/views/\">\
             <button type=\"submit\" name=\"submit\" value=\"{name}\">Delete</button>\
             </form></td></tr>\n",
            escape(&account.email),
        ));
    }

    let body = if accounts.is_empty() {
        "<h1>Entries</h1>\n<p>No entries yet.</p>\n<p><a href=\"/writer/\">Add one</a></p>"
            .to_owned()
    } else {
        format!(
            "<h1>Entries</h1>\n\
             <table>\n<tr><th>Name</th><th>Email</th><th></th></tr>\n{rows}</table>\n\
             <p><a href=\"/writer/\">Add another</a></p>"
        )
    };

    page("Entries", &body)
}

/// Deletion confirmation: `GET /deleted/`.
pub fn deleted() -> String {
    page(
        "Deleted",
        "<h1>Entry deleted</h1>\n\
         <form method=\"POST\" action=\"/deleted/\">\n\
         <button type=\"submit\" name=\"view\" value=\"view\">Back to entries</button>\n\
         <button type=\"submit\" name=\"return\" value=\"return\">Home</button>\n\
         </form>",
    )
}
