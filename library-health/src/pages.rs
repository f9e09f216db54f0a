//! HTML pages served by the library service.

use utils::escape_html;

use crate::db::Book;

const PAGE_STYLE: &str = "font-family: Arial, sans-serif; padding: 2rem; background: #f5f5f5;";
const ERROR_STYLE: &str = "font-family: Arial, sans-serif; padding: 2rem; background: #ffe0e0;";

/// Landing page linking the status and book endpoints.
pub fn index_page() -> String {
    r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Library Healthcheck</title>
    <style>
      body {
        font-family: Arial, sans-serif;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
        display: flex;
        justify-content: center;
        align-items: center;
        height: 100vh;
        margin: 0;
      }
      .container {
        text-align: center;
        background: rgba(255,255,255,0.1);
        padding: 2rem;
        border-radius: 15px;
      }
      .links a {
        color: white;
        text-decoration: none;
        background: rgba(255,255,255,0.2);
        padding: 0.5rem 1rem;
        border-radius: 5px;
        margin: 0.5rem 0.5rem 0;
        display: inline-block;
      }
    </style>
  </head>
  <body>
    <div class="container">
      <h1>Library Healthcheck</h1>
      <p>HTTP service backed by PostgreSQL</p>
      <div class="links">
        <a href="/health">Health status</a>
        <a href="/db-status">Database status</a>
        <a href="/books">Book list</a>
      </div>
    </div>
  </body>
</html>
"#
    .to_string()
}

/// Book list, or a pointer to `/setup` when there are no rows.
pub fn books_page(books: &[Book]) -> String {
    if books.is_empty() {
        return page(
            "Books",
            PAGE_STYLE,
            r#"<h2>No books found</h2>
    <p>Run <a href="/setup">/setup</a> first to create sample data.</p>"#
        );
    }

    let items: String = books.iter().map(book_item).collect();
    page(
        "Books",
        PAGE_STYLE,
        &format!("<h2>Book list</h2>\n    <ul>{items}</ul>")
    )
}

/// Error page shown when the book query fails.
pub fn books_error_page(message: &str) -> String {
    let message = escape_html(message);
    page(
        "Error",
        ERROR_STYLE,
        &format!(
            r#"<h2>Failed to load books</h2>
    <p>{message}</p>
    <p>The table may not exist yet. Run <a href="/setup">/setup</a>.</p>"#
        )
    )
}

fn book_item(book: &Book) -> String {
    let year = book
        .year
        .map_or_else(|| "unknown".to_string(), |y| y.to_string());
    format!(
        "<li><strong>{}</strong> - {} ({year})</li>",
        escape_html(&book.title),
        escape_html(&book.author)
    )
}

fn page(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><meta charset="utf-8"><title>{title}</title></head>
  <body style="{style}">
    {body}
    <p><a href="/">&larr; Back</a></p>
  </body>
</html>
"#
    )
}
