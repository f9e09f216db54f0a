//! Static HTML for the landing page.

use utils::escape_html;

const STYLE: &str = r"
      body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #2c3e50 0%, #3498db 100%);
        color: white;
        padding: 2rem;
        margin: 0;
      }
      .container {
        max-width: 800px;
        margin: 0 auto;
        background: rgba(255,255,255,0.1);
        padding: 2rem;
        border-radius: 15px;
      }
      .section {
        background: rgba(255,255,255,0.05);
        padding: 1rem;
        margin: 1rem 0;
        border-radius: 10px;
      }
      .links a {
        display: inline-block;
        background: rgba(255,255,255,0.2);
        color: white;
        text-decoration: none;
        padding: 0.7rem 1.5rem;
        border-radius: 5px;
        margin: 0.5rem 0.5rem 0 0;
      }
      code {
        background: rgba(0,0,0,0.3);
        padding: 0.2rem 0.5rem;
        border-radius: 3px;
      }
";

/// Landing page listing the JSON endpoints.
pub fn index_page(app_name: &str, config_path: &str) -> String {
    let name = escape_html(app_name);
    let path = escape_html(config_path);
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{name}</title>
    <style>{STYLE}</style>
  </head>
  <body>
    <div class="container">
      <h1>{name}</h1>
      <p>Environment variables and read-only configuration, exposed safely.</p>

      <div class="section">
        <h3>Endpoints</h3>
        <div class="links">
          <a href="/info">/info - service information</a>
          <a href="/health">/health - service status</a>
          <a href="/config">/config - configuration document</a>
        </div>
      </div>

      <div class="section">
        <h3>Security</h3>
        <p>Variables loaded from the process environment</p>
        <p>Configuration read from <code>{path}</code> (read-only)</p>
        <p>Credentials never written to logs</p>
      </div>
    </div>
  </body>
</html>
"#
    )
}
