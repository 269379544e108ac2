//! HTML rendering for the site.
//!
//! Pages are plain strings built from the catalog records. All record text
//! goes through [`format::escape`].

mod comparison;
pub mod format;
mod movies;

pub use comparison::comparison;
pub use movies::{movie_list, movie_live, movie_static};

use format::escape;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #111; }
header.site { border-bottom: 1px solid #e5e5e5; background: #fff; }
header.site nav { max-width: 1100px; margin: 0 auto; padding: 1rem; display: flex; gap: 1.5rem; }
header.site a { color: inherit; text-decoration: none; font-weight: 600; }
main { max-width: 1100px; margin: 0 auto; padding: 1.5rem 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
.card { display: block; background: #fff; border: 1px solid #e5e5e5; border-radius: 8px; overflow: hidden; color: inherit; text-decoration: none; }
.card:hover { box-shadow: 0 4px 16px rgba(0,0,0,.12); }
.card img { width: 100%; aspect-ratio: 3 / 4; object-fit: cover; display: block; }
.card-body { padding: 1rem; }
.card-body h2 { font-size: 1.1rem; margin: 0 0 .5rem; }
.muted { color: #666; font-size: .9rem; }
.meta { display: flex; gap: 1rem; font-size: .9rem; color: #666; margin: .75rem 0; }
.badge { display: inline-block; padding: .15rem .6rem; border-radius: 999px; background: #eee; font-size: .75rem; }
.badge.live { background: #dc2626; color: #fff; }
.panel { background: #fff; border: 1px solid #e5e5e5; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1.5rem; }
.panel.live { border-color: #bfdbfe; background: #eff6ff; }
.panel.static { border-color: #bbf7d0; background: #f0fdf4; }
.stats { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: .75rem; }
.hero { position: relative; height: 24rem; overflow: hidden; background: #000; }
.hero img { width: 100%; height: 100%; object-fit: cover; opacity: .5; }
.hero .overlay { position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: center; max-width: 1100px; margin: 0 auto; padding: 0 1rem; color: #fff; }
.hero a { color: #fff; }
table { width: 100%; border-collapse: collapse; font-size: .9rem; }
th, td { text-align: left; padding: .5rem; border-bottom: 1px solid #e5e5e5; }
"#;

/// Wrap page content in the shared document shell and navigation.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<header class="site"><nav><a href="/">Movies</a><a href="/comparison">SSG vs SSR</a></nav></header>
{content}
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        content = content,
    )
}

/// Page for ids with no matching record.
pub fn not_found() -> String {
    layout(
        "Movie not found",
        r#"<main><h1>Movie not found</h1><p class="muted">There is no movie with that id.</p><p><a href="/">Back to Movies</a></p></main>"#,
    )
}

/// Page shown when the catalog cannot be loaded.
pub fn catalog_error() -> String {
    layout(
        "Catalog unavailable",
        r#"<main><h1>Catalog unavailable</h1><p class="muted">The movie catalog could not be loaded. Please try again later.</p></main>"#,
    )
}
