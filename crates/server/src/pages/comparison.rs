//! Static page explaining the two rendering strategies.

use super::layout;

const CONTENT: &str = r#"<main>
<p><a href="/">&larr; Back to Movies</a></p>
<h1>Data Fetching Comparison</h1>
<p class="muted">Understanding the differences between Static Generation and Server-Side Rendering</p>

<div class="stats">
<div class="panel static">
<h2>Static Generation (SSG)</h2>
<p class="muted">Pages are pre-built ahead of time and served as-is</p>
<h3>How it works:</h3>
<ul>
<li>Detail pages are rendered once when the server starts</li>
<li>The rendered HTML is kept in memory and served unchanged</li>
<li>Every movie in the catalog gets a page</li>
<li>Data is read once, before the first request</li>
</ul>
<h3>Best for:</h3>
<p><span class="badge">Marketing pages</span> <span class="badge">Blog posts</span> <span class="badge">Product catalogs</span> <span class="badge">Documentation</span></p>
<h3>Pros:</h3>
<ul>
<li>Extremely fast responses</li>
<li>Great SEO</li>
<li>Cheap to serve</li>
<li>Nothing runs per request</li>
</ul>
<h3>Cons:</h3>
<ul>
<li>Data can become stale</li>
<li>Requires a rebuild (restart) for updates</li>
<li>Startup time grows with the number of pages</li>
</ul>
<p><a href="/movies/1">View SSG Example</a></p>
</div>

<div class="panel live">
<h2>Server-Side Rendering (SSR)</h2>
<p class="muted">Pages are rendered on each request with fresh data</p>
<h3>How it works:</h3>
<ul>
<li>Pages are rendered on each request</li>
<li>Data is fetched on every page load</li>
<li>HTML is generated server-side</li>
<li>Fresh data on every visit</li>
</ul>
<h3>Best for:</h3>
<p><span class="badge">User dashboards</span> <span class="badge">Real-time data</span> <span class="badge">Personalized content</span> <span class="badge">Live feeds</span></p>
<h3>Pros:</h3>
<ul>
<li>Always fresh data</li>
<li>Personalized content</li>
<li>Good SEO</li>
<li>Secure server-side logic</li>
</ul>
<h3>Cons:</h3>
<ul>
<li>Slower than static</li>
<li>Higher server costs</li>
<li>Work scales with traffic</li>
</ul>
<p><a href="/movies/ssr/1">View SSR Example</a></p>
</div>
</div>

<div class="panel">
<h2>Side-by-Side Comparison</h2>
<table>
<thead><tr><th>Feature</th><th>Static Generation (SSG)</th><th>Server-Side Rendering (SSR)</th></tr></thead>
<tbody>
<tr><td>Performance</td><td>Fastest (pre-rendered)</td><td>Fast (server rendered)</td></tr>
<tr><td>Data Freshness</td><td>Startup-time data</td><td>Real-time data</td></tr>
<tr><td>SEO</td><td>Excellent</td><td>Excellent</td></tr>
<tr><td>Cost</td><td>Low</td><td>Higher (work per request)</td></tr>
</tbody>
</table>
</div>
</main>"#;

pub fn comparison() -> String {
    layout("Data Fetching Comparison", CONTENT)
}
