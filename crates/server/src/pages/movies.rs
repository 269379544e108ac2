//! Movie list and detail pages.

use chrono::{DateTime, Utc};
use cinedeck_core::{LiveStats, MovieRecord};

use super::format::{escape, opt, thousands};
use super::layout;

/// Home page: a card per movie, linking to its pre-rendered detail page.
pub fn movie_list(movies: &[MovieRecord]) -> String {
    let mut cards = String::new();
    for movie in movies {
        cards.push_str(&movie_card(movie));
    }

    let content = if movies.is_empty() {
        r#"<main><h1>Movies</h1><p class="muted">No movies in the catalog yet.</p></main>"#
            .to_string()
    } else {
        format!(r#"<main><h1>Movies</h1><div class="grid">{cards}</div></main>"#)
    };

    layout("Movies", &content)
}

fn movie_card(movie: &MovieRecord) -> String {
    let genre = if movie.genre.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="badge">{}</span>"#, escape(&movie.genre))
    };

    format!(
        r#"<a class="card" href="/movies/{id}">
<img src="{poster}" alt="{title}" loading="lazy">
<div class="card-body">
<h2>{title}</h2>
<p class="muted">{description}</p>
<div class="meta"><span>&#128197; {year}</span><span>&#9201; {duration}m</span><span>&#9733; {rating}</span></div>
{genre}
</div>
</a>
"#,
        id = movie.id,
        poster = escape(movie.poster_or_placeholder()),
        title = escape(&movie.title),
        description = escape(&movie.description),
        year = opt(movie.release_year),
        duration = opt(movie.duration),
        rating = opt(movie.rating),
        genre = genre,
    )
}

/// Detail page rendered once at startup and served unchanged afterwards.
pub fn movie_static(movie: &MovieRecord, generated_at: DateTime<Utc>) -> String {
    let title = escape(&movie.title);
    let year = opt(movie.release_year);

    let content = format!(
        r#"<main>
<p><a href="/">&larr; Back to Movies</a></p>
<h1>{title} {year}</h1>
<p>{description}</p>
<p>{year}</p>
<img src="{poster}" alt="{title}" width="300" height="450">
<div class="panel static">
<span class="badge">SSG</span>
<p class="muted">Pre-rendered at {generated}. This page does not change until the server restarts.</p>
<p><a href="/movies/ssr/{id}">View the per-request version</a></p>
</div>
</main>"#,
        title = title,
        year = year,
        description = escape(&movie.description),
        poster = escape(movie.poster_or_placeholder()),
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        id = movie.id,
    );

    layout(&movie.title, &content)
}

/// Detail page rendered on every request, with fresh live stats.
pub fn movie_live(movie: &MovieRecord, live: &LiveStats) -> String {
    let title = escape(&movie.title);
    let poster = escape(movie.poster_or_placeholder());
    let trending = if live.trending {
        "&#128293; Yes"
    } else {
        "&#10052;&#65039; No"
    };

    let content = format!(
        r#"<section class="hero">
<img src="{poster}" alt="{title}">
<div class="overlay">
<p><a href="/">&larr; Back to Movies</a></p>
<h1>{title} <span class="badge live">SSR</span></h1>
<p>{description}</p>
</div>
</section>
<main>
<div class="panel live">
<h2>Real-time Data (Server-Side Rendered)</h2>
<div class="stats">
<div><strong>Current Viewers:</strong> {viewers}</div>
<div><strong>Last Updated:</strong> {updated}</div>
<div><strong>Trending:</strong> {trending}</div>
<div><strong>Available on:</strong> {provider}</div>
</div>
<p class="muted">This data is fetched on every request using Server-Side Rendering (SSR)</p>
</div>
<div class="panel">
<h2>Movie Information</h2>
<div class="stats">
<div><strong>Year:</strong> {year}</div>
<div><strong>Duration:</strong> {duration}m</div>
<div><strong>Rating:</strong> {rating}/10</div>
<div><strong>Director:</strong> {director}</div>
</div>
<h3>Genres</h3>
<p>{genre}</p>
</div>
<div class="panel">
<h2>Plot</h2>
<p class="muted">{plot}</p>
</div>
<div class="panel">
<h2>Cast</h2>
<p>{cast}</p>
</div>
</main>"#,
        poster = poster,
        title = title,
        description = escape(&movie.description),
        viewers = thousands(live.current_viewers),
        updated = escape(&live.last_updated),
        trending = trending,
        provider = escape(live.available_streaming.as_str()),
        year = opt(movie.release_year),
        duration = opt(movie.duration),
        rating = opt(movie.rating),
        director = escape(&movie.director),
        genre = escape(&movie.genre),
        plot = escape(&movie.plot),
        cast = escape(&movie.cast),
    );

    layout(&movie.title, &content)
}
