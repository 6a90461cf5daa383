use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    config::Config,
    entities::{actor, movie},
    models::MovieDetail,
    schema::{self, EntityMeta},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn movie_list_page(movies: &[movie::Model], config: &Config) -> String {
    page(
        schema::MOVIE.verbose_name_plural,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-5xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { (schema::MOVIE.verbose_name_plural) }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies published yet." }
                        }
                    } @else {
                        div class="mt-10 grid gap-6 sm:grid-cols-2 lg:grid-cols-3" {
                            @for movie in movies {
                                (movie_card(movie, config))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn movie_detail_page(detail: &MovieDetail, config: &Config) -> String {
    let movie = &detail.movie;
    let meta = &schema::MOVIE;

    page(
        &movie.title,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-5xl mx-auto px-6 py-12" {
                    a class="text-sm text-blue-600 hover:text-blue-800" href="/" { "All movies" }

                    div class="mt-6 bg-white shadow rounded-lg p-8 md:flex gap-8" {
                        @if !movie.poster.is_empty() {
                            img class="w-64 rounded-md object-cover" src=(config.media(&movie.poster)) alt=(movie.title);
                        }
                        div class="flex-1" {
                            h1 class="text-3xl font-bold text-gray-900" {
                                (movie.title)
                                span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                            }
                            @if !movie.tagline.is_empty() {
                                p class="mt-2 italic text-gray-600" { "\u{201c}" (movie.tagline) "\u{201d}" }
                            }

                            dl class="mt-6 grid grid-cols-3 gap-x-4 gap-y-2 text-sm" {
                                (row(meta, "country", html! { (movie.country) }))
                                (row(meta, "directors", people(&detail.directors)))
                                (row(meta, "actors", people(&detail.cast)))
                                (row(meta, "genres", html! {
                                    @for (i, genre) in detail.genres.iter().enumerate() {
                                        @if i > 0 { ", " }
                                        (genre.name)
                                    }
                                }))
                                (row(meta, "world_premiere", html! { (premiere(movie)) }))
                                (row(meta, "budget", html! { (usd(movie.budget)) }))
                                (row(meta, "fees_in_usa", html! { (usd(movie.fees_in_usa)) }))
                                (row(meta, "fees_in_world", html! { (usd(movie.fees_in_world)) }))
                                @if let Some(category) = &detail.category {
                                    (row(meta, "category", html! { (category.name) }))
                                }
                            }

                            p class="mt-6 text-sm text-gray-700" {
                                (schema::RATING.verbose_name) ": "
                                @match detail.rating.average {
                                    Some(avg) => { (format!("{avg:.1}")) " (" (detail.rating.votes) ")" }
                                    None => { "no votes yet" }
                                }
                            }
                        }
                    }

                    @if !movie.description.is_empty() {
                        div class="mt-6 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-700 whitespace-pre-line" { (movie.description) }
                        }
                    }

                    @if !detail.shots.is_empty() {
                        div class="mt-6 bg-white shadow rounded-lg p-8" {
                            h2 class="text-xl font-semibold text-gray-900" { (schema::MOVIE_SHOT.verbose_name_plural) }
                            div class="mt-4 grid gap-4 sm:grid-cols-3" {
                                @for shot in &detail.shots {
                                    figure {
                                        img class="rounded-md" src=(config.media(&shot.image)) alt=(shot.title);
                                        figcaption class="mt-1 text-sm text-gray-500" { (shot.title) }
                                    }
                                }
                            }
                        }
                    }

                    div class="mt-6 bg-white shadow rounded-lg p-8" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            (schema::REVIEW.verbose_name_plural) " (" (detail.reviews.len()) ")"
                        }
                        @if detail.reviews.is_empty() {
                            p class="mt-4 text-sm text-gray-500" { "No reviews yet." }
                        } @else {
                            ul class="mt-4 space-y-4" {
                                @for (depth, review) in detail.reviews.walk() {
                                    li class="border-l-4 border-blue-200 pl-4" style=(format!("margin-left: {}rem", depth * 2)) {
                                        p class="text-sm font-semibold text-gray-900" { (review.name) }
                                        p class="mt-1 text-sm text-gray-700 whitespace-pre-line" { (review.text) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        status.canonical_reason().unwrap_or("Error"),
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model, config: &Config) -> Markup {
    html! {
        a class="block bg-white shadow rounded-lg overflow-hidden hover:shadow-md" href=(movie.absolute_url()) {
            @if !movie.poster.is_empty() {
                img class="h-72 w-full object-cover" src=(config.media(&movie.poster)) alt=(movie.title);
            }
            div class="p-4" {
                h2 class="text-lg font-semibold text-gray-900" {
                    (movie.title)
                    span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                }
                @if !movie.tagline.is_empty() {
                    p class="mt-1 text-sm text-gray-600" { (movie.tagline) }
                }
            }
        }
    }
}

fn row(meta: &EntityMeta, field: &'static str, value: Markup) -> Markup {
    let help = meta.field(field).and_then(|f| f.help_text);
    html! {
        dt class="font-medium text-gray-500" title=[help] { (meta.label(field)) }
        dd class="col-span-2 text-gray-900" { (value) }
    }
}

fn people(list: &[actor::Model]) -> Markup {
    html! {
        @for (i, person) in list.iter().enumerate() {
            @if i > 0 { ", " }
            (person.name)
        }
    }
}

fn premiere(movie: &movie::Model) -> String {
    match movie.premiere() {
        Some(date) => date.strftime("%-d %B %Y").to_string(),
        None => movie.world_premiere.clone(),
    }
}

/// `63000000` -> `$63,000,000`.
fn usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if amount < 0 {
        out.push('-');
    }
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
