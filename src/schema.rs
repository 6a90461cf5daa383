//! Display metadata for each entity: human labels and help text, kept apart
//! from the entities so the presentation layer can consume it as data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityMeta {
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    pub fields: &'static [FieldMeta],
}

impl EntityMeta {
    pub fn field(&self, name: &str) -> Option<&'static FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Label for `name`, falling back to the raw field name.
    pub fn label(&self, name: &'static str) -> &'static str {
        self.field(name).map(|f| f.label).unwrap_or(name)
    }
}

const fn field(name: &'static str, label: &'static str) -> FieldMeta {
    FieldMeta { name, label, help_text: None }
}

const fn usd(name: &'static str, label: &'static str) -> FieldMeta {
    FieldMeta { name, label, help_text: Some("Amount in US dollars") }
}

pub const CATEGORY: EntityMeta = EntityMeta {
    name: "category",
    verbose_name: "Category",
    verbose_name_plural: "Categories",
    fields: &[field("name", "Category"), field("description", "Description"), field("url", "Slug")],
};

pub const GENRE: EntityMeta = EntityMeta {
    name: "genre",
    verbose_name: "Genre",
    verbose_name_plural: "Genres",
    fields: &[field("name", "Genre"), field("description", "Description"), field("url", "Slug")],
};

pub const ACTOR: EntityMeta = EntityMeta {
    name: "actor",
    verbose_name: "Actors and directors",
    verbose_name_plural: "Actors and directors",
    fields: &[
        field("name", "Name"),
        field("age", "Age"),
        field("description", "Description"),
        field("image", "Image"),
    ],
};

pub const MOVIE: EntityMeta = EntityMeta {
    name: "movie",
    verbose_name: "Movie",
    verbose_name_plural: "Movies",
    fields: &[
        field("title", "Title"),
        field("tagline", "Tagline"),
        field("description", "Description"),
        field("poster", "Poster"),
        field("year", "Release year"),
        field("country", "Country"),
        field("directors", "Director"),
        field("actors", "Actor"),
        field("genres", "Genre"),
        field("world_premiere", "Premiere"),
        usd("budget", "Budget"),
        usd("fees_in_usa", "Box office (USA)"),
        usd("fees_in_world", "Box office (worldwide)"),
        field("category", "Category"),
        field("url", "Slug"),
        field("draft", "Draft"),
    ],
};

pub const MOVIE_SHOT: EntityMeta = EntityMeta {
    name: "movie_shot",
    verbose_name: "Movie still",
    verbose_name_plural: "Movie stills",
    fields: &[
        field("title", "Title"),
        field("description", "Description"),
        field("image", "Image"),
        field("movie", "Movie"),
    ],
};

pub const RATING_STAR: EntityMeta = EntityMeta {
    name: "rating_star",
    verbose_name: "Rating star",
    verbose_name_plural: "Rating stars",
    fields: &[field("value", "Rating")],
};

pub const RATING: EntityMeta = EntityMeta {
    name: "rating",
    verbose_name: "Rating",
    verbose_name_plural: "Ratings",
    fields: &[field("ip", "IP address"), field("star", "Rating"), field("movie", "Movie")],
};

pub const REVIEW: EntityMeta = EntityMeta {
    name: "review",
    verbose_name: "Review",
    verbose_name_plural: "Reviews",
    fields: &[
        field("email", "Email"),
        field("name", "Name"),
        field("text", "Message"),
        field("parent", "Reply to"),
        field("movie", "Movie"),
    ],
};
