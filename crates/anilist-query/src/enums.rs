//! AniList schema enums that may be passed as argument values.

use crate::argument::ArgumentValue;

/// An enum type defined by the AniList schema.
pub trait AniListEnum: Copy {
    /// The enum's type name in the schema (e.g. `StaffLanguage`).
    fn type_name() -> &'static str;

    /// The variant's name as it appears on the wire (e.g. `JAPANESE`).
    fn as_str(&self) -> &'static str;
}

macro_rules! anilist_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire_name:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $($variant),+
        }
        impl AniListEnum for $name {
            fn type_name() -> &'static str {
                stringify!($name)
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire_name),+
                }
            }
        }
        impl std::convert::From<$name> for ArgumentValue {
            fn from(value: $name) -> Self {
                ArgumentValue::Enum {
                    type_name: <$name as AniListEnum>::type_name(),
                    value: value.as_str(),
                }
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

anilist_enum! {
    /// The role a character plays in a media.
    pub enum CharacterRole {
        Background => "BACKGROUND",
        Main => "MAIN",
        Supporting => "SUPPORTING",
    }
}

anilist_enum! {
    /// Character sort order.
    pub enum CharacterSort {
        Favourites => "FAVOURITES",
        FavouritesDesc => "FAVOURITES_DESC",
        Id => "ID",
        IdDesc => "ID_DESC",
        Relevance => "RELEVANCE",
        Role => "ROLE",
        RoleDesc => "ROLE_DESC",
        SearchMatch => "SEARCH_MATCH",
    }
}

anilist_enum! {
    /// The format the media was released in.
    pub enum MediaFormat {
        Manga => "MANGA",
        Movie => "MOVIE",
        Music => "MUSIC",
        Novel => "NOVEL",
        OneShot => "ONE_SHOT",
        Ona => "ONA",
        Ova => "OVA",
        Special => "SPECIAL",
        Tv => "TV",
        TvShort => "TV_SHORT",
    }
}

anilist_enum! {
    pub enum MediaSeason {
        Fall => "FALL",
        Spring => "SPRING",
        Summer => "SUMMER",
        Winter => "WINTER",
    }
}

anilist_enum! {
    /// Media sort order.
    pub enum MediaSort {
        Favourites => "FAVOURITES",
        FavouritesDesc => "FAVOURITES_DESC",
        Id => "ID",
        IdDesc => "ID_DESC",
        Popularity => "POPULARITY",
        PopularityDesc => "POPULARITY_DESC",
        Score => "SCORE",
        ScoreDesc => "SCORE_DESC",
        SearchMatch => "SEARCH_MATCH",
        StartDate => "START_DATE",
        StartDateDesc => "START_DATE_DESC",
        TitleRomaji => "TITLE_ROMAJI",
        TitleRomajiDesc => "TITLE_ROMAJI_DESC",
        Trending => "TRENDING",
        TrendingDesc => "TRENDING_DESC",
    }
}

anilist_enum! {
    /// The current releasing status of the media.
    pub enum MediaStatus {
        Cancelled => "CANCELLED",
        Finished => "FINISHED",
        Hiatus => "HIATUS",
        NotYetReleased => "NOT_YET_RELEASED",
        Releasing => "RELEASING",
    }
}

anilist_enum! {
    pub enum MediaType {
        Anime => "ANIME",
        Manga => "MANGA",
    }
}

anilist_enum! {
    /// The primary language of a voice actor.
    pub enum StaffLanguage {
        English => "ENGLISH",
        French => "FRENCH",
        German => "GERMAN",
        Hebrew => "HEBREW",
        Hungarian => "HUNGARIAN",
        Italian => "ITALIAN",
        Japanese => "JAPANESE",
        Korean => "KOREAN",
        Portuguese => "PORTUGUESE",
        Spanish => "SPANISH",
    }
}

anilist_enum! {
    /// Staff sort order.
    pub enum StaffSort {
        Favourites => "FAVOURITES",
        FavouritesDesc => "FAVOURITES_DESC",
        Id => "ID",
        IdDesc => "ID_DESC",
        Language => "LANGUAGE",
        LanguageDesc => "LANGUAGE_DESC",
        Relevance => "RELEVANCE",
        Role => "ROLE",
        RoleDesc => "ROLE_DESC",
        SearchMatch => "SEARCH_MATCH",
    }
}

anilist_enum! {
    /// Studio sort order.
    pub enum StudioSort {
        Favourites => "FAVOURITES",
        FavouritesDesc => "FAVOURITES_DESC",
        Id => "ID",
        IdDesc => "ID_DESC",
        Name => "NAME",
        NameDesc => "NAME_DESC",
        SearchMatch => "SEARCH_MATCH",
    }
}
