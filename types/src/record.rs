//! The closed set of record kinds the set operations work on.

use crate::{Artist, Field, FieldValue, Identified, Recording, Release};

/// The kind of a [`Record`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecordKind {
    Artist,
    Release,
    Recording,
}

impl RecordKind {
    /// The identifying fields records of this kind expose.
    #[must_use]
    #[inline]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Artist => &[Field::Mbids, Field::ArtistCreditId],
            Self::Release | Self::Recording => &[Field::Mbid],
        }
    }

    /// The field used to tell records of this kind apart when the caller doesn't pick one.
    #[must_use]
    #[inline]
    pub const fn default_field(self) -> Field {
        match self {
            Self::Artist => Field::Mbids,
            Self::Release | Self::Recording => Field::Mbid,
        }
    }

    /// Whether `field` is one of [`Self::fields`].
    #[must_use]
    #[inline]
    pub fn supports(self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

/// A music metadata record of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Record {
    Artist(Artist),
    Release(Release),
    Recording(Recording),
}

impl Record {
    #[must_use]
    #[inline]
    pub const fn as_artist(&self) -> Option<&Artist> {
        match self {
            Self::Artist(artist) => Some(artist),
            _ => None,
        }
    }

    #[must_use]
    #[inline]
    pub const fn as_release(&self) -> Option<&Release> {
        match self {
            Self::Release(release) => Some(release),
            _ => None,
        }
    }

    #[must_use]
    #[inline]
    pub const fn as_recording(&self) -> Option<&Recording> {
        match self {
            Self::Recording(recording) => Some(recording),
            _ => None,
        }
    }
}

impl Identified for Record {
    #[inline]
    fn kind(&self) -> RecordKind {
        match self {
            Self::Artist(artist) => artist.kind(),
            Self::Release(release) => release.kind(),
            Self::Recording(recording) => recording.kind(),
        }
    }

    #[inline]
    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match self {
            Self::Artist(artist) => artist.field(field),
            Self::Release(release) => release.field(field),
            Self::Recording(recording) => recording.field(field),
        }
    }
}

impl From<Artist> for Record {
    #[inline]
    fn from(artist: Artist) -> Self {
        Self::Artist(artist)
    }
}

impl From<Release> for Record {
    #[inline]
    fn from(release: Release) -> Self {
        Self::Release(release)
    }
}

impl From<Recording> for Record {
    #[inline]
    fn from(recording: Recording) -> Self {
        Self::Recording(recording)
    }
}
