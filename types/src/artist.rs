#![allow(clippy::module_name_repetitions)]
use std::sync::Arc;

use crate::{Field, FieldValue, Identified, Mbid, RecordKind};

/// This struct holds the metadata about a particular [`Artist`].
///
/// An [`Artist`] can be identified either by its MusicBrainz ids or by its artist credit id.
/// Collaborations carry more than one MusicBrainz id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artist {
    /// The [`Artist`]'s name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<Arc<str>>,

    /// The MusicBrainz ids of this [`Artist`], empty if unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mbids: Vec<Mbid>,

    /// The artist credit id of this [`Artist`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub artist_credit_id: Option<i64>,
}

impl Artist {
    #[must_use]
    #[inline]
    pub fn with_mbids<I, M>(mbids: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Mbid>,
    {
        Self {
            mbids: mbids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    #[inline]
    pub fn with_artist_credit_id(artist_credit_id: i64) -> Self {
        Self {
            artist_credit_id: Some(artist_credit_id),
            ..Self::default()
        }
    }

    #[must_use]
    #[inline]
    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Identified for Artist {
    #[inline]
    fn kind(&self) -> RecordKind {
        RecordKind::Artist
    }

    #[inline]
    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Mbids => Some(FieldValue::Mbids(&self.mbids)),
            Field::ArtistCreditId => Some(FieldValue::ArtistCreditId(self.artist_credit_id)),
            Field::Mbid => None,
        }
    }
}
