#![allow(clippy::module_name_repetitions)]
use std::sync::Arc;

use crate::{Artist, Field, FieldValue, Identified, Mbid, RecordKind};

/// This struct holds the metadata about a particular [`Release`].
/// A [`Release`] is identified by a single MusicBrainz id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Release {
    /// The [`Release`]'s title.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<Arc<str>>,

    /// The MusicBrainz id of this [`Release`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub mbid: Option<Mbid>,

    /// The credited [`Artist`], if known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub artist: Option<Artist>,
}

impl Release {
    #[must_use]
    #[inline]
    pub fn with_mbid(mbid: impl Into<Mbid>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Self::default()
        }
    }
}

impl Identified for Release {
    #[inline]
    fn kind(&self) -> RecordKind {
        RecordKind::Release
    }

    #[inline]
    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Mbid => Some(FieldValue::Mbid(self.mbid.as_deref())),
            Field::Mbids | Field::ArtistCreditId => None,
        }
    }
}
