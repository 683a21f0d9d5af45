#![allow(clippy::module_name_repetitions)]
use std::{sync::Arc, time::Duration};

use crate::{Artist, Field, FieldValue, Identified, Mbid, RecordKind, Release};

/// This struct holds the metadata about a particular [`Recording`].
/// A [`Recording`] is identified by a single MusicBrainz id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recording {
    /// The [`Recording`]'s title.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<Arc<str>>,

    /// The MusicBrainz id of this [`Recording`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub mbid: Option<Mbid>,

    /// How long the [`Recording`] is.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub duration: Option<Duration>,

    /// The credited [`Artist`], if known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub artist: Option<Artist>,

    /// The [`Release`] this [`Recording`] appears on, if known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub release: Option<Release>,
}

impl Recording {
    #[must_use]
    #[inline]
    pub fn with_mbid(mbid: impl Into<Mbid>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Self::default()
        }
    }
}

impl Identified for Recording {
    #[inline]
    fn kind(&self) -> RecordKind {
        RecordKind::Recording
    }

    #[inline]
    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Mbid => Some(FieldValue::Mbid(self.mbid.as_deref())),
            Field::Mbids | Field::ArtistCreditId => None,
        }
    }
}
