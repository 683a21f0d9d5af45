//! Identifying fields, and the capability interface records use to expose them.

use crate::{Mbid, RecordKind};

/// The name of an identifying field of a record.
///
/// Which fields are valid depends on the [`RecordKind`], see [`RecordKind::fields`].
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
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// The list of MusicBrainz ids of an artist (more than one for collaborations).
    Mbids,
    /// The artist credit id of an artist.
    ArtistCreditId,
    /// The MusicBrainz id of a release or recording.
    Mbid,
}

/// The value of an identifying field, borrowed from the record it was read from.
///
/// Equality and hashing are by value, list values compare element-wise.
/// An unset field is equal to another unset field of the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldValue<'a> {
    Mbids(&'a [Mbid]),
    ArtistCreditId(Option<i64>),
    Mbid(Option<&'a str>),
}

impl FieldValue<'_> {
    /// The field this value was read from.
    #[must_use]
    #[inline]
    pub const fn field(&self) -> Field {
        match self {
            Self::Mbids(_) => Field::Mbids,
            Self::ArtistCreditId(_) => Field::ArtistCreditId,
            Self::Mbid(_) => Field::Mbid,
        }
    }
}

/// Implemented by anything that carries identifying fields.
pub trait Identified {
    /// The kind of record this is.
    fn kind(&self) -> RecordKind;

    /// Read the given identifying field.
    ///
    /// Returns `None` if `field` is not one of the identifying fields of [`Self::kind`].
    fn field(&self, field: Field) -> Option<FieldValue<'_>>;
}

impl<T: Identified + ?Sized> Identified for &T {
    #[inline]
    fn kind(&self) -> RecordKind {
        (**self).kind()
    }

    #[inline]
    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        (**self).field(field)
    }
}
