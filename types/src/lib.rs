//! Typed MusicBrainz metadata records, and the identifying fields set operations compare them by.

use std::sync::Arc;

pub mod artist;
pub mod field;
pub mod record;
pub mod recording;
pub mod release;

pub use artist::Artist;
pub use field::{Field, FieldValue, Identified};
pub use record::{Record, RecordKind};
pub use recording::Recording;
pub use release::Release;

/// A MusicBrainz identifier.
pub type Mbid = Arc<str>;
