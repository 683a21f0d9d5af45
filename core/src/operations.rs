//! Set operations over lists of records.
//!
//! Records are compared by one of their identifying fields (see [`mbset_types::RecordKind::fields`]).
//! Lists are treated as ordered sets: every operation preserves the order of its left input,
//! and never mutates its inputs.
//!
//! The operations are generic over [`Identified`], so they work on lists of [`mbset_types::Record`]
//! (where the kind is only known at runtime) as well as on lists of a concrete record type.
//!
//! Every operation validates its inputs before producing any output, so a failed operation
//! never returns a partial result.

use std::{collections::HashSet, hash::Hash};

use log::{debug, trace};
use mbset_types::{Field, FieldValue, Identified};

use crate::errors::{ConformityError, OperationError, Side};

pub type Result<T> = std::result::Result<T, OperationError>;

/// Returns `true` if every record in `list` is of the same kind.
///
/// An empty list is homogeneous.
#[must_use]
#[inline]
pub fn is_homogeneous<T: Identified>(list: &[T]) -> bool {
    match list.split_first() {
        None => true,
        Some((first, rest)) => {
            let kind = first.kind();
            rest.iter().all(|record| record.kind() == kind)
        }
    }
}

/// Remove records whose `field` has already been seen earlier in the list.
///
/// Only the first occurrence of every value is kept, and the output keeps the input order.
///
/// # Errors
///
/// Returns [`OperationError::InvalidField`] if `field` is not an identifying field of the records in `list`.
#[inline]
pub fn unique<T: Identified + Clone>(list: &[T], field: Field) -> Result<Vec<T>> {
    let unique = first_occurrences(list, |record| key(record, field))?;
    trace!(
        "unique on `{field}` kept {} of {} records",
        unique.len(),
        list.len()
    );
    Ok(unique)
}

/// Check that `left` and `right` can be combined by a set operation.
///
/// An empty list conforms to anything. Otherwise both lists must be homogeneous and hold the
/// same kind of record.
///
/// # Errors
///
/// Returns [`OperationError::TypeConformity`] if the lists cannot be combined.
#[inline]
pub fn ensure_conformity<T: Identified>(left: &[T], right: &[T]) -> Result<bool> {
    check_conformity(left, right).map(|()| true)
}

/// All the records of `left` followed by those of `right`, without duplicates.
///
/// Records are compared by the default field of their kind (see [`mbset_types::RecordKind::default_field`]),
/// and when a value appears in both lists the record from `left` is kept. Records of different
/// kinds are never duplicates of each other.
///
/// # Errors
///
/// Returns [`OperationError::TypeConformity`] if the lists cannot be combined.
#[inline]
pub fn union<T: Identified + Clone>(left: &[T], right: &[T]) -> Result<Vec<T>> {
    check_conformity(left, right)?;

    let union = first_occurrences(left.iter().chain(right), |record| {
        let kind = record.kind();
        key(record, kind.default_field()).map(|key| (kind, key))
    })?;
    debug!(
        "union of {} and {} records yielded {}",
        left.len(),
        right.len(),
        union.len()
    );
    Ok(union)
}

/// The records of `left` whose `field` matches that of some record in `right`.
///
/// # Errors
///
/// Returns [`OperationError::TypeConformity`] if the lists cannot be combined, or
/// [`OperationError::InvalidField`] if `field` is not an identifying field of the records.
#[inline]
pub fn intersection<T: Identified + Clone>(left: &[T], right: &[T], field: Field) -> Result<Vec<T>> {
    let intersection = select(left, right, field, true)?;
    debug!(
        "intersection on `{field}` kept {} of {} records",
        intersection.len(),
        left.len()
    );
    Ok(intersection)
}

/// The records of `left` whose `field` matches that of no record in `right`.
///
/// # Errors
///
/// Returns [`OperationError::TypeConformity`] if the lists cannot be combined, or
/// [`OperationError::InvalidField`] if `field` is not an identifying field of the records.
#[inline]
pub fn difference<T: Identified + Clone>(left: &[T], right: &[T], field: Field) -> Result<Vec<T>> {
    let difference = select(left, right, field, false)?;
    debug!(
        "difference on `{field}` kept {} of {} records",
        difference.len(),
        left.len()
    );
    Ok(difference)
}

fn check_conformity<T: Identified>(left: &[T], right: &[T]) -> Result<()> {
    let (Some(first_left), Some(first_right)) = (left.first(), right.first()) else {
        return Ok(());
    };

    if !is_homogeneous(left) {
        return Err(ConformityError::NotHomogeneous { side: Side::Left }.into());
    }
    if !is_homogeneous(right) {
        return Err(ConformityError::NotHomogeneous { side: Side::Right }.into());
    }

    let (left, right) = (first_left.kind(), first_right.kind());
    if left != right {
        return Err(ConformityError::KindMismatch { left, right }.into());
    }
    Ok(())
}

/// Read `field` of `record`, if the field table of its kind allows it.
fn key<T: Identified>(record: &T, field: Field) -> Result<FieldValue<'_>> {
    let kind = record.kind();
    let invalid = OperationError::InvalidField { field, kind };
    if !kind.supports(field) {
        return Err(invalid);
    }
    record.field(field).ok_or(invalid)
}

fn keys<T: Identified>(list: &[T], field: Field) -> Result<Vec<FieldValue<'_>>> {
    list.iter().map(|record| key(record, field)).collect()
}

/// Keep the first record for every key, computing all keys before producing any output.
fn first_occurrences<'a, T, K, F>(records: impl IntoIterator<Item = &'a T>, key: F) -> Result<Vec<T>>
where
    T: Clone + 'a,
    K: Eq + Hash,
    F: Fn(&'a T) -> Result<K>,
{
    let keyed = records
        .into_iter()
        .map(|record| key(record).map(|key| (record, key)))
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::with_capacity(keyed.len());
    Ok(keyed
        .into_iter()
        .filter_map(|(record, key)| seen.insert(key).then(|| record.clone()))
        .collect())
}

/// Keep the records of `left` whose key is (or, if `shared` is false, isn't) among the keys of `right`.
fn select<T: Identified + Clone>(
    left: &[T],
    right: &[T],
    field: Field,
    shared: bool,
) -> Result<Vec<T>> {
    check_conformity(left, right)?;

    let left_keys = keys(left, field)?;
    let right_keys: HashSet<FieldValue<'_>> = keys(right, field)?.into_iter().collect();

    Ok(left
        .iter()
        .zip(left_keys)
        .filter(|(_, key)| right_keys.contains(key) == shared)
        .map(|(record, _)| record.clone())
        .collect())
}
