//! Source tree driver: flat group-id persistence of the source tree.
//!
//! The collection is a tree (groups nest ordered sub-collections), but the
//! wire form is a flat record stream. Group structure is carried by a
//! per-record group-id field: consecutive records sharing an id belong to
//! one group, `NO_GROUP_ID` marks ungrouped records, and any id change is
//! a group boundary. Group ids are allocated once per save session from a
//! monotonically increasing counter and never reused, so an id that moves
//! backwards on read is diagnostic of a corrupt stream.
//!
//! The counter is threaded through the recursive walk as an argument and
//! return value rather than mutated on a saver object, which keeps the
//! traversal referentially transparent.
//!
//! Per flat record: tag (tag queue), group_id(u32), last_modified(u64),
//! then the source codec's payload. The timestamp is attached here, at the
//! persistence boundary — codecs never see it.

use crate::dispatch::source_tag;
use crate::error::{DecodeError, EncodeError};
use crate::registry::source_registry;
use crate::store::{DocumentEnv, RecordStore};
use terramesh_model::{Source, SourceCollection, SourceGroup, SourceRecord};
use tracing::warn;

/// Group id of records outside any group.
pub const NO_GROUP_ID: u32 = u32::MAX;

/// Encode a source collection into the store's source section.
///
/// Order-significant: records are written exactly as presented, with
/// groups flattened in place.
pub fn encode_source_collection(
    collection: &SourceCollection,
    env: &DocumentEnv,
    store: &mut dyn RecordStore,
) -> Result<(), EncodeError> {
    if collection.is_empty() {
        store.set_source_count(0);
        return Ok(());
    }
    store.set_source_count(flat_record_count(&collection.records));
    encode_records(&collection.records, NO_GROUP_ID, 0, env, store)?;
    Ok(())
}

/// Number of flat records the collection will emit (leaves only; groups
/// contribute their recursive leaf count and no record of their own).
fn flat_record_count(records: &[SourceRecord]) -> u32 {
    records
        .iter()
        .map(|record| match &record.source {
            Source::Group(group) => flat_record_count(&group.records),
            _ => 1,
        })
        .sum()
}

/// Walk one level of the tree, emitting leaves under `group_id`.
///
/// `next_group_id` is the allocation counter; the updated counter comes
/// back as the return value so sibling groups never share an id, even
/// when a group is empty.
fn encode_records(
    records: &[SourceRecord],
    group_id: u32,
    mut next_group_id: u32,
    env: &DocumentEnv,
    store: &mut dyn RecordStore,
) -> Result<u32, EncodeError> {
    let registry = source_registry();
    for record in records {
        match &record.source {
            Source::Group(group) => {
                let fresh = next_group_id;
                next_group_id += 1;
                next_group_id = encode_records(&group.records, fresh, next_group_id, env, store)?;
            }
            source => {
                let tag = source_tag(source);
                let codec = registry
                    .lookup(tag.as_u32())
                    .expect("dispatched tags are always registered");
                store.push_tag(tag.as_u32());
                store.put_u32(group_id);
                store.put_u64(record.last_modified);
                codec.encode(source, env, store)?;
            }
        }
    }
    Ok(next_group_id)
}

/// Decode a source collection from the store's source section.
pub fn decode_source_collection(
    env: &DocumentEnv,
    store: &mut dyn RecordStore,
) -> Result<SourceCollection, DecodeError> {
    let count = store.source_count()?;
    let registry = source_registry();

    let mut collection = SourceCollection::new();
    let mut current_group_id = NO_GROUP_ID;
    // Highest group id opened so far; ids are allocated monotonically, so
    // anything at or below this after the group closed is corruption.
    let mut highest_group_id: Option<u32> = None;

    for _ in 0..count {
        let tag = store.pop_tag()?;
        let Some(codec) = registry.lookup(tag) else {
            warn!(
                tag,
                known = registry.count(),
                "source kind from a newer writer; keeping the records read so far"
            );
            break;
        };
        let group_id = store.take_u32()?;
        let last_modified = store.take_u64()?;
        let source = codec.decode(env, store)?;
        let record = SourceRecord::new(source, last_modified);

        if group_id == NO_GROUP_ID {
            collection.push(record);
            current_group_id = NO_GROUP_ID;
        } else if group_id == current_group_id {
            append_to_active_group(&mut collection, record)?;
        } else {
            // A new group opens. Its id must exceed every id seen so far.
            if let Some(highest) = highest_group_id {
                if group_id <= highest {
                    return Err(DecodeError::GroupOrder {
                        last: highest,
                        found: group_id,
                    });
                }
            }
            highest_group_id = Some(group_id);
            collection.push(SourceRecord::group(SourceGroup {
                records: vec![record],
            }));
            current_group_id = group_id;
        }
    }

    Ok(collection)
}

fn append_to_active_group(
    collection: &mut SourceCollection,
    record: SourceRecord,
) -> Result<(), DecodeError> {
    match collection.records.last_mut() {
        Some(SourceRecord {
            source: Source::Group(group),
            ..
        }) => {
            group.records.push(record);
            Ok(())
        }
        // current_group_id is only ever set when a group record is at the
        // tail, so this indicates a driver bug rather than stream content
        _ => Err(DecodeError::Malformed(
            "active group id with no open group".to_string(),
        )),
    }
}
