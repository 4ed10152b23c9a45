use crate::certification::Certification;
use crate::education::Education;
use crate::error::{FolioError, Result};
use crate::experience::Experience;
use crate::io;
use crate::ordering::{self, Orderable};
use crate::paths;
use crate::project::Project;
use crate::publication::Publication;
use crate::skill::Skill;
use crate::social_link::SocialLink;
use crate::types::EntityKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored content record. One YAML document per collection holds every
/// record of a kind; the store rewrites the whole document atomically on
/// each mutation (collections are tens of records, not thousands).
pub trait Entity: Serialize + DeserializeOwned + Clone + Orderable {
    const KIND: EntityKind;

    fn id(&self) -> Option<Uuid>;
    fn set_id(&mut self, id: Uuid);
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);

    /// Give a draft with no explicit position the next free slot, matching
    /// how the admin panel numbers new rows. Kinds without a manual order
    /// ignore this.
    fn assign_order_if_unset(&mut self, _position: usize) {}

    /// Returns false for kinds that have no manual order field.
    fn set_display_order(&mut self, _order: i64) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Typed CRUD
// ---------------------------------------------------------------------------

pub fn load_all<T: Entity>(root: &Path) -> Result<Vec<T>> {
    let path = paths::collection_path(root, T::KIND);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = std::fs::read_to_string(&path)?;
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(&data)?)
}

pub fn save_all<T: Entity>(root: &Path, records: &[T]) -> Result<()> {
    let data = serde_yaml::to_string(records)?;
    io::atomic_write(&paths::collection_path(root, T::KIND), data.as_bytes())
}

/// The public read path: active records only, in presentation order.
/// Filtering happens here, not in the orderer.
pub fn fetch_active<T: Entity>(root: &Path) -> Result<Vec<T>> {
    let active: Vec<T> = load_all::<T>(root)?
        .into_iter()
        .filter(|r| r.is_active())
        .collect();
    Ok(ordering::order_for_display(
        &active,
        T::KIND.default_strategy(),
    ))
}

/// The admin read path: everything, same ordering.
pub fn list_all<T: Entity>(root: &Path) -> Result<Vec<T>> {
    let all = load_all::<T>(root)?;
    Ok(ordering::order_for_display(&all, T::KIND.default_strategy()))
}

/// Persist a draft. Assigns an id if the record has none, and a default
/// position at the end of the collection if none was given.
pub fn insert<T: Entity>(root: &Path, mut record: T) -> Result<T> {
    let mut all = load_all::<T>(root)?;
    record.assign_order_if_unset(all.len());
    if record.id().is_none() {
        record.set_id(Uuid::new_v4());
    }
    all.push(record.clone());
    save_all(root, &all)?;
    Ok(record)
}

/// Replace the record with the given id. The stored id wins over whatever
/// the payload carried.
pub fn update<T: Entity>(root: &Path, id: Uuid, mut record: T) -> Result<T> {
    let mut all = load_all::<T>(root)?;
    let slot = all
        .iter_mut()
        .find(|r| r.id() == Some(id))
        .ok_or_else(|| FolioError::RecordNotFound(id.to_string()))?;
    record.set_id(id);
    *slot = record.clone();
    save_all(root, &all)?;
    Ok(record)
}

pub fn delete<T: Entity>(root: &Path, id: Uuid) -> Result<()> {
    let mut all = load_all::<T>(root)?;
    let before = all.len();
    all.retain(|r| r.id() != Some(id));
    if all.len() == before {
        return Err(FolioError::RecordNotFound(id.to_string()));
    }
    save_all(root, &all)
}

// ---------------------------------------------------------------------------
// Kind-dispatched JSON surface
// ---------------------------------------------------------------------------
//
// The server and CLI address collections by `EntityKind`; this is the one
// place that maps a kind back to its concrete type.

macro_rules! dispatch {
    ($kind:expr, $f:ident ( $($args:expr),* )) => {
        match $kind {
            EntityKind::Project => $f::<Project>($($args),*),
            EntityKind::Skill => $f::<Skill>($($args),*),
            EntityKind::Certification => $f::<Certification>($($args),*),
            EntityKind::Publication => $f::<Publication>($($args),*),
            EntityKind::SocialLink => $f::<SocialLink>($($args),*),
            EntityKind::Experience => $f::<Experience>($($args),*),
            EntityKind::Education => $f::<Education>($($args),*),
        }
    };
}

pub fn fetch_active_json(root: &Path, kind: EntityKind) -> Result<serde_json::Value> {
    fn go<T: Entity>(root: &Path) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(fetch_active::<T>(root)?)?)
    }
    dispatch!(kind, go(root))
}

pub fn list_all_json(root: &Path, kind: EntityKind) -> Result<serde_json::Value> {
    fn go<T: Entity>(root: &Path) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(list_all::<T>(root)?)?)
    }
    dispatch!(kind, go(root))
}

pub fn insert_json(
    root: &Path,
    kind: EntityKind,
    payload: serde_json::Value,
) -> Result<serde_json::Value> {
    fn go<T: Entity>(root: &Path, payload: serde_json::Value) -> Result<serde_json::Value> {
        let record: T = serde_json::from_value(payload)?;
        Ok(serde_json::to_value(insert(root, record)?)?)
    }
    dispatch!(kind, go(root, payload))
}

pub fn update_json(
    root: &Path,
    kind: EntityKind,
    id: Uuid,
    payload: serde_json::Value,
) -> Result<serde_json::Value> {
    fn go<T: Entity>(
        root: &Path,
        id: Uuid,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let record: T = serde_json::from_value(payload)?;
        Ok(serde_json::to_value(update(root, id, record)?)?)
    }
    dispatch!(kind, go(root, id, payload))
}

pub fn delete_json(root: &Path, kind: EntityKind, id: Uuid) -> Result<()> {
    fn go<T: Entity>(root: &Path, id: Uuid) -> Result<()> {
        delete::<T>(root, id)
    }
    dispatch!(kind, go(root, id))
}

pub fn set_active_json(
    root: &Path,
    kind: EntityKind,
    id: Uuid,
    active: bool,
) -> Result<serde_json::Value> {
    fn go<T: Entity>(root: &Path, id: Uuid, active: bool) -> Result<serde_json::Value> {
        let mut all = load_all::<T>(root)?;
        let slot = all
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| FolioError::RecordNotFound(id.to_string()))?;
        slot.set_active(active);
        let updated = serde_json::to_value(&*slot)?;
        save_all(root, &all)?;
        Ok(updated)
    }
    dispatch!(kind, go(root, id, active))
}

pub fn set_order_json(
    root: &Path,
    kind: EntityKind,
    id: Uuid,
    order: i64,
) -> Result<serde_json::Value> {
    if !kind.has_manual_order() {
        return Err(FolioError::OrderNotSupported(kind.to_string()));
    }
    fn go<T: Entity>(root: &Path, id: Uuid, order: i64) -> Result<serde_json::Value> {
        let mut all = load_all::<T>(root)?;
        let slot = all
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| FolioError::RecordNotFound(id.to_string()))?;
        slot.set_display_order(order);
        let updated = serde_json::to_value(&*slot)?;
        save_all(root, &all)?;
        Ok(updated)
    }
    dispatch!(kind, go(root, id, order))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
