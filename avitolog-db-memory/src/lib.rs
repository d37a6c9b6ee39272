//! In-memory storage engine for Avitolog.
//!
//! All tables live behind a single lock. Any number of read-only
//! handles can be used concurrently, while only one read/write
//! handle is handed out at a time.

use anyhow::{anyhow, Result as Fallible};
use avitolog_core::{entities::*, usecases as uc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc, time::Duration};

mod repo_impl;

const LOCK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    pub users: Vec<User>,
    pub listings: Vec<Listing>,
    pub comments: Vec<Comment>,
    pub banned_words: Vec<BannedWord>,
    pub moderation_log: Vec<ModerationLogEntry>,
}

type SharedTables = Arc<RwLock<Tables>>;

pub struct DbReadOnly<'a> {
    tables: RwLockReadGuard<'a, Tables>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(tables: &'a SharedTables) -> Fallible<Self> {
        let tables = tables.try_read_for(LOCK_TIMEOUT).ok_or_else(|| {
            log::error!("Failed to obtain database lock for read-only access");
            anyhow!("Timed out waiting for read-only database access")
        })?;
        Ok(Self { tables })
    }
}

pub struct DbReadWrite<'a> {
    tables: RefCell<RwLockWriteGuard<'a, Tables>>,
}

impl<'a> DbReadWrite<'a> {
    fn try_new(tables: &'a SharedTables) -> Fallible<Self> {
        let tables = tables.try_write_for(LOCK_TIMEOUT).ok_or_else(|| {
            log::error!("Failed to obtain database lock for read/write access");
            anyhow!("Timed out waiting for read/write database access")
        })?;
        Ok(Self {
            tables: RefCell::new(tables),
        })
    }

    /// Runs the use case and restores all tables if it fails.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let mut tables = self.tables.borrow_mut();
        let snapshot = Tables::clone(&tables);
        let result = {
            let conn = DbConnection::new(&mut tables);
            f(&conn).map_err(Into::into)
        };
        if let Err(err) = &result {
            log::debug!("Rolling back transaction: {err}");
            **tables = snapshot;
        }
        result
    }
}

/// Read/write access within a transaction.
pub struct DbConnection<'a> {
    tables: RefCell<&'a mut Tables>,
}

impl<'a> DbConnection<'a> {
    fn new(tables: &'a mut Tables) -> Self {
        Self {
            tables: RefCell::new(tables),
        }
    }
}

// Uniform access to the tables behind the different handles.
pub(crate) trait Access {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> T;
    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T;
}

impl Access for DbReadOnly<'_> {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> T {
        f(&self.tables)
    }
    fn write<T>(&self, _f: impl FnOnce(&mut Tables) -> T) -> T {
        unreachable!("write access through a read-only connection");
    }
}

impl Access for DbReadWrite<'_> {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> T {
        f(&self.tables.borrow())
    }
    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        f(&mut self.tables.borrow_mut())
    }
}

impl Access for DbConnection<'_> {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> T {
        f(&self.tables.borrow())
    }
    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        f(&mut self.tables.borrow_mut())
    }
}

#[derive(Clone, Default)]
pub struct Connections {
    tables: SharedTables,
}

impl Connections {
    pub fn init() -> Self {
        log::info!("Initializing in-memory database");
        Self::default()
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        DbReadOnly::try_new(&self.tables)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        DbReadWrite::try_new(&self.tables)
    }
}
