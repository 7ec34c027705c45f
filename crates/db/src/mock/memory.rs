//! In-memory [`ClassStore`] for tests and local experiments.
//!
//! Creation stages every row on a copy of the tables and only publishes the
//! copy once all rows are accepted, which mirrors the transactional behavior
//! of [`PgClassStore`](crate::store::PgClassStore).

use std::sync::Mutex;

use async_trait::async_trait;
use eyre::{bail, eyre, Result};
use proffy_core::models::{
    class::{Class, ClassFilter, ClassListing, CreatedClass, NewClass},
    schedule::ScheduleSlot,
    user::User,
};
use uuid::Uuid;

use crate::store::ClassStore;

/// Rows held by an [`InMemoryClassStore`]
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub classes: Vec<Class>,
    pub schedule: Vec<ScheduleSlot>,
}

#[derive(Debug, Default)]
pub struct InMemoryClassStore {
    tables: Mutex<Tables>,
    fail_on_slot: Option<usize>,
}

impl InMemoryClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose creations fail when inserting the slot at `index`
    /// (zero-based), after the user and class rows were staged
    pub fn failing_on_slot(index: usize) -> Self {
        Self {
            tables: Mutex::default(),
            fail_on_slot: Some(index),
        }
    }

    /// Copy of the committed rows
    pub fn snapshot(&self) -> Tables {
        match self.tables.lock() {
            Ok(tables) => tables.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ClassStore for InMemoryClassStore {
    async fn search_classes(&self, filter: &ClassFilter) -> Result<Vec<ClassListing>> {
        let tables = self
            .tables
            .lock()
            .map_err(|_| eyre!("in-memory store lock poisoned"))?;

        let listings = tables
            .classes
            .iter()
            .filter(|class| class.subject == filter.subject)
            .filter(|class| {
                tables.schedule.iter().any(|slot| {
                    slot.class_id == class.id
                        && slot.contains(filter.week_day, filter.time_in_minutes)
                })
            })
            .filter_map(|class| {
                let user = tables.users.iter().find(|user| user.id == class.user_id)?;
                Some(ClassListing {
                    id: class.id,
                    subject: class.subject.clone(),
                    cost: class.cost,
                    user_id: user.id,
                    name: user.name.clone(),
                    avatar: user.avatar.clone(),
                    whatsapp: user.whatsapp.clone(),
                    bio: user.bio.clone(),
                })
            })
            .collect();

        Ok(listings)
    }

    async fn create_class(&self, new_class: NewClass) -> Result<CreatedClass> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| eyre!("in-memory store lock poisoned"))?;
        let mut staged = tables.clone();

        let user_id = Uuid::new_v4();
        staged.users.push(User {
            id: user_id,
            name: new_class.tutor.name,
            avatar: new_class.tutor.avatar,
            whatsapp: new_class.tutor.whatsapp,
            bio: new_class.tutor.bio,
        });

        let class_id = Uuid::new_v4();
        staged.classes.push(Class {
            id: class_id,
            subject: new_class.subject,
            cost: new_class.cost,
            user_id,
        });

        for (index, slot) in new_class.schedule.iter().enumerate() {
            if self.fail_on_slot == Some(index) {
                bail!("simulated failure inserting schedule slot {}", index);
            }
            staged.schedule.push(slot.for_class(class_id));
        }

        *tables = staged;

        Ok(CreatedClass {
            user_id,
            class_id,
            slot_count: new_class.schedule.len(),
        })
    }
}
