//! In-process stores implementing the domain's driven ports.
//!
//! Each adapter keeps its state behind an `RwLock` so the service can run
//! multi-threaded under actix without external infrastructure. Lock poisoning
//! is recovered with `into_inner`: the guarded maps are always left in a
//! consistent state because no adapter method can panic between mutations.

mod activities;
mod bookings;
mod catalogue;
mod itineraries;
mod notifications;
mod payments;

pub use activities::SeededActivityCatalogue;
pub use bookings::InMemoryBookingRepository;
pub use catalogue::{InMemoryTourCatalogue, SeedCatalogueError};
pub use itineraries::InMemoryItineraryRepository;
pub use notifications::InMemoryNotificationRepository;
pub use payments::InMemoryPaymentRepository;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

fn read_guard<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_guard<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
