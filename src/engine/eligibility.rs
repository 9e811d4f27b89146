use crate::models::{MenuItem, TimeSlot};

/// Hard gate applied before scoring.
///
/// Only the time slot matters; weather and situation never change eligibility.
#[inline]
pub fn is_eligible(item: &MenuItem, slot: TimeSlot) -> bool {
    item.serves(slot)
}
