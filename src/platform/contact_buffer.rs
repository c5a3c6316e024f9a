//=========================================================================
// Contact Buffer
//
// Ordered set of contacts currently down on the surface, keyed by the
// platform's touch id.
//
// Responsibilities:
// - Keep contacts in touch-down order (first finger is contact 0)
// - Update positions in place as contacts move
// - Produce the coordinate slice handed to the tracker
//
// Notes:
// Order matters: the two-contact angle is measured from contact 1 to
// contact 0, so reordering would flip the reported direction.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::gesture::Point;

//=== ContactBuffer =======================================================

pub(crate) struct ContactBuffer {
    contacts: Vec<(u64, Point)>,
}

impl ContactBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Two contacts is the working set; a few spare slots absorb a third
    // or fourth finger without reallocating.
    //
    pub fn new() -> Self {
        const BASE_CAPACITY: usize = 4;

        Self {
            contacts: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Adds a contact, or repositions it if the id is already down.
    pub fn insert(&mut self, id: u64, point: Point) {
        match self.position_mut(id) {
            Some(existing) => *existing = point,
            None => self.contacts.push((id, point)),
        }
    }

    /// Repositions a known contact. Returns `false` for unknown ids.
    pub fn update(&mut self, id: u64, point: Point) -> bool {
        match self.position_mut(id) {
            Some(existing) => {
                *existing = point;
                true
            }
            None => false,
        }
    }

    /// Removes a contact. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|(contact_id, _)| *contact_id != id);
        self.contacts.len() != before
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, id: u64) -> bool {
        self.contacts.iter().any(|(contact_id, _)| *contact_id == id)
    }

    /// Coordinates in touch-down order.
    pub fn points(&self) -> Vec<Point> {
        self.contacts.iter().map(|(_, point)| *point).collect()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    fn position_mut(&mut self, id: u64) -> Option<&mut Point> {
        self.contacts
            .iter_mut()
            .find(|(contact_id, _)| *contact_id == id)
            .map(|(_, point)| point)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
