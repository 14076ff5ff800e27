//! Block capability model.
//!
//! Capability checking itself belongs to the hosting framework; this layer
//! only names the two capabilities it cares about and snapshots their
//! values for one request. A denied capability means the gated section is
//! omitted from the output, never an error.

use crate::types::BlockId;

/// The capabilities a block render consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// May follow the link to the standalone view page.
    SeeViewPageLink,
    /// May see the list of students enrolled in the course.
    ViewEnrolledStudents,
}

impl Capability {
    /// Wire name the hosting framework registers this capability under.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::SeeViewPageLink => "block/frame:seeviewpagelink",
            Capability::ViewEnrolledStudents => "block/frame:viewenrolledstudents",
        }
    }
}

/// Seam for the host's permission checker.
pub trait CapabilityChecker {
    /// Whether the current user holds `cap` in the context of `block`.
    fn has_capability(&self, cap: Capability, block: BlockId) -> bool;
}

/// Capability flags resolved once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_see_view_link: bool,
    pub can_view_enrolled_students: bool,
}

impl Capabilities {
    /// Snapshot both flags for `block` through `checker`.
    pub fn resolve(checker: &dyn CapabilityChecker, block: BlockId) -> Self {
        Capabilities {
            can_see_view_link: checker.has_capability(Capability::SeeViewPageLink, block),
            can_view_enrolled_students: checker
                .has_capability(Capability::ViewEnrolledStudents, block),
        }
    }
}
