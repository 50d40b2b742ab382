use glam::*;

/// A host-side object handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// A host-side mesh vertex handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    /// The object owning the mesh.
    pub mesh: ObjectId,
    /// The vertex index in the mesh.
    pub index: u32,
}

/// A handle to something the host can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CandidateHandle {
    /// A whole scene object.
    Object(ObjectId),
    /// A vertex of the active mesh.
    Vertex(VertexId),
}

impl From<ObjectId> for CandidateHandle {
    fn from(id: ObjectId) -> Self {
        Self::Object(id)
    }
}

impl From<VertexId> for CandidateHandle {
    fn from(id: VertexId) -> Self {
        Self::Vertex(id)
    }
}

/// What the host enumerates as candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectMode {
    /// Every visible object in the scene, by origin.
    #[default]
    Objects,
    /// The vertices of the active mesh.
    MeshVertices,
}

/// A selectable entity with its screen projection.
///
/// The projection is taken once when the lasso starts and never updated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The host handle.
    pub handle: CandidateHandle,
    /// The projection in viewport region coordinates.
    pub projection: Vec2,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(handle: impl Into<CandidateHandle>, projection: Vec2) -> Self {
        Self {
            handle: handle.into(),
            projection,
        }
    }
}
