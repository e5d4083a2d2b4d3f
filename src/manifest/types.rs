/// Name and version of the package about to be published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Package name (e.g., "lodash", "@types/node")
    pub name: String,
    /// Version declared in the manifest
    pub version: String,
}
