pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug)]
pub enum ModelError {
    DuplicateId { id: String },

    UnknownParent { id: String, parent: String },

    UnknownEndpoint {
        source: String,
        target: String,
        missing: String,
    },

    ParentCycle { id: String },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DuplicateId { id } => write!(f, "Duplicate element id: {id}"),
            ModelError::UnknownParent { id, parent } => {
                write!(f, "Node {id} references unknown parent {parent}")
            }
            ModelError::UnknownEndpoint {
                source,
                target,
                missing,
            } => write!(
                f,
                "Edge {source} -> {target} references unknown element {missing}"
            ),
            ModelError::ParentCycle { id } => write!(f, "Containment cycle through element {id}"),
        }
    }
}

impl std::error::Error for ModelError {}
