/// Parameters for creating a physician.
#[derive(Debug, Clone)]
pub struct CreatePhysicianParam {
    /// Display name of the physician.
    pub name: String,
    /// Free-form introduction shown on the physician's profile.
    pub introduction: String,
}

/// Parameters for a partial physician update.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePhysicianParam {
    pub name: Option<String>,
    pub introduction: Option<String>,
}
