/// Parameters for creating a patient.
#[derive(Debug, Clone)]
pub struct CreatePatientParam {
    pub name: String,
}

/// Parameters for a partial patient update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePatientParam {
    pub name: Option<String>,
}
