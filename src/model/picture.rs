/// Record a picture is attached to.
///
/// Stored as the `imageable_type`/`imageable_id` column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imageable {
    Physician(i32),
}

impl Imageable {
    /// Value stored in `imageable_type`.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Physician(_) => "Physician",
        }
    }

    /// Value stored in `imageable_id`.
    pub fn id(self) -> i32 {
        match self {
            Self::Physician(id) => id,
        }
    }
}

/// Parameters for attaching a new picture to an owner.
#[derive(Debug, Clone)]
pub struct CreatePictureParam {
    pub name: String,
    pub url: String,
    pub owner: Imageable,
}

/// Parameters for a partial picture update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePictureParam {
    pub name: Option<String>,
    pub url: Option<String>,
}
