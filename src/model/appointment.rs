use chrono::{DateTime, Utc};

/// Parameters for booking an appointment between an existing physician and patient.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParam {
    /// When the appointment takes place.
    pub appointment_date: DateTime<Utc>,
    pub physician_id: i32,
    pub patient_id: i32,
}

/// Parameters for a partial appointment update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentParam {
    pub appointment_date: Option<DateTime<Utc>>,
    pub physician_id: Option<i32>,
    pub patient_id: Option<i32>,
}
