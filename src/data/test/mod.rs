mod appointment;
mod patient;
mod physician;
