//! Error types for the Nutrikit core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Empty catalog: a battle session needs at least one food pair")]
    EmptyCatalog,
}

/// Validation error with field context
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", display_label(&self.field), self.message)
    }
}

/// Map technical field names to user-friendly display labels
pub fn display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Weight",
        "height" | "height_cm" => "Height",
        "age" | "age_years" => "Age",
        "sex" => "Biological Sex",
        "activity" | "activity_level" => "Activity Level",
        "goal" => "Goal",
        "weight_unit" => "Weight Unit",
        "height_unit" => "Height Unit",
        _ => field_name,
    }
}
