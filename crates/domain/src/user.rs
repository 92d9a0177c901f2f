use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether an account acts as a caregiver or as a patient.
/// Picked once after identity provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Caregiver,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Caregiver => "caregiver",
            Self::Patient => "patient",
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "caregiver" => Ok(Self::Caregiver),
            "patient" => Ok(Self::Patient),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub image: String,
    pub role: Option<Role>,
}

impl User {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            email: email.to_string(),
            image: String::new(),
            role: None,
        }
    }

    pub fn is_caregiver(&self) -> bool {
        self.role == Some(Role::Caregiver)
    }

    pub fn is_patient(&self) -> bool {
        self.role == Some(Role::Patient)
    }

    pub fn as_patient_ref(&self) -> PatientRef {
        PatientRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    pub fn as_caregiver_ref(&self) -> CaregiverRef {
        CaregiverRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl Entity<ID> for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Denormalized display reference to a patient, copied onto referencing
/// records at creation time so later renames do not invalidate history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRef {
    pub id: ID,
    pub name: String,
}

/// Denormalized display reference to a caregiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaregiverRef {
    pub id: ID,
    pub name: String,
}
