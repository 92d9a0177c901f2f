use carebridge_domain::{CareLink, CareRequest, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareLinkDTO {
    pub id: ID,
    pub caregiver_id: ID,
    pub patient_id: ID,
    pub caregiver_name: String,
    pub patient_name: String,
}

impl CareLinkDTO {
    pub fn new(link: CareLink) -> Self {
        Self {
            id: link.id,
            caregiver_id: link.caregiver_id,
            patient_id: link.patient_id,
            caregiver_name: link.caregiver_name,
            patient_name: link.patient_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRequestDTO {
    pub id: ID,
    pub caregiver_id: ID,
    pub patient_id: ID,
    pub caregiver_name: String,
    pub patient_name: String,
}

impl CareRequestDTO {
    pub fn new(request: CareRequest) -> Self {
        Self {
            id: request.id,
            caregiver_id: request.caregiver_id,
            patient_id: request.patient_id,
            caregiver_name: request.caregiver_name,
            patient_name: request.patient_name,
        }
    }
}
