use crate::dtos::{CareLinkDTO, CareRequestDTO, UserDTO};
use carebridge_domain::{CareLink, CareRequest, User, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRequestResponse {
    pub request: CareRequestDTO,
}

impl CareRequestResponse {
    pub fn new(request: CareRequest) -> Self {
        Self {
            request: CareRequestDTO::new(request),
        }
    }
}

pub mod send_care_request {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub patient_email: String,
    }

    pub type APIResponse = CareRequestResponse;
}

pub mod accept_care_request {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub request_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub link: CareLinkDTO,
    }

    impl APIResponse {
        pub fn new(link: CareLink) -> Self {
            Self {
                link: CareLinkDTO::new(link),
            }
        }
    }
}

pub mod reject_care_request {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub request_id: ID,
    }

    pub type APIResponse = CareRequestResponse;
}

pub mod list_care_requests {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub requests: Vec<CareRequestDTO>,
    }

    impl APIResponse {
        pub fn new(requests: Vec<CareRequest>) -> Self {
            Self {
                requests: requests.into_iter().map(CareRequestDTO::new).collect(),
            }
        }
    }
}

pub mod list_patients {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub patients: Vec<UserDTO>,
    }

    impl APIResponse {
        pub fn new(patients: Vec<User>) -> Self {
            Self {
                patients: patients.into_iter().map(UserDTO::new).collect(),
            }
        }
    }
}

pub mod list_caregivers {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub caregivers: Vec<UserDTO>,
    }

    impl APIResponse {
        pub fn new(caregivers: Vec<User>) -> Self {
            Self {
                caregivers: caregivers.into_iter().map(UserDTO::new).collect(),
            }
        }
    }
}
