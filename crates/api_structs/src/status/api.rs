use serde::{Deserialize, Serialize};

pub mod check_status {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }
}
