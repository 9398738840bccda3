use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct BadRequestResponse {
    pub message: String,
}

#[derive(Object, Debug)]
pub struct BadGatewayResponse {
    pub detail: String,
}

#[derive(Object, Debug)]
pub struct InternalServerErrorResponse {
    pub detail: String,
}

impl InternalServerErrorResponse {
    pub fn new(filepath: &str, function: &str, identifier: &str, err: &str) -> Self {
        let msg = format!(
            "error: on {}::{} iden: {} error: {}",
            filepath, function, identifier, err
        );
        tracing::error!("{}", msg);
        Self {
            detail: msg.to_string(),
        }
    }
}
