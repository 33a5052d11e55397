//! Browser transport for the register form.

use super::{
    submit::{REGISTER_PATH, RegisterTransport},
    types::RegisterRequest,
};
use crate::app_lib::{AppError, HttpReply, post_json_reply};

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRegisterTransport;

impl RegisterTransport for HttpRegisterTransport {
    async fn post_register(&self, request: &RegisterRequest) -> Result<HttpReply, AppError> {
        post_json_reply(REGISTER_PATH, request).await
    }
}
