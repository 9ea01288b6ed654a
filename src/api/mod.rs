pub mod handlers;

use log::error;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::io::Cursor;

/// Body returned for every internal failure. The cause is logged server
/// side; the client only ever sees this generic message.
pub const STAGE_ERROR_BODY: &str = "Error processing stage data.";

#[derive(Debug)]
pub struct AppError {
    pub status: Status,
    pub error: anyhow::Error,
}

#[rocket::async_trait]
impl<'r, 'o: 'r> Responder<'r, 'o> for AppError {
    fn respond_to(self, _req: &'r Request<'_>) -> response::Result<'o> {
        error!("Error processing stages: {:?}", self.error);

        Response::build()
            .status(self.status)
            .header(ContentType::Plain)
            .sized_body(STAGE_ERROR_BODY.len(), Cursor::new(STAGE_ERROR_BODY))
            .ok()
    }
}

impl<E> From<E> for AppError
where
    anyhow::Error: From<E>,
{
    fn from(err: E) -> Self {
        AppError {
            status: Status::InternalServerError,
            error: anyhow::Error::from(err),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
