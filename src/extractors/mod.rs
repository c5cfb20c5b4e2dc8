//! Request extractors whose rejections render as [`AppError`](crate::error::AppError).

mod json;
mod unit_of_work;
pub use json::JsonObject;
