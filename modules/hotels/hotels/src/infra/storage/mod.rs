//! Storage infrastructure for the hotels module.

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;
